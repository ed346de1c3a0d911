//! The error type of positional operations.

use std::error::Error;
use std::fmt;
use std::fmt::Formatter;

/// The sole error of the list: a position argument that does not name an
/// existing node.
///
/// It is reported by the strict positional operations ([`remove`],
/// [`get`], [`get_mut`]) when the position is at or past the current
/// length, which includes every position on an empty list. The failing
/// operation performs no mutation.
///
/// [`insert`] never reports it: inserting past the end appends instead.
///
/// # Examples
///
/// ```
/// use positional_list::List;
///
/// let mut list = List::new();
/// list.insert(0, 7);
///
/// let err = list.remove(3).unwrap_err();
/// assert_eq!(err.at(), 3);
/// assert_eq!(err.len(), 1);
/// assert_eq!(err.to_string(), "invalid position 3 for a list of length 1");
/// ```
///
/// [`insert`]: crate::List::insert
/// [`remove`]: crate::List::remove
/// [`get`]: crate::List::get
/// [`get_mut`]: crate::List::get_mut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPosition {
    pub(crate) at: usize,
    pub(crate) len: usize,
}

impl InvalidPosition {
    /// The rejected position.
    pub fn at(&self) -> usize {
        self.at
    }

    /// The length of the list at the time of the call.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for InvalidPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid position {} for a list of length {}",
            self.at, self.len
        )
    }
}

impl Error for InvalidPosition {}

#[cfg(test)]
mod tests {
    use super::InvalidPosition;

    #[test]
    fn display() {
        let err = InvalidPosition { at: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "invalid position 4 for a list of length 2"
        );
        assert_eq!(err.at(), 4);
        assert_eq!(err.len(), 2);
    }
}
