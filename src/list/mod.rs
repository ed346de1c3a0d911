use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::InvalidPosition;

mod render;
mod seek;

/// The `List` is a doubly-linked list with owned nodes, addressed by
/// 0-indexed positions.
///
/// Inserting or removing at either end computes in *O*(1) time; an
/// operation at an interior position first resolves the node by walking
/// from the nearer end, so it follows at most *len*/2 links.
///
/// The `List` contains:
/// - the `head` and `tail` anchors, absent exactly when the list is
///   empty;
/// - a length field `len`, always equal to the number of chained nodes.
///
/// # Naming Conventions
///
/// - `at`: a 0-indexed position; position 0 is the head, position
///   `len - 1` is the tail;
/// - `prev`/`next`: the links of a node toward the head and toward the
///   tail, absent at the respective end of the chain.
pub struct List<T> {
    head: Link<T>,
    tail: Link<T>,
    /// the number of nodes in the chain
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) next: Link<T>,
    pub(crate) prev: Link<T>,
    pub(crate) element: T,
}

// private methods
impl<T> List<T> {
    /// Attach a detached node `node` to the list, between `prev` and
    /// `next`, where an absent `prev` stands for the head anchor and an
    /// absent `next` for the tail anchor.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If `prev` and `next` do not belong to the list, or they are not
    /// adjacent, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: Link<T>,
        next: Link<T>,
        mut node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        {
            let node = node.as_mut();
            node.prev = prev;
            node.next = next;
        }
        match prev {
            Some(mut prev) => prev.as_mut().next = Some(node),
            None => self.head = Some(node),
        }
        match next {
            Some(mut next) => next.as_mut().prev = Some(node),
            None => self.tail = Some(node),
        }
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(node));
            self.assert_adjacent(Some(node), next);
        }
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// The neighbors of `node` are relinked to each other; when `node` is
    /// an end of the chain, the corresponding anchor takes its neighbor
    /// instead (or becomes absent, if `node` was the sole node).
    ///
    /// It is unsafe because it does not check whether `node` belongs to
    /// the list. If it does not, this function call will make the list
    /// ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        let node = Box::from_raw(node.as_ptr());
        match node.prev {
            Some(mut prev) => prev.as_mut().next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(mut next) => next.as_mut().prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        node
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Link<T>, next: Link<T>) {
        // An absent link stands for the anchor on its side.
        unsafe {
            match prev {
                Some(prev) => assert_eq!(prev.as_ref().next, next),
                None => assert_eq!(self.head, next),
            }
            match next {
                Some(next) => assert_eq!(next.as_ref().prev, prev),
                None => assert_eq!(self.tail, prev),
            }
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use positional_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.len(), 0);
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Inserts `value` so that it occupies position `at`; the elements
    /// previously at positions `at` and later shift one position toward
    /// the tail.
    ///
    /// A position at or past the current length appends at the tail
    /// instead of failing, so this operation cannot fail. In particular,
    /// inserting into an empty list makes the new node both head and
    /// tail, irrespective of `at`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time at either end and
    /// *O*(min(`at`, `len - at`)) time at an interior position.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.insert(0, 'a'); // [a]
    /// list.insert(0, 'b'); // [b, a]
    /// list.insert(2, 'c'); // [b, a, c]
    /// list.insert(1, 'd'); // [b, d, a, c]
    /// list.insert(100, 'e'); // [b, d, a, c, e] -- clamped to the end
    ///
    /// assert_eq!(list.get(0), Ok(&'b'));
    /// assert_eq!(list.get(1), Ok(&'d'));
    /// assert_eq!(list.get(4), Ok(&'e'));
    /// assert_eq!(list.len(), 5);
    /// ```
    pub fn insert(&mut self, at: usize, value: T) {
        let node = Node::new_detached(value);
        if at == 0 {
            // New head; also covers the empty list, where `head` is absent.
            unsafe { self.attach_node(None, self.head, node) };
        } else if at >= self.len {
            // Past the end: append at the tail.
            unsafe { self.attach_node(self.tail, None, node) };
        } else {
            // `0 < at < len`, so the node at `at` and its predecessor
            // both exist.
            let next = self.node_at(at);
            // SAFETY: `next` is a valid node of this list, so its `prev`
            // link and `next` itself form an adjacent pair.
            unsafe {
                let prev = next.as_ref().prev;
                self.attach_node(prev, Some(next), node);
            }
        }
    }

    /// Removes the element at position `at` and returns it; the elements
    /// previously at later positions shift one position toward the head.
    ///
    /// Unlike [`insert`], this operation is strict: a position at or past
    /// the current length (including any position on an empty list) is an
    /// [`InvalidPosition`] error, and the list is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time at either end and
    /// *O*(min(`at`, `len - at`)) time at an interior position.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_list::List;
    ///
    /// let mut list = List::new();
    /// for (at, value) in [(0, 1), (1, 2), (2, 3)].iter() {
    ///     list.insert(*at, *value);
    /// }
    ///
    /// assert_eq!(list.remove(1), Ok(2)); // [1, 3]
    /// assert_eq!(list.remove(1), Ok(3)); // [1]
    /// assert!(list.remove(1).is_err());
    /// assert_eq!(list.remove(0), Ok(1)); // []
    /// assert!(list.remove(0).is_err());
    /// ```
    ///
    /// [`insert`]: crate::List::insert
    pub fn remove(&mut self, at: usize) -> Result<T, InvalidPosition> {
        self.check_bounds(at)?;
        let node = self.node_at(at);
        // SAFETY: `node` was just resolved within this list.
        let node = unsafe { self.detach_node(node) };
        Ok(Node::into_element(node))
    }

    /// Provides a reference to the element at position `at`, with the
    /// same bounds contract as [`remove`].
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.get(0), Ok(&1));
    /// assert_eq!(list.get(1), Ok(&2));
    /// assert!(list.get(2).is_err());
    /// ```
    ///
    /// [`remove`]: crate::List::remove
    pub fn get(&self, at: usize) -> Result<&T, InvalidPosition> {
        self.check_bounds(at)?;
        // SAFETY: `node_at` resolves a valid node of this list, and the
        // returned borrow is tied to `&self`.
        unsafe { Ok(&self.node_at(at).as_ref().element) }
    }

    /// Provides a mutable reference to the element at position `at`, with
    /// the same bounds contract as [`remove`].
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// *list.get_mut(1).unwrap() += 10;
    /// assert_eq!(list.get(1), Ok(&12));
    /// ```
    ///
    /// [`remove`]: crate::List::remove
    pub fn get_mut(&mut self, at: usize) -> Result<&mut T, InvalidPosition> {
        self.check_bounds(at)?;
        // SAFETY: `node_at` resolves a valid node of this list, and the
        // returned borrow is tied to `&mut self`.
        unsafe { Ok(&mut self.node_at(at).as_mut().element) }
    }

    fn check_bounds(&self, at: usize) -> Result<(), InvalidPosition> {
        if at >= self.len {
            return Err(InvalidPosition { at, len: self.len });
        }
        Ok(())
    }

    /// Provides a reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: the head anchor, when present, is a valid node.
        self.head.map(|node| unsafe { &node.as_ref().element })
    }

    /// Provides a mutable reference to the front element, or `None` if
    /// the list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the head anchor, when present, is a valid node.
        self.head
            .map(|mut node| unsafe { &mut node.as_mut().element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: the tail anchor, when present, is a valid node.
        self.tail.map(|node| unsafe { &node.as_ref().element })
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: the tail anchor, when present, is a valid node.
        self.tail
            .map(|mut node| unsafe { &mut node.as_mut().element })
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: the head anchor and an absent `prev` are adjacent.
        unsafe { self.attach_node(None, self.head, node) };
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: the tail anchor and an absent `next` are adjacent.
        unsafe { self.attach_node(self.tail, None, node) };
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head?;
        // SAFETY: the head anchor is a valid node of this list.
        let node = unsafe { self.detach_node(node) };
        Some(Node::into_element(node))
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let node = self.tail?;
        // SAFETY: the tail anchor is a valid node of this list.
        let node = unsafe { self.detach_node(node) };
        Some(Node::into_element(node))
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with the given element; its links are
    /// absent until it is attached.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            prev: None,
            element,
        })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` is covariant in its type parameter.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
}
