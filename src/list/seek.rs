//! Position resolution.
//!
//! Positional operations first resolve the node currently occupying a
//! position. Both ends are anchored, so the walk always starts from the
//! end nearer to the target and follows at most *len*/2 links. This
//! halving of the worst-case traversal distance is the key algorithmic
//! idea of the structure.

use std::ptr::NonNull;

use crate::list::{List, Node};

impl<T> List<T> {
    /// Resolve the node currently occupying position `at`.
    ///
    /// The caller must have checked `at < self.len` (which implies a
    /// non-empty list), so resolution itself has no error path.
    pub(crate) fn node_at(&self, at: usize) -> NonNull<Node<T>> {
        debug_assert!(at < self.len, "cannot resolve a nonexistent position");

        let head = self.head.expect("a non-empty list has a head");
        let tail = self.tail.expect("a non-empty list has a tail");
        if at == 0 {
            return head;
        }
        if at == self.len - 1 {
            return tail;
        }
        if at <= self.len / 2 {
            // Walk forward from the head, following `next` exactly `at`
            // times.
            let mut node = head;
            for _ in 0..at {
                // SAFETY: every node before the tail has a `next` link,
                // and the walk stays strictly before position `len - 1`.
                node = unsafe { node.as_ref().next }
                    .expect("a node before the tail has a successor");
            }
            node
        } else {
            // Walk backward from the tail, following `prev` exactly
            // `len - 1 - at` times.
            let mut node = tail;
            for _ in 0..(self.len - 1 - at) {
                // SAFETY: every node after the head has a `prev` link,
                // and the walk stays strictly after position 0.
                node = unsafe { node.as_ref().prev }
                    .expect("a node after the head has a predecessor");
            }
            node
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;

    #[test]
    fn resolves_every_position() {
        let mut list = List::new();
        for value in 0..11 {
            list.push_back(value);
        }
        // Exercises the head and tail fast paths and both walk
        // directions, including the midpoint.
        for at in 0..11 {
            assert_eq!(list.get(at), Ok(&(at as i32)));
        }
    }

    #[test]
    fn resolves_in_a_two_element_list() {
        let mut list = List::new();
        list.push_back('a');
        list.push_back('b');
        assert_eq!(list.get(0), Ok(&'a'));
        assert_eq!(list.get(1), Ok(&'b'));
    }

    #[test]
    fn interior_operations_agree_with_both_walk_directions() {
        // Mutating through positions in the back half must land on the
        // same nodes as reading through the front half.
        let mut list = List::new();
        for value in 0..10 {
            list.push_back(value);
        }
        *list.get_mut(7).unwrap() = 70;
        *list.get_mut(2).unwrap() = 20;
        let values: Vec<i32> = (0..10).map(|at| *list.get(at).unwrap()).collect();
        assert_eq!(values, vec![0, 1, 20, 3, 4, 5, 6, 70, 8, 9]);
    }
}
