//! A fully safe variant of the two-anchor list, built from split
//! reference counts ([`StaticRc`]) and branded cells ([`GhostCell`]).
//!
//! Ownership of every node is divided into two halves. One half is held
//! by whatever points at the node from the front direction (its
//! predecessor's forward link, or the front anchor), the other by
//! whatever points at it from the back direction. Joining the two halves
//! yields the whole node back, which is how removal recovers the element
//! without any unsafe code.
//!
//! The variant supports end insertion and removal with a maintained
//! count. Resolving an interior position is out of reach here: the walk
//! needs shared borrows of the token that conflict with the mutable
//! borrows relinking requires, and the halves themselves cannot be
//! duplicated. The raw-pointer list in [`crate::list`] is the supported
//! implementation; this module is kept for comparison of the ownership
//! strategies.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

type NodePtr<'brand, T> = Half<GhostCell<'brand, Node<'brand, T>>>;

struct Node<'brand, T> {
    /// `links[e]` leads away from end `e`: slot `FRONT` is the forward
    /// link, slot `BACK` the backward link. The pairing with the list
    /// anchors below is what lets one routine serve both ends.
    links: [Option<NodePtr<'brand, T>>; 2],
    element: T,
}

pub struct List<'brand, T> {
    ends: [Option<NodePtr<'brand, T>>; 2],
    len: usize,
}

impl<'brand, T> Node<'brand, T> {
    fn new(element: T) -> Self {
        Self {
            links: [None, None],
            element,
        }
    }
}

impl<'brand, T> Default for List<'brand, T> {
    fn default() -> Self {
        Self {
            ends: [None, None],
            len: 0,
        }
    }
}

impl<'brand, T> List<'brand, T> {
    const FRONT: usize = 0;
    const BACK: usize = 1;

    /// Insert a node at end `end`. One half of the new node replaces the
    /// anchor; the other goes to the displaced neighbor (or to the
    /// opposite anchor, when the list was empty).
    fn push_end(&mut self, end: usize, element: T, token: &mut GhostToken<'brand>) {
        let other = 1 - end;
        let (inner, outer) = Full::split(Full::new(GhostCell::new(Node::new(element))));
        match self.ends[end].take() {
            Some(old_end) => {
                old_end.deref().borrow_mut(token).links[other] = Some(inner);
                outer.deref().borrow_mut(token).links[end] = Some(old_end);
            }
            None => self.ends[other] = Some(inner),
        }
        self.ends[end] = Some(outer);
        self.len += 1;
    }

    /// Remove the node at end `end`, rejoining its two halves to recover
    /// the element.
    fn pop_end(&mut self, end: usize, token: &mut GhostToken<'brand>) -> Option<T> {
        let other = 1 - end;
        let outer = self.ends[end].take()?;
        let inner = match outer.deref().borrow_mut(token).links[end].take() {
            Some(neighbor) => {
                let inner = neighbor.deref().borrow_mut(token).links[other]
                    .take()
                    .expect("adjacent nodes hold each other's halves");
                self.ends[end] = Some(neighbor);
                inner
            }
            None => self.ends[other]
                .take()
                .expect("a sole node is held by both anchors"),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(inner, outer)).into_inner().element)
    }
}

impl<'brand, T> List<'brand, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.ends[Self::FRONT].is_none()
    }

    pub fn push_front(&mut self, element: T, token: &mut GhostToken<'brand>) {
        self.push_end(Self::FRONT, element, token);
    }

    pub fn push_back(&mut self, element: T, token: &mut GhostToken<'brand>) {
        self.push_end(Self::BACK, element, token);
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'brand>) -> Option<T> {
        self.pop_end(Self::FRONT, token)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'brand>) -> Option<T> {
        self.pop_end(Self::BACK, token)
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::List;
    use ghost_cell::GhostToken;

    #[test]
    fn safe_list_push_and_pop() {
        GhostToken::new(|mut token| {
            let mut list = List::new();
            assert!(list.is_empty());
            assert_eq!(list.len(), 0);

            list.push_back(1, &mut token);
            list.push_back(2, &mut token);
            list.push_front(0, &mut token);
            assert!(!list.is_empty());
            assert_eq!(list.len(), 3);

            assert_eq!(list.pop_front(&mut token), Some(0));
            assert_eq!(list.pop_back(&mut token), Some(2));
            assert_eq!(list.pop_front(&mut token), Some(1));
            assert_eq!(list.pop_front(&mut token), None);
            assert!(list.is_empty());
            assert_eq!(list.len(), 0);
        })
    }

    #[test]
    fn safe_list_keeps_forward_order() {
        GhostToken::new(|mut token| {
            let mut list = List::new();
            for value in 0..5 {
                list.push_back(value, &mut token);
            }
            let mut drained = Vec::new();
            while let Some(value) = list.pop_front(&mut token) {
                drained.push(value);
            }
            assert_eq!(drained, vec![0, 1, 2, 3, 4]);
        })
    }
}
