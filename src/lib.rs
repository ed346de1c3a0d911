//! This crate provides a position-indexed doubly-linked list with owned
//! nodes.
//!
//! The [`List`] keeps its elements in a chain of heap-allocated nodes and
//! addresses them by 0-indexed *position*: position 0 is always the head,
//! position `len - 1` is always the tail. Both ends are reachable in
//! *O*(1); an interior position is resolved by walking from the nearer
//! end, so a positional operation follows at most *n*/2 links.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use positional_list::List;
//!
//! let mut list = List::new();
//!
//! list.insert(0, "a"); // [a]
//! list.insert(0, "b"); // [b, a]
//! list.insert(9, "c"); // [b, a, c] -- past-the-end inserts append
//! list.insert(1, "d"); // [b, d, a, c]
//!
//! assert_eq!(list.len(), 4);
//! assert_eq!(list.get(1), Ok(&"d"));
//!
//! assert_eq!(list.remove(0), Ok("b")); // [d, a, c]
//! assert!(list.remove(5).is_err()); // removal is strict about bounds
//! assert_eq!(list.len(), 3);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!           ╔═══════════╗     ╔═══════════╗           ╔═══════════╗
//!   head ─→ ║   next    ║ ──→ ║   next    ║ ─→ ┄┄ ──→ ║ next (∅)  ║
//!           ╟───────────╢     ╟───────────╢           ╟───────────╢
//!      ∅ ←─ ║   prev    ║ ←── ║   prev    ║ ←─ ┄┄ ←── ║   prev    ║ ←─ tail
//!           ╟───────────╢     ╟───────────╢           ╟───────────╢
//!           ║ element T ║     ║ element T ║           ║ element T ║
//!           ╚═══════════╝     ╚═══════════╝           ╚═══════════╝
//!              Node 0            Node 1                Node n - 1
//! ```
//! The `List` contains:
//! - the `head` and `tail` anchors, which are absent exactly when the
//!   list is empty;
//! - a length field `len`, always equal to the number of chained nodes.
//!
//! Each node is allocated on the heap and owned by the list. The `prev`
//! link of the head and the `next` link of the tail are absent; every
//! other link connects two adjacent nodes in both directions.
//!
//! # Positions and Errors
//!
//! - [`insert`] never fails: a position at or past the end means "append
//!   at the tail".
//! - [`remove`], [`get`] and [`get_mut`] are strict: a position outside
//!   `0..len` (in particular, any position on an empty list) yields an
//!   [`InvalidPosition`] error, and the list is left untouched.
//!
//! # Diagnostics
//!
//! [`render`] produces a multi-line description of the chain, one entry
//! per node in forward order, for inspection during debugging. The node
//! addresses shown there are implementation details, not part of any
//! contract.
//!
//! [`List`]: crate::List
//! [`InvalidPosition`]: crate::InvalidPosition
//! [`insert`]: crate::List::insert
//! [`remove`]: crate::List::remove
//! [`get`]: crate::List::get
//! [`get_mut`]: crate::List::get_mut
//! [`render`]: crate::List::render

#[doc(inline)]
pub use error::InvalidPosition;
#[doc(inline)]
pub use list::List;

pub mod error;
pub mod list;

mod experiments;
