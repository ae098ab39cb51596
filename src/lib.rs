//! An ordered set of unique keys backed by a height-balanced (AVL) binary
//! search tree.
//!
//! [`AvlSet`] keeps its keys in binary-search-tree order and rebalances
//! itself after every mutation, so lookups, insertions and removals all
//! complete in O(log n) comparisons regardless of the order keys arrive in.
//!
//! ```
//! use avlset::AvlSet;
//!
//! let mut set = AvlSet::default();
//!
//! assert!(set.insert(42));
//! assert!(set.insert(24));
//!
//! // Duplicate keys are rejected.
//! assert!(!set.insert(42));
//!
//! assert!(set.contains(&24));
//! assert_eq!(set.remove(&24), Some(24));
//!
//! // Keys are iterated in ascending order.
//! let keys = set.iter().copied().collect::<Vec<_>>();
//! assert_eq!(keys, [42]);
//! ```

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::todo
)]

mod display;
mod iter;
mod node;
mod tree;

pub use iter::OwnedIter;
pub use tree::*;
