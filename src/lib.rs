//! A height-balanced binary search tree (AVL tree).
//!
//! [`Tree`] stores unique, totally ordered keys. Every insertion and removal
//! restores the AVL condition with local rotations: at every node the heights
//! of the left and right subtree differ by at most one, which bounds the
//! tree height by about `1.44 * log2(n)`.
//!
//! ```
//! use avl_tree::Tree;
//! let mut tree = Tree::new();
//! for key in [50, 30, 70, 20, 40, 60, 80] {
//!     tree.add(key).unwrap();
//! }
//! tree.remove(&30);
//! assert_eq!(tree.in_order(), [20, 40, 50, 60, 70, 80]);
//! assert_eq!(tree.pre_order(), [50, 40, 20, 70, 60, 80]);
//! assert_eq!(tree.post_order(), [20, 40, 60, 80, 70, 50]);
//! assert!(tree.is_balanced());
//! ```
//!
//! The tree does no locking of its own; wrap it in a `Mutex` or `RwLock`
//! to share it between threads.
//!
//! With the `consistency_check` feature enabled, every `add` and `remove`
//! verifies the ordering, balance and cached heights of the whole tree
//! and panics on the first violation.

mod error;
mod node;
mod tree;
mod visualize;

pub use error::DuplicateKeyError;
pub use node::Node;
pub use tree::Tree;
