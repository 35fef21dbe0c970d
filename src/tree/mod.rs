//! Unbalanced binary search tree map.
//!
//! This module provides [`BinarySearchTree`], an ordered map that keeps its
//! nodes in an arena and links every node to its parent as well as to its
//! children:
//!
//! - [`BinarySearchTree`]: The tree itself (insert, remove, find, lookup, clear)
//! - [`Cursor`]: An in-order position that steps through parent links
//! - [`NodeRef`]: A read-only view of one node and its neighbours
//! - [`NodeId`]: A stable handle to a node
//!
//! # Ownership
//!
//! The tree is the sole owner of its nodes. Parent, left and right links are
//! [`NodeId`] handles into the arena, so a back reference never owns anything
//! and a node never moves while it is alive. Removing a node with two children
//! swaps its position with its in-order predecessor by relinking, never by
//! copying keys or values between nodes.
//!
//! # Examples
//!
//! ```rust
//! use arbor::tree::BinarySearchTree;
//!
//! let mut tree: BinarySearchTree<i32, &str> =
//!     [(4, "four"), (2, "two"), (6, "six")].into_iter().collect();
//!
//! assert!(tree.is_balanced());
//!
//! let mut cursor = tree.begin();
//! assert_eq!(cursor.key(), Some(&2));
//! cursor.move_next();
//! assert_eq!(cursor.key(), Some(&4));
//!
//! tree.insert(4, "FOUR");
//! assert_eq!(tree[&4], "FOUR");
//! ```

mod cursor;
mod error;
mod links;
mod map;
mod node;

pub use cursor::Cursor;
pub use cursor::IntoIter;
pub use cursor::Iter;
pub use cursor::IterMut;
pub use cursor::Keys;
pub use cursor::Values;
pub use cursor::ValuesMut;
pub use error::KeyNotFoundError;
pub use map::BinarySearchTree;
pub use node::NodeId;
pub use node::NodeRef;
