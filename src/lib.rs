//! # arbor
//!
//! An unbalanced binary search tree map with parent-linked cursors and
//! structural checks.
//!
//! ## Overview
//!
//! - **Tree**: [`BinarySearchTree`](tree::BinarySearchTree), an ordered map
//!   whose nodes live in an arena and link to their parent as well as their
//!   children. Insertion never rebalances.
//! - **Cursors**: [`Cursor`](tree::Cursor) walks the tree in order using only
//!   node links, no auxiliary stack.
//! - **Topology**: the [`TreeNode`](topology::TreeNode) capability trait and the
//!   stack-safe post-order fold behind height, balance and leaf-depth checks.
//! - **Paths**: a plain owned binary tree and the `equal_paths` check.
//! - **Pretty**: an ASCII renderer for the top levels of a tree.
//!
//! ## Feature Flags
//!
//! - `paths`: The [`paths`] module (enabled by default)
//! - `pretty`: The [`pretty`] module (enabled by default)
//! - `serde`: `Serialize`/`Deserialize` for [`BinarySearchTree`](tree::BinarySearchTree)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use arbor::prelude::*;
//!
//! let mut tree = BinarySearchTree::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key, key * 10);
//! }
//!
//! tree.remove(&5);
//! let keys: Vec<i32> = tree.keys().copied().collect();
//! assert_eq!(keys, vec![1, 3, 4, 7, 8, 9]);
//! assert_eq!(tree.lookup(&4), Ok(&40));
//! assert!(tree.find(&5).is_end());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use arbor::prelude::*;
/// ```
pub mod prelude {

    pub use crate::tree::*;

    pub use crate::topology::TreeNode;

    #[cfg(feature = "paths")]
    pub use crate::paths::{BinaryNode, equal_paths};

    #[cfg(feature = "pretty")]
    pub use crate::pretty::Pretty;
}

pub mod topology;

pub mod tree;

#[cfg(feature = "paths")]
pub mod paths;

#[cfg(feature = "pretty")]
pub mod pretty;
