//! Error types for tree lookups.

use thiserror::Error;

/// Returned when a value is requested for a key the tree does not contain.
///
/// Only value lookups fail this way. Removing or finding a missing key is not
/// an error: [`remove`](super::BinarySearchTree::remove) returns `None` and
/// [`find`](super::BinarySearchTree::find) returns the end cursor.
///
/// # Examples
///
/// ```rust
/// use arbor::tree::{BinarySearchTree, KeyNotFoundError};
///
/// let tree: BinarySearchTree<i32, i32> = BinarySearchTree::new();
/// assert_eq!(tree.lookup(&1), Err(KeyNotFoundError));
/// assert_eq!(KeyNotFoundError.to_string(), "key not found in tree");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("key not found in tree")]
pub struct KeyNotFoundError;
