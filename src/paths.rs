//! Leaf-depth checks over plain binary trees.
//!
//! This module provides [`BinaryNode`], an owned binary tree with no ordering
//! requirement, and [`equal_paths`], which decides whether every leaf sits at
//! the same depth.
//!
//! # Examples
//!
//! ```rust
//! use arbor::paths::{BinaryNode, equal_paths};
//!
//! //     1
//! //    / \
//! //   2   3
//! //  /
//! // 4
//! let uneven = BinaryNode::branch(
//!     1,
//!     Some(BinaryNode::branch(2, Some(BinaryNode::leaf(4)), None)),
//!     Some(BinaryNode::leaf(3)),
//! );
//! assert!(!equal_paths(Some(&uneven)));
//!
//! let even = BinaryNode::branch(1, Some(BinaryNode::leaf(2)), Some(BinaryNode::leaf(3)));
//! assert!(equal_paths(Some(&even)));
//! ```

use crate::topology::{self, TreeNode};

/// A node of a plain owned binary tree.
///
/// Children are boxed and owned by their parent. Dropping a tree releases its
/// nodes iteratively, so arbitrarily deep chains drop safely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryNode<T> {
    /// The payload of this node.
    pub value: T,
    /// The left subtree.
    pub left: Option<Box<BinaryNode<T>>>,
    /// The right subtree.
    pub right: Option<Box<BinaryNode<T>>>,
}

impl<T> BinaryNode<T> {
    /// Creates a node without children.
    #[must_use]
    pub const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Creates a node with the given subtrees.
    #[must_use]
    pub fn branch(value: T, left: Option<Self>, right: Option<Self>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Replaces the left subtree.
    #[must_use]
    pub fn with_left(mut self, left: Self) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Replaces the right subtree.
    #[must_use]
    pub fn with_right(mut self, right: Self) -> Self {
        self.right = Some(Box::new(right));
        self
    }
}

impl BinaryNode<usize> {
    /// Builds a complete tree of the given depth, labelling nodes in
    /// breadth-first order starting from `first`.
    ///
    /// Depth 0 yields `None`; depth 1 yields a single leaf.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::paths::{BinaryNode, height};
    ///
    /// let tree = BinaryNode::perfect(3, 1).unwrap();
    /// assert_eq!(tree.value, 1);
    /// assert_eq!(height(Some(&tree)), 3);
    /// ```
    #[must_use]
    pub fn perfect(depth: u32, first: usize) -> Option<Self> {
        fn build(depth: u32, index: usize, first: usize) -> Option<BinaryNode<usize>> {
            (depth > 0).then(|| {
                BinaryNode::branch(
                    first + index,
                    build(depth - 1, 2 * index + 1, first),
                    build(depth - 1, 2 * index + 2, first),
                )
            })
        }
        build(depth, 0, first)
    }
}

impl<T> TreeNode for &BinaryNode<T> {
    fn left(self) -> Option<Self> {
        self.left.as_deref()
    }

    fn right(self) -> Option<Self> {
        self.right.as_deref()
    }
}

impl<T> Drop for BinaryNode<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Self>> =
            self.left.take().into_iter().chain(self.right.take()).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Returns `true` if every leaf lies at the same depth.
///
/// An empty tree and a lone node pass. A node with one child defers to that
/// child; a node with two children passes when both subtrees pass and have
/// the same height.
///
/// # Examples
///
/// ```rust
/// use arbor::paths::{BinaryNode, equal_paths};
///
/// assert!(equal_paths::<i32>(None));
/// assert!(equal_paths(Some(&BinaryNode::leaf(7))));
/// ```
#[must_use]
pub fn equal_paths<T>(root: Option<&BinaryNode<T>>) -> bool {
    topology::equal_leaf_depths(root)
}

/// Returns the number of nodes on the longest root-to-leaf path.
#[must_use]
pub fn height<T>(root: Option<&BinaryNode<T>>) -> usize {
    topology::height(root)
}
