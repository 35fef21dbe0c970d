//! Structural queries shared by every binary tree shape in the crate.
//!
//! This module provides the [`TreeNode`] capability trait and a stack-safe
//! post-order fold. Height, height balance and leaf-depth equality are all
//! written once against the trait, so they run the same way over a
//! [`BinarySearchTree`](crate::tree::BinarySearchTree) (through
//! [`NodeRef`](crate::tree::NodeRef)) and over a plain owned
//! [`BinaryNode`](crate::paths::BinaryNode).
//!
//! # Stack Safety
//!
//! An unbalanced tree can be as deep as it is large. [`fold_post_order`]
//! keeps its pending work on a heap-allocated stack instead of the call stack,
//! so a right-leaning chain of a million nodes is as safe to measure as a
//! perfect tree.
//!
//! # Examples
//!
//! ```rust
//! use arbor::topology::{height, is_balanced};
//! use arbor::tree::BinarySearchTree;
//!
//! let chain: BinarySearchTree<i32, ()> = (1..=5).map(|key| (key, ())).collect();
//! assert_eq!(height(chain.root()), 5);
//! assert!(!is_balanced(chain.root()));
//! ```

/// A handle to a node of some binary tree.
///
/// Implementors are cheap `Copy` handles (references or ids paired with their
/// tree) that can name their children. This is the extension point for other
/// node kinds; the structural checks below only need the two child links.
pub trait TreeNode: Copy {
    /// Returns the left child.
    fn left(self) -> Option<Self>;

    /// Returns the right child.
    fn right(self) -> Option<Self>;

    /// Returns `true` if the node has no children.
    fn is_leaf(self) -> bool {
        self.left().is_none() && self.right().is_none()
    }
}

enum Frame<N> {
    Enter(Option<N>),
    Exit(N),
}

/// Folds a tree bottom-up: children are combined before their parent.
///
/// `empty` produces the result for a missing subtree and `combine` receives a
/// node together with the results of its left and right subtrees.
///
/// # Examples
///
/// ```rust
/// use arbor::topology::fold_post_order;
/// use arbor::tree::BinarySearchTree;
///
/// let tree: BinarySearchTree<i32, ()> =
///     [(2, ()), (1, ()), (3, ())].into_iter().collect();
///
/// let count = fold_post_order(tree.root(), || 0, |_, left, right| left + right + 1);
/// assert_eq!(count, 3);
/// ```
pub fn fold_post_order<N, A, E, F>(root: Option<N>, mut empty: E, mut combine: F) -> A
where
    N: TreeNode,
    E: FnMut() -> A,
    F: FnMut(N, A, A) -> A,
{
    let mut stack = vec![Frame::Enter(root)];
    let mut results: Vec<A> = Vec::new();

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(None) => results.push(empty()),
            Frame::Enter(Some(node)) => {
                stack.push(Frame::Exit(node));
                stack.push(Frame::Enter(node.right()));
                stack.push(Frame::Enter(node.left()));
            }
            Frame::Exit(node) => {
                // Left was entered first, so its result sits below the right one.
                let right = results.pop().unwrap_or_else(&mut empty);
                let left = results.pop().unwrap_or_else(&mut empty);
                results.push(combine(node, left, right));
            }
        }
    }

    results.pop().unwrap_or_else(empty)
}

/// Returns the number of nodes on the longest root-to-leaf path.
///
/// An empty tree has height 0 and a single node has height 1.
pub fn height<N: TreeNode>(root: Option<N>) -> usize {
    fold_post_order(root, || 0, |_, left, right| left.max(right) + 1)
}

/// Returns the height of a height-balanced tree, or `None` if some node's
/// subtrees differ in height by two or more.
pub fn balanced_height<N: TreeNode>(root: Option<N>) -> Option<usize> {
    fold_post_order(
        root,
        || Some(0_usize),
        |_, left, right| match (left, right) {
            (Some(left), Some(right)) if left.abs_diff(right) < 2 => Some(left.max(right) + 1),
            _ => None,
        },
    )
}

/// Returns `true` if every node's subtrees differ in height by at most one.
pub fn is_balanced<N: TreeNode>(root: Option<N>) -> bool {
    balanced_height(root).is_some()
}

/// Returns `true` if every leaf lies at the same depth.
///
/// A node with a single child defers to that child. A node with two children
/// needs both subtrees to pass on their own and to have equal heights.
pub fn equal_leaf_depths<N: TreeNode>(root: Option<N>) -> bool {
    let (_, equal) = fold_post_order(
        root,
        || (0_usize, true),
        |_, (left_height, left_equal), (right_height, right_equal)| {
            let height = left_height.max(right_height) + 1;
            let equal = match (left_height, right_height) {
                (0, 0) => true,
                (_, 0) => left_equal,
                (0, _) => right_equal,
                _ => left_equal && right_equal && left_height == right_height,
            };
            (height, equal)
        },
    );
    equal
}
