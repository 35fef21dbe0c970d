//! In-order cursors and iterators.
//!
//! A [`Cursor`] is a position in a tree: either a node or the end. It moves by
//! following parent and child links, so stepping needs no auxiliary stack and
//! a cursor is just a borrowed tree plus an optional [`NodeId`].
//!
//! The std iterators ([`Iter`], [`Keys`], [`Values`]) are built from the same
//! stepping rules and walk from both ends.

use std::fmt;
use std::iter::FusedIterator;

use super::map::BinarySearchTree;
use super::node::{NodeId, NodeRef};

// =============================================================================
// Cursor
// =============================================================================

/// A position in a [`BinarySearchTree`]: a node, or the end.
///
/// The end cursor points at no node. Reading through it yields `None`, and
/// moving it in either direction leaves it at the end.
///
/// # Examples
///
/// ```rust
/// use arbor::tree::BinarySearchTree;
///
/// let tree: BinarySearchTree<i32, char> =
///     [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
///
/// let mut cursor = tree.begin();
/// let mut seen = Vec::new();
/// while let Some((key, value)) = cursor.entry() {
///     seen.push((*key, *value));
///     cursor.move_next();
/// }
/// assert_eq!(seen, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
/// assert_eq!(cursor, tree.end());
/// assert_eq!(cursor.key(), None);
/// ```
pub struct Cursor<'a, K, V> {
    tree: &'a BinarySearchTree<K, V>,
    current: Option<NodeId>,
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) const fn new(tree: &'a BinarySearchTree<K, V>, current: Option<NodeId>) -> Self {
        Self { tree, current }
    }

    /// Returns `true` if the cursor points at no node.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns the handle of the current node.
    #[must_use]
    pub const fn id(&self) -> Option<NodeId> {
        self.current
    }

    /// Returns the current node.
    #[must_use]
    pub fn node(&self) -> Option<NodeRef<'a, K, V>> {
        self.current.map(|id| NodeRef::new(self.tree, id))
    }

    /// Returns the current key.
    #[must_use]
    pub fn key(&self) -> Option<&'a K> {
        self.node().map(|node| node.key())
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> Option<&'a V> {
        self.node().map(|node| node.value())
    }

    /// Returns the current key and value.
    #[must_use]
    pub fn entry(&self) -> Option<(&'a K, &'a V)> {
        self.node().map(|node| node.entry())
    }

    /// Moves to the next larger key.
    ///
    /// With a right child, the next node is the left-most node of the right
    /// subtree. Otherwise it is the first ancestor reached from its left
    /// side; running out of ancestors moves the cursor to the end.
    pub fn move_next(&mut self) {
        if let Some(current) = self.current {
            self.current = self.tree.successor_of(current);
        }
    }

    /// Moves to the next smaller key, or to the end past the smallest key.
    pub fn move_prev(&mut self) {
        if let Some(current) = self.current {
            self.current = self.tree.predecessor_of(current);
        }
    }
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Cursor<'_, K, V> {}

impl<K, V> PartialEq for Cursor<'_, K, V> {
    /// Cursors are equal when they point into the same tree at the same node.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.current == other.current
    }
}

impl<K, V> Eq for Cursor<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Cursor<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entry() {
            Some((key, value)) => formatter
                .debug_tuple("Cursor")
                .field(key)
                .field(value)
                .finish(),
            None => formatter.write_str("Cursor(end)"),
        }
    }
}

// =============================================================================
// Borrowing Iterators
// =============================================================================

/// An iterator over the entries of a [`BinarySearchTree`] in key order.
pub struct Iter<'a, K, V> {
    tree: &'a BinarySearchTree<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) const fn new(
        tree: &'a BinarySearchTree<K, V>,
        front: Option<NodeId>,
        back: Option<NodeId>,
        remaining: usize,
    ) -> Self {
        Self {
            tree,
            front,
            back,
            remaining,
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self::new(self.tree, self.front, self.back, self.remaining)
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front?;
        self.front = self.tree.successor_of(current);
        self.remaining -= 1;
        Some(self.tree.node(current).entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.back?;
        self.back = self.tree.predecessor_of(current);
        self.remaining -= 1;
        Some(self.tree.node(current).entry())
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a [`BinarySearchTree`] in order.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) const fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`BinarySearchTree`] in key order.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) const fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

// =============================================================================
// Mutable and Owning Iterators
// =============================================================================

/// An iterator over the entries of a [`BinarySearchTree`] in key order, with
/// mutable values.
pub struct IterMut<'a, K, V> {
    entries: std::vec::IntoIter<(&'a K, &'a mut V)>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(entries: Vec<(&'a K, &'a mut V)>) -> Self {
        Self {
            entries: entries.into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An iterator over mutable values of a [`BinarySearchTree`] in key order.
pub struct ValuesMut<'a, K, V> {
    inner: IterMut<'a, K, V>,
}

impl<'a, K, V> ValuesMut<'a, K, V> {
    pub(crate) const fn new(inner: IterMut<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for ValuesMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}

impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

/// An owning iterator over the entries of a [`BinarySearchTree`] in key order.
pub struct IntoIter<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(entries: Vec<(K, V)>) -> Self {
        Self {
            entries: entries.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
