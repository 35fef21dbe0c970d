//! Arena cells, handles and read-only node views.

use std::fmt;

use super::map::BinarySearchTree;
use crate::topology::TreeNode;

// =============================================================================
// Handles
// =============================================================================

/// A stable handle to a node stored in a [`BinarySearchTree`].
///
/// A handle stays valid until its node is removed. Swapping node positions
/// during removal rewires links around the handle; it never reassigns it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl fmt::Debug for NodeId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

/// The three relationship links of a node.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub(crate) struct Links {
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl Links {
    /// Applies `relabel` to every link.
    pub(crate) fn map(self, mut relabel: impl FnMut(NodeId) -> NodeId) -> Self {
        Self {
            parent: self.parent.map(&mut relabel),
            left: self.left.map(&mut relabel),
            right: self.right.map(&mut relabel),
        }
    }

    pub(crate) fn contains(self, id: NodeId) -> bool {
        self.parent == Some(id) || self.left == Some(id) || self.right == Some(id)
    }

    pub(crate) fn iter(self) -> impl Iterator<Item = NodeId> {
        [self.parent, self.left, self.right].into_iter().flatten()
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// Internal arena cell.
///
/// Setting a link only stores it; the tree keeps the other side consistent.
#[derive(Clone, Debug)]
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    links: Links,
}

impl<K, V> Node<K, V> {
    /// Creates a leaf hanging off `parent`.
    pub(crate) const fn new(key: K, value: V, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            links: Links {
                parent,
                left: None,
                right: None,
            },
        }
    }

    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    pub(crate) const fn value(&self) -> &V {
        &self.value
    }

    pub(crate) const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Overwrites the value in place, returning the previous one.
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    pub(crate) const fn entry(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    pub(crate) const fn entry_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }

    pub(crate) const fn links(&self) -> Links {
        self.links
    }

    pub(crate) const fn set_links(&mut self, links: Links) {
        self.links = links;
    }

    pub(crate) const fn parent(&self) -> Option<NodeId> {
        self.links.parent
    }

    pub(crate) const fn left(&self) -> Option<NodeId> {
        self.links.left
    }

    pub(crate) const fn right(&self) -> Option<NodeId> {
        self.links.right
    }

    pub(crate) const fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.links.left,
            Side::Right => self.links.right,
        }
    }

    pub(crate) const fn set_parent(&mut self, parent: Option<NodeId>) {
        self.links.parent = parent;
    }

    pub(crate) const fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.links.left = child,
            Side::Right => self.links.right = child,
        }
    }
}

// =============================================================================
// NodeRef Definition
// =============================================================================

/// A read-only view of one node in a [`BinarySearchTree`].
///
/// `NodeRef` exposes the key, the value and the neighbouring nodes. It
/// implements [`TreeNode`], so the structural checks in
/// [`topology`](crate::topology) run directly on a tree.
///
/// # Examples
///
/// ```rust
/// use arbor::tree::BinarySearchTree;
///
/// let tree: BinarySearchTree<i32, ()> =
///     [(2, ()), (1, ()), (3, ())].into_iter().collect();
///
/// let root = tree.root().unwrap();
/// assert_eq!(root.key(), &2);
/// assert_eq!(root.left().map(|node| *node.key()), Some(1));
/// assert_eq!(root.right().and_then(|node| node.parent()), Some(root));
/// ```
pub struct NodeRef<'a, K, V> {
    tree: &'a BinarySearchTree<K, V>,
    id: NodeId,
}

impl<'a, K, V> NodeRef<'a, K, V> {
    /// `id` must name a live node of `tree`.
    pub(crate) const fn new(tree: &'a BinarySearchTree<K, V>, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn cell(&self) -> &'a Node<K, V> {
        self.tree.node(self.id)
    }

    fn neighbour(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.tree, id))
    }

    /// Returns the handle of this node.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the key of this node.
    #[must_use]
    pub fn key(&self) -> &'a K {
        self.cell().key()
    }

    /// Returns the value of this node.
    #[must_use]
    pub fn value(&self) -> &'a V {
        self.cell().value()
    }

    /// Returns the key and value of this node.
    #[must_use]
    pub fn entry(&self) -> (&'a K, &'a V) {
        self.cell().entry()
    }

    /// Returns the parent, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.neighbour(self.cell().parent())
    }

    /// Returns the left child.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.neighbour(self.cell().left())
    }

    /// Returns the right child.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.neighbour(self.cell().right())
    }

    /// Returns the node holding the next smaller key.
    #[must_use]
    pub fn predecessor(&self) -> Option<Self> {
        self.neighbour(self.tree.predecessor_of(self.id))
    }

    /// Returns the node holding the next larger key.
    #[must_use]
    pub fn successor(&self) -> Option<Self> {
        self.neighbour(self.tree.successor_of(self.id))
    }

    /// Returns `true` if this node has no parent.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.cell().parent().is_none()
    }

    /// Returns `true` if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        let cell = self.cell();
        cell.left().is_none() && cell.right().is_none()
    }
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<K, V> PartialEq for NodeRef<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<K, V> Eq for NodeRef<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NodeRef<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = self.cell();
        formatter
            .debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", cell.key())
            .field("value", cell.value())
            .finish()
    }
}

impl<K, V> TreeNode for NodeRef<'_, K, V> {
    fn left(self) -> Option<Self> {
        Self::left(&self)
    }

    fn right(self) -> Option<Self> {
        Self::right(&self)
    }
}
