//! The binary search tree map.

use slab::Slab;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use tracing::{debug, trace};

use super::cursor::{Cursor, IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
use super::error::KeyNotFoundError;
use super::node::{Node, NodeId, NodeRef, Side};
use crate::topology;

// =============================================================================
// BinarySearchTree Definition
// =============================================================================

/// An ordered map stored as an unbalanced binary search tree.
///
/// Every node links to its parent as well as its children, which lets a
/// [`Cursor`] step through the tree in order without an auxiliary stack.
/// Nodes live in an arena owned by the tree; links are [`NodeId`] handles, so
/// back references never own anything.
///
/// Keys must implement `Ord`. Inserting a key that is already present
/// overwrites its value in place. Insertion order decides the shape: sorted
/// input produces a chain, which [`is_balanced`](Self::is_balanced) reports.
///
/// # Time Complexity
///
/// | Operation        | Complexity |
/// |------------------|------------|
/// | `new`            | O(1)       |
/// | `insert`         | O(h)       |
/// | `remove`         | O(h)       |
/// | `find` / `get`   | O(h)       |
/// | `find_by_scan`   | O(N)       |
/// | `is_balanced`    | O(N)       |
/// | `clear`          | O(N)       |
/// | `len`/`is_empty` | O(1)       |
///
/// where h is the height of the tree (N in the worst case).
///
/// # Examples
///
/// ```rust
/// use arbor::tree::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.insert(3, "three");
/// tree.insert(1, "one");
/// tree.insert(2, "two");
///
/// let keys: Vec<&i32> = tree.keys().collect();
/// assert_eq!(keys, vec![&1, &2, &3]);
///
/// assert_eq!(tree.insert(2, "TWO"), Some("two"));
/// assert_eq!(tree.len(), 3);
/// ```
#[derive(Clone)]
pub struct BinarySearchTree<K, V> {
    /// Arena holding every node of the tree
    pub(super) nodes: Slab<Node<K, V>>,
    /// Root node, `None` when the tree is empty
    pub(super) root: Option<NodeId>,
}

impl<K, V> BinarySearchTree<K, V> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32, String> = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
        }
    }

    /// Creates an empty tree with room for `capacity` nodes.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of entries in the tree.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no root.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1, "one");
    /// assert!(!tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, K, V>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// Returns the node behind `id`, or `None` if it has been removed.
    #[must_use]
    pub fn node_ref(&self, id: NodeId) -> Option<NodeRef<'_, K, V>> {
        self.contains_id(id).then(|| NodeRef::new(self, id))
    }

    pub(crate) fn contains_id(&self, id: NodeId) -> bool {
        self.nodes.contains(id.0)
    }

    /// `id` must name a live node.
    pub(crate) fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.0]
    }

    /// `id` must name a live node.
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.0]
    }

    fn allocate(&mut self, key: K, value: V, parent: Option<NodeId>) -> NodeId {
        NodeId(self.nodes.insert(Node::new(key, value, parent)))
    }

    /// Yields node handles in key order.
    pub(crate) fn in_order_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.root.map(|root| self.leftmost(root)), |id| {
            self.successor_of(*id)
        })
    }

    // =========================================================================
    // Cursors and Iteration
    // =========================================================================

    /// Returns a cursor on the smallest key, or the end cursor for an empty
    /// tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.begin(), tree.end());
    ///
    /// tree.insert(2, ());
    /// tree.insert(1, ());
    /// assert_eq!(tree.begin().key(), Some(&1));
    /// ```
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, K, V> {
        Cursor::new(self, self.root.map(|root| self.leftmost(root)))
    }

    /// Returns the end cursor, which points at no node.
    #[must_use]
    pub const fn end(&self) -> Cursor<'_, K, V> {
        Cursor::new(self, None)
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.begin().entry()
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.root.map(|root| self.node(self.rightmost(root)).entry())
    }

    /// Returns an iterator over the entries in key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32, char> =
    ///     [(2, 'b'), (3, 'c'), (1, 'a')].into_iter().collect();
    ///
    /// let entries: Vec<(&i32, &char)> = tree.iter().collect();
    /// assert_eq!(entries, vec![(&1, &'a'), (&2, &'b'), (&3, &'c')]);
    ///
    /// let reversed: Vec<&i32> = tree.keys().rev().collect();
    /// assert_eq!(reversed, vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(
            self,
            self.root.map(|root| self.leftmost(root)),
            self.root.map(|root| self.rightmost(root)),
            self.len(),
        )
    }

    /// Returns an iterator over the keys in order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Returns an iterator over the values in key order.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Returns an iterator over the entries in key order, with mutable values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::tree::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<i32, i32> =
    ///     [(1, 10), (2, 20)].into_iter().collect();
    ///
    /// for (key, value) in tree.iter_mut() {
    ///     *value += key;
    /// }
    /// assert_eq!(tree.lookup(&2), Ok(&22));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let order: Vec<NodeId> = self.in_order_ids().collect();
        let mut rank = vec![0; order.iter().map(|id| id.0 + 1).max().unwrap_or(0)];
        for (position, id) in order.iter().enumerate() {
            rank[id.0] = position;
        }

        let mut entries: Vec<Option<(&K, &mut V)>> =
            std::iter::repeat_with(|| None).take(order.len()).collect();
        for (slot, node) in &mut self.nodes {
            entries[rank[slot]] = Some(node.entry_mut());
        }

        IterMut::new(entries.into_iter().flatten().collect())
    }

    /// Returns an iterator over mutable values in key order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(self.iter_mut())
    }

    // =========================================================================
    // Structural Queries
    // =========================================================================

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::tree::BinarySearchTree;
    ///
    /// let chain: BinarySearchTree<i32, ()> = (1..=4).map(|key| (key, ())).collect();
    /// assert_eq!(chain.height(), 4);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        topology::height(self.root())
    }

    /// Returns `true` if the heights of every node's two subtrees differ by
    /// at most one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::tree::BinarySearchTree;
    ///
    /// let chain: BinarySearchTree<i32, ()> = (1..=5).map(|key| (key, ())).collect();
    /// assert!(!chain.is_balanced());
    ///
    /// let perfect: BinarySearchTree<i32, ()> =
    ///     [4, 2, 6, 1, 3, 5, 7].into_iter().map(|key| (key, ())).collect();
    /// assert!(perfect.is_balanced());
    /// ```
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        topology::is_balanced(self.root())
    }

    /// Returns `true` if every leaf of the tree lies at the same depth.
    #[must_use]
    pub fn has_equal_leaf_depths(&self) -> bool {
        topology::equal_leaf_depths(self.root())
    }

    // =========================================================================
    // Clearing
    // =========================================================================

    /// Removes every entry.
    ///
    /// Nodes are released children first, then their parent. Clearing an
    /// empty tree does nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::tree::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<i32, ()> = (0..10).map(|key| (key, ())).collect();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.begin(), tree.end());
    /// ```
    pub fn clear(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };

        let mut released = 0_usize;
        let mut stack = vec![(root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                drop(self.nodes.remove(id.0));
                released += 1;
                continue;
            }
            stack.push((id, true));
            let node = self.node(id);
            if let Some(right) = node.right() {
                stack.push((right, false));
            }
            if let Some(left) = node.left() {
                stack.push((left, false));
            }
        }
        self.nodes.clear();

        debug!(released, "cleared tree");
    }
}

impl<K: Ord, V> BinarySearchTree<K, V> {
    // =========================================================================
    // Insertion
    // =========================================================================

    /// Inserts a key-value pair.
    ///
    /// A new key becomes a leaf below the node where the descent ran out of
    /// children. An existing key keeps its node and has its value overwritten;
    /// the previous value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.insert(1, "one"), None);
    /// assert_eq!(tree.insert(1, "ONE"), Some("one"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let Some(mut current) = self.root else {
            let id = self.allocate(key, value, None);
            self.root = Some(id);
            trace!(node = ?id, "inserted root");
            return None;
        };

        loop {
            let (ordering, left, right) = {
                let node = self.node(current);
                (key.cmp(node.key()), node.left(), node.right())
            };
            let (side, child) = match ordering {
                Ordering::Less => (Side::Left, left),
                Ordering::Greater => (Side::Right, right),
                Ordering::Equal => return Some(self.node_mut(current).replace_value(value)),
            };
            match child {
                Some(child) => current = child,
                None => {
                    let id = self.allocate(key, value, Some(current));
                    self.node_mut(current).set_child(side, Some(id));
                    trace!(node = ?id, parent = ?current, ?side, "inserted leaf");
                    return None;
                }
            }
        }
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes a key, returning its value if it was present.
    ///
    /// Removing a missing key does nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::tree::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<i32, ()> =
    ///     [5, 3, 8, 1, 4, 7, 9].into_iter().map(|key| (key, ())).collect();
    ///
    /// assert_eq!(tree.remove(&5), Some(()));
    /// assert_eq!(tree.remove(&5), None);
    ///
    /// let keys: Vec<i32> = tree.keys().copied().collect();
    /// assert_eq!(keys, vec![1, 3, 4, 7, 8, 9]);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key, returning the stored key and value if it was present.
    ///
    /// A node with two children first trades places with its in-order
    /// predecessor, which leaves it with at most one child. The node is then
    /// spliced out: its remaining child, if any, takes over its slot.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let target = self.find_node(key)?;
        let links = self.node(target).links();

        match (links.left, links.right) {
            (Some(_), Some(_)) => {
                if let Some(predecessor) = self.predecessor_of(target) {
                    self.node_swap(predecessor, target);
                }
                trace!(node = ?target, "removing node with two children");
            }
            (Some(_), None) | (None, Some(_)) => {
                trace!(node = ?target, "removing node with one child");
            }
            (None, None) => trace!(node = ?target, "removing leaf"),
        }

        self.splice_out(target);
        Some(self.nodes.remove(target.0).into_entry())
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Descends from the root comparing keys.
    pub(crate) fn find_node<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Returns a cursor on the entry for `key`, or the end cursor if the key
    /// is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::tree::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<i32, &str> = [(1, "one")].into_iter().collect();
    /// assert_eq!(tree.find(&1).value(), Some(&"one"));
    /// assert_eq!(tree.find(&2), tree.end());
    /// ```
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Cursor::new(self, self.find_node(key))
    }

    /// Finds `key` by walking every entry in order from the smallest key.
    ///
    /// Returns the same cursor as [`find`](Self::find) in O(N) instead of
    /// O(h).
    #[must_use]
    pub fn find_by_scan<Q>(&self, key: &Q) -> Cursor<'_, K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.begin();
        while let Some(candidate) = cursor.key() {
            if <K as Borrow<Q>>::borrow(candidate) == key {
                break;
            }
            cursor.move_next();
        }
        cursor
    }

    /// Returns a reference to the value for `key`.
    ///
    /// The key may be any borrowed form of the tree's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::tree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert("hello".to_string(), 42);
    ///
    /// assert_eq!(tree.get("hello"), Some(&42));
    /// assert_eq!(tree.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|id| self.node(id).value())
    }

    /// Returns a mutable reference to the value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.find_node(key)?;
        Some(self.node_mut(id).value_mut())
    }

    /// Returns the stored key and its value.
    #[must_use]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|id| self.node(id).entry())
    }

    /// Returns `true` if the tree contains `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Returns the value for a key that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if the tree has no entry for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arbor::tree::{BinarySearchTree, KeyNotFoundError};
    ///
    /// let tree: BinarySearchTree<i32, &str> = [(7, "seven")].into_iter().collect();
    /// assert_eq!(tree.lookup(&7), Ok(&"seven"));
    /// assert_eq!(tree.lookup(&8), Err(KeyNotFoundError));
    /// ```
    pub fn lookup<Q>(&self, key: &Q) -> Result<&V, KeyNotFoundError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).ok_or(KeyNotFoundError)
    }

    /// Returns a mutable reference to the value for a key that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if the tree has no entry for `key`.
    pub fn lookup_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFoundError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_mut(key).ok_or(KeyNotFoundError)
    }

    /// Checks every link pair, the node count and the ordering invariant.
    #[cfg(test)]
    pub(crate) fn check_links(&self) -> Result<(), String>
    where
        K: fmt::Debug,
    {
        self.check_parent_links()?;

        for (id, node) in &self.nodes {
            for side in [Side::Left, Side::Right] {
                let Some(child) = node.child(side) else { continue };
                let expected = match side {
                    Side::Left => Ordering::Less,
                    Side::Right => Ordering::Greater,
                };
                let child_key = self.node(child).key();
                if child_key.cmp(node.key()) != expected {
                    return Err(format!(
                        "{child_key:?} is on the wrong side of {:?} at {:?}",
                        node.key(),
                        NodeId(id)
                    ));
                }
            }
        }

        let keys: Vec<&K> = self.keys().collect();
        if keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(format!("in-order keys are not increasing: {keys:?}"));
        }
        Ok(())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Drop for BinarySearchTree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Default for BinarySearchTree<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinarySearchTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for BinarySearchTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> IntoIterator for BinarySearchTree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let order: Vec<NodeId> = self.in_order_ids().collect();
        let mut nodes = std::mem::take(&mut self.nodes);
        self.root = None;

        let entries: Vec<(K, V)> = order
            .into_iter()
            .map(|id| nodes.remove(id.0).into_entry())
            .collect();
        IntoIter::new(entries)
    }
}

impl<'a, K, V> IntoIterator for &'a BinarySearchTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut BinarySearchTree<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, Q, V> Index<&Q> for BinarySearchTree<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &Q) -> &V {
        match self.lookup(key) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<K, Q, V> IndexMut<&Q> for BinarySearchTree<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index_mut(&mut self, key: &Q) -> &mut V {
        match self.lookup_mut(key) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for BinarySearchTree<K, V> {
    /// Trees are equal when they hold the same entries, whatever their shape.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for BinarySearchTree<K, V> {}

impl<K: Hash, V: Hash> Hash for BinarySearchTree<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BinarySearchTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for BinarySearchTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(BinarySearchTree<i32, String>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for BinarySearchTree<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct BinarySearchTreeVisitor<K, V> {
    marker: std::marker::PhantomData<fn() -> BinarySearchTree<K, V>>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for BinarySearchTreeVisitor<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    type Value = BinarySearchTree<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut tree = BinarySearchTree::with_capacity(access.size_hint().unwrap_or(0).min(4096));
        while let Some((key, value)) = access.next_entry()? {
            tree.insert(key, value);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for BinarySearchTree<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(BinarySearchTreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
