//! Link-level navigation and relinking.
//!
//! Everything here works on [`NodeId`] handles only and never looks at keys.
//! The routines that mutate links leave the tree with every parent/child pair
//! pointing at each other again before they return.

use smallvec::SmallVec;
use tracing::trace;

use super::map::BinarySearchTree;
use super::node::{NodeId, Side};

impl<K, V> BinarySearchTree<K, V> {
    // =========================================================================
    // Navigation
    // =========================================================================

    /// Descends left from `id` as far as possible.
    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left() {
            id = left;
        }
        id
    }

    /// Descends right from `id` as far as possible.
    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.node(id).right() {
            id = right;
        }
        id
    }

    /// Returns the node holding the largest key smaller than `id`'s key.
    ///
    /// With a left child this is the right-most node of the left subtree.
    /// Without one, it is the first ancestor reached from its right side.
    pub(crate) fn predecessor_of(&self, id: NodeId) -> Option<NodeId> {
        if let Some(left) = self.node(id).left() {
            return Some(self.rightmost(left));
        }
        let mut current = id;
        while let Some(parent) = self.node(current).parent() {
            if self.node(parent).right() == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// Returns the node holding the smallest key larger than `id`'s key.
    pub(crate) fn successor_of(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.node(id).right() {
            return Some(self.leftmost(right));
        }
        let mut current = id;
        while let Some(parent) = self.node(current).parent() {
            if self.node(parent).left() == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// Returns which slot of its parent `id` occupies, or `None` for the root.
    pub(crate) fn side_of(&self, id: NodeId) -> Option<Side> {
        let parent = self.node(id).parent()?;
        if self.node(parent).child(Side::Left) == Some(id) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    // =========================================================================
    // Relinking
    // =========================================================================

    /// Points whatever referenced `old` from above (its parent's child slot or
    /// the root) at `new` instead. Does not touch `new`'s own parent link.
    fn replace_in_parent(&mut self, old: NodeId, new: Option<NodeId>) {
        match (self.node(old).parent(), self.side_of(old)) {
            (Some(parent), Some(side)) => self.node_mut(parent).set_child(side, new),
            _ => self.root = new,
        }
    }

    /// Exchanges the tree positions of two nodes.
    ///
    /// Afterwards `first` has the parent and children `second` used to have
    /// and vice versa; every neighbour and the root are relinked to match.
    /// Keys, values and handles stay with their nodes. Requests naming the
    /// same node twice, or a node that is not in the tree, are ignored.
    ///
    /// The swap is the permutation exchanging the two ids, applied to the two
    /// nodes' own links and to the links of each distinct neighbour exactly
    /// once. When the nodes are adjacent each one appears in the other's links
    /// and the permutation turns "my child" into "my parent" directly.
    pub(crate) fn node_swap(&mut self, first: NodeId, second: NodeId) {
        if first == second || !self.contains_id(first) || !self.contains_id(second) {
            return;
        }

        let exchange = |id: NodeId| {
            if id == first {
                second
            } else if id == second {
                first
            } else {
                id
            }
        };

        let first_links = self.node(first).links();
        let second_links = self.node(second).links();
        let adjacent = first_links.contains(second);

        let mut neighbours: SmallVec<[NodeId; 6]> = first_links
            .iter()
            .chain(second_links.iter())
            .filter(|id| *id != first && *id != second)
            .collect();
        neighbours.sort_unstable();
        neighbours.dedup();

        for neighbour in neighbours {
            let node = self.node_mut(neighbour);
            let relinked = node.links().map(exchange);
            node.set_links(relinked);
        }

        self.node_mut(first).set_links(second_links.map(exchange));
        self.node_mut(second).set_links(first_links.map(exchange));
        self.root = self.root.map(exchange);

        trace!(?first, ?second, adjacent, "swapped node positions");
    }

    /// Removes `id` from the structure, promoting its only child (if any)
    /// into its slot. `id` must have at most one child.
    ///
    /// The node stays in the arena with cleared links.
    pub(crate) fn splice_out(&mut self, id: NodeId) {
        let links = self.node(id).links();
        debug_assert!(
            links.left.is_none() || links.right.is_none(),
            "splice_out needs a node with at most one child"
        );
        let child = links.left.or(links.right);

        self.replace_in_parent(id, child);
        if let Some(child) = child {
            self.node_mut(child).set_parent(links.parent);
        }
        self.node_mut(id).set_links(super::node::Links::default());
    }

    /// Checks that every parent/child pair points at each other and that
    /// every stored node hangs off the root. Keys are not compared.
    #[cfg(test)]
    pub(crate) fn check_parent_links(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            return if self.nodes.is_empty() {
                Ok(())
            } else {
                Err(format!("{} nodes without a root", self.nodes.len()))
            };
        };
        if let Some(parent) = self.node(root).parent() {
            return Err(format!("root {root:?} has parent {parent:?}"));
        }

        let mut reachable = 0;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            reachable += 1;
            let node = self.node(id);
            for child in [node.left(), node.right()].into_iter().flatten() {
                if self.node(child).parent() != Some(id) {
                    return Err(format!("{child:?} does not point back to {id:?}"));
                }
                stack.push(child);
            }
        }

        if reachable == self.nodes.len() {
            Ok(())
        } else {
            Err(format!("{reachable} reachable nodes but {} stored", self.nodes.len()))
        }
    }
}
