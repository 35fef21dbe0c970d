//! ASCII rendering of the top of a tree.
//!
//! [`BinarySearchTree::pretty`] returns a [`Pretty`] adapter whose `Display`
//! implementation draws at most [`MAX_LEVELS`] levels, one row of keys per
//! level with a row of `/` and `\` connectors between them.
//!
//! # Examples
//!
//! ```rust
//! use arbor::tree::BinarySearchTree;
//!
//! let tree: BinarySearchTree<i32, ()> = [2, 1, 3].into_iter().map(|key| (key, ())).collect();
//! assert_eq!(tree.pretty().to_string(), "    2\n   / \\\n  1   3");
//! ```

use std::fmt;

use crate::topology;
use crate::tree::{BinarySearchTree, NodeRef};

/// Deepest level drawn; nodes below it are left out.
pub const MAX_LEVELS: usize = 5;

/// A `Display` adapter drawing a [`BinarySearchTree`] as ASCII art.
///
/// Each level is laid out on a grid of equal cells whose width is the widest
/// rendered key plus one. A node is centred over the span of its two child
/// slots, so sibling subtrees never overlap.
pub struct Pretty<'a, K, V> {
    tree: &'a BinarySearchTree<K, V>,
}

impl<K, V> BinarySearchTree<K, V> {
    /// Returns an adapter that renders the top of the tree as ASCII art.
    ///
    /// An empty tree renders as `(empty)`.
    #[must_use]
    pub const fn pretty(&self) -> Pretty<'_, K, V> {
        Pretty { tree: self }
    }
}

impl<K, V> Clone for Pretty<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Pretty<'_, K, V> {}

impl<K, V> fmt::Debug for Pretty<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pretty")
            .field("len", &self.tree.len())
            .finish()
    }
}

/// Writes `text` into `row` starting at column `start`, growing the row as
/// needed.
fn place(row: &mut Vec<char>, start: usize, text: &str) {
    for (offset, glyph) in text.chars().enumerate() {
        let column = start + offset;
        if row.len() <= column {
            row.resize(column + 1, ' ');
        }
        row[column] = glyph;
    }
}

fn finish(row: &[char]) -> String {
    row.iter().collect::<String>().trim_end().to_owned()
}

impl<K: fmt::Display, V> fmt::Display for Pretty<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.tree.root() else {
            return formatter.write_str("(empty)");
        };
        let levels = topology::height(Some(root)).min(MAX_LEVELS);

        // Level `d` holds 2^d slots, empty where the subtree is missing.
        let mut rows: Vec<Vec<Option<(NodeRef<'_, K, V>, String)>>> = Vec::with_capacity(levels);
        rows.push(vec![Some((root, root.key().to_string()))]);
        for depth in 1..levels {
            let next = rows[depth - 1]
                .iter()
                .flat_map(|slot| {
                    let node = slot.as_ref().map(|(node, _)| *node);
                    [
                        node.and_then(|node| node.left()),
                        node.and_then(|node| node.right()),
                    ]
                })
                .map(|child| child.map(|child| (child, child.key().to_string())))
                .collect();
            rows.push(next);
        }

        let width = rows
            .iter()
            .flatten()
            .flatten()
            .map(|(_, label)| label.chars().count())
            .max()
            .unwrap_or(1);
        let span = |depth: usize| (width + 1) << (levels - depth);
        let center = |depth: usize, slot: usize| slot * span(depth) + span(depth) / 2;

        let mut lines = Vec::with_capacity(levels * 2);
        for (depth, row) in rows.iter().enumerate() {
            if depth > 0 {
                let mut connectors = Vec::new();
                for (slot, cell) in row.iter().enumerate() {
                    if cell.is_none() {
                        continue;
                    }
                    let parent = center(depth - 1, slot / 2);
                    let glyph = if slot % 2 == 0 { "/" } else { "\\" };
                    place(&mut connectors, (parent + center(depth, slot)) / 2, glyph);
                }
                lines.push(finish(&connectors));
            }

            let mut labels = Vec::new();
            for (slot, cell) in row.iter().enumerate() {
                if let Some((_, label)) = cell {
                    let start = center(depth, slot).saturating_sub(label.chars().count() / 2);
                    place(&mut labels, start, label);
                }
            }
            lines.push(finish(&labels));
        }

        formatter.write_str(&lines.join("\n"))
    }
}
