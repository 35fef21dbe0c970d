//! Property-based tests for BinarySearchTree.
//!
//! These tests check the ordering and linking invariants against
//! `std::collections::BTreeMap` as a model, using proptest.

use arbor::tree::{BinarySearchTree, NodeRef};
use proptest::prelude::*;
use std::collections::BTreeMap;

// =============================================================================
// Strategies and Helpers
// =============================================================================

fn arbitrary_entries(max_size: usize) -> impl Strategy<Value = Vec<(i16, i32)>> {
    prop::collection::vec((any::<i16>(), any::<i32>()), 0..max_size)
}

/// Checks parent/child agreement and key bounds below `node`.
fn check_subtree(
    node: NodeRef<'_, i16, i32>,
    lower: Option<i16>,
    upper: Option<i16>,
) -> Result<usize, TestCaseError> {
    let key = *node.key();
    prop_assert!(lower.is_none_or(|lower| lower < key), "{key} not above {lower:?}");
    prop_assert!(upper.is_none_or(|upper| key < upper), "{key} not below {upper:?}");

    let mut count = 1;
    if let Some(left) = node.left() {
        prop_assert_eq!(left.parent(), Some(node));
        count += check_subtree(left, lower, Some(key))?;
    }
    if let Some(right) = node.right() {
        prop_assert_eq!(right.parent(), Some(node));
        count += check_subtree(right, Some(key), upper)?;
    }
    Ok(count)
}

fn check_tree(tree: &BinarySearchTree<i16, i32>) -> Result<(), TestCaseError> {
    match tree.root() {
        Some(root) => {
            prop_assert!(root.parent().is_none());
            let count = check_subtree(root, None, None)?;
            prop_assert_eq!(count, tree.len());
        }
        None => prop_assert_eq!(tree.len(), 0),
    }
    Ok(())
}

// =============================================================================
// Insert Laws
// =============================================================================

proptest! {
    /// Law: the tree and a BTreeMap built from the same inserts hold the same
    /// entries in the same order.
    #[test]
    fn prop_insert_matches_model(entries in arbitrary_entries(64)) {
        let mut tree = BinarySearchTree::new();
        let mut model = BTreeMap::new();
        for (key, value) in entries {
            prop_assert_eq!(tree.insert(key, value), model.insert(key, value));
        }

        let actual: Vec<(i16, i32)> = tree.iter().map(|(key, value)| (*key, *value)).collect();
        let expected: Vec<(i16, i32)> = model.into_iter().collect();
        prop_assert_eq!(actual, expected);
        check_tree(&tree)?;
    }

    /// Law: get after insert returns the inserted value.
    #[test]
    fn prop_get_insert_law(entries in arbitrary_entries(32), key: i16, value: i32) {
        let mut tree: BinarySearchTree<i16, i32> = entries.into_iter().collect();
        tree.insert(key, value);
        prop_assert_eq!(tree.get(&key), Some(&value));
        prop_assert_eq!(tree.lookup(&key), Ok(&value));
    }

    /// Law: inserting a present key changes neither size nor shape.
    #[test]
    fn prop_upsert_keeps_shape(entries in arbitrary_entries(32), value: i32) {
        prop_assume!(!entries.is_empty());
        let mut tree: BinarySearchTree<i16, i32> = entries.iter().copied().collect();
        let key = entries[0].0;
        let root_before = tree.root().map(|root| root.id());
        let height_before = tree.height();
        let len_before = tree.len();

        tree.insert(key, value);

        prop_assert_eq!(tree.len(), len_before);
        prop_assert_eq!(tree.height(), height_before);
        prop_assert_eq!(tree.root().map(|root| root.id()), root_before);
    }
}

// =============================================================================
// Remove Laws
// =============================================================================

proptest! {
    /// Law: removing keys keeps the tree equal to the model and its links sound.
    #[test]
    fn prop_remove_matches_model(
        entries in arbitrary_entries(64),
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..32)
    ) {
        let mut tree: BinarySearchTree<i16, i32> = entries.iter().copied().collect();
        let mut model: BTreeMap<i16, i32> = entries.iter().copied().collect();

        for index in removals {
            if entries.is_empty() {
                break;
            }
            let key = entries[index.index(entries.len())].0;
            prop_assert_eq!(tree.remove(&key), model.remove(&key));
            check_tree(&tree)?;
        }

        prop_assert!(tree.iter().map(|(key, value)| (*key, *value)).eq(model.into_iter()));
    }

    /// Law: get after remove returns None and other keys are untouched.
    #[test]
    fn prop_get_remove_law(entries in arbitrary_entries(32), key: i16, other: i16) {
        prop_assume!(key != other);
        let mut tree: BinarySearchTree<i16, i32> = entries.into_iter().collect();
        let other_before = tree.get(&other).copied();

        tree.remove(&key);

        prop_assert_eq!(tree.get(&key), None);
        prop_assert_eq!(tree.get(&other).copied(), other_before);
    }

    /// Law: removing every key, in any order, empties the tree.
    #[test]
    fn prop_remove_all_empties(
        entries in arbitrary_entries(48),
        seed in any::<u64>()
    ) {
        let mut tree: BinarySearchTree<i16, i32> = entries.iter().copied().collect();
        let mut keys: Vec<i16> = tree.keys().copied().collect();
        // Rotate by a seed-derived offset so removal order differs from key order.
        if !keys.is_empty() {
            let offset = usize::try_from(seed % keys.len() as u64).unwrap_or(0);
            keys.rotate_left(offset);
        }
        for key in keys {
            prop_assert!(tree.remove(&key).is_some());
        }
        prop_assert!(tree.is_empty());
        prop_assert!(tree.root().is_none());
    }
}

// =============================================================================
// Lookup and Traversal Laws
// =============================================================================

proptest! {
    /// Law: descent and linear scan find the same node.
    #[test]
    fn prop_find_agrees_with_scan(entries in arbitrary_entries(48), key: i16) {
        let tree: BinarySearchTree<i16, i32> = entries.into_iter().collect();
        prop_assert_eq!(tree.find(&key), tree.find_by_scan(&key));
    }

    /// Law: forward and reverse iteration visit the same entries.
    #[test]
    fn prop_reverse_iteration(entries in arbitrary_entries(48)) {
        let tree: BinarySearchTree<i16, i32> = entries.into_iter().collect();
        let mut forward: Vec<i16> = tree.keys().copied().collect();
        let backward: Vec<i16> = tree.keys().rev().copied().collect();
        forward.reverse();
        prop_assert_eq!(forward, backward);
    }

    /// Law: the cursor walk from begin reaches end after exactly len steps.
    #[test]
    fn prop_cursor_walk_length(entries in arbitrary_entries(48)) {
        let tree: BinarySearchTree<i16, i32> = entries.into_iter().collect();
        let mut cursor = tree.begin();
        let mut steps = 0;
        while !cursor.is_end() {
            cursor.move_next();
            steps += 1;
        }
        prop_assert_eq!(steps, tree.len());
        prop_assert_eq!(cursor, tree.end());
    }

    /// Law: a balanced tree's height is logarithmic in its size.
    #[test]
    fn prop_balanced_height_bound(entries in arbitrary_entries(64)) {
        let tree: BinarySearchTree<i16, i32> = entries.into_iter().collect();
        if tree.is_balanced() {
            // An AVL-shaped tree of height h has at least fib(h + 2) - 1 nodes.
            let (mut previous, mut current) = (1_usize, 1_usize);
            for _ in 0..tree.height() {
                (previous, current) = (current, previous + current);
            }
            prop_assert!(tree.len() >= current - 1);
        }
    }
}
