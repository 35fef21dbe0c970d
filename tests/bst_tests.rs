//! Integration tests for BinarySearchTree.

use arbor::tree::{BinarySearchTree, KeyNotFoundError};
use rstest::{fixture, rstest};

#[fixture]
fn seven() -> BinarySearchTree<i32, String> {
    [5, 3, 8, 1, 4, 7, 9]
        .into_iter()
        .map(|key| (key, format!("v{key}")))
        .collect()
}

fn keys(tree: &BinarySearchTree<i32, String>) -> Vec<i32> {
    tree.keys().copied().collect()
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_tree_is_empty() {
    let tree: BinarySearchTree<i32, String> = BinarySearchTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.begin().is_end());
    assert_eq!(tree.begin(), tree.end());
}

#[rstest]
fn test_default_equals_new() {
    let tree: BinarySearchTree<i32, i32> = BinarySearchTree::default();
    assert_eq!(tree, BinarySearchTree::new());
}

#[rstest]
fn test_is_empty_after_removing_last_key() {
    let mut tree = BinarySearchTree::new();
    tree.insert(1, "one");
    assert!(!tree.is_empty());
    tree.remove(&1);
    assert!(tree.is_empty());
}

// =============================================================================
// Insert
// =============================================================================

#[rstest]
fn test_insert_keeps_first_key_as_root() {
    let mut tree = BinarySearchTree::new();
    for key in [5, 3, 8] {
        tree.insert(key, ());
    }
    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 5);
    assert_eq!(root.left().map(|node| *node.key()), Some(3));
    assert_eq!(root.right().map(|node| *node.key()), Some(8));
}

#[rstest]
fn test_insert_existing_key_overwrites_value(mut seven: BinarySearchTree<i32, String>) {
    let previous = seven.insert(4, "four".to_owned());
    assert_eq!(previous.as_deref(), Some("v4"));
    assert_eq!(seven.len(), 7);
    assert_eq!(seven.get(&4).map(String::as_str), Some("four"));
}

#[rstest]
fn test_insert_ascending_builds_right_chain() {
    let tree: BinarySearchTree<i32, ()> = (1..=6).map(|key| (key, ())).collect();
    assert_eq!(tree.height(), 6);
    assert!(!tree.is_balanced());
    let mut node = tree.root();
    while let Some(current) = node {
        assert!(current.left().is_none());
        node = current.right();
    }
}

// =============================================================================
// Remove
// =============================================================================

#[rstest]
#[case(1, vec![3, 4, 5, 7, 8, 9])]
#[case(3, vec![1, 4, 5, 7, 8, 9])]
#[case(5, vec![1, 3, 4, 7, 8, 9])]
#[case(9, vec![1, 3, 4, 5, 7, 8])]
#[case(6, vec![1, 3, 4, 5, 7, 8, 9])]
fn test_remove_keeps_order(
    mut seven: BinarySearchTree<i32, String>,
    #[case] key: i32,
    #[case] expected: Vec<i32>,
) {
    seven.remove(&key);
    assert_eq!(keys(&seven), expected);
    assert_eq!(seven.len(), expected.len());
}

#[rstest]
fn test_remove_root_with_two_children_promotes_predecessor(
    mut seven: BinarySearchTree<i32, String>,
) {
    assert_eq!(seven.remove(&5).as_deref(), Some("v5"));
    let root = seven.root().unwrap();
    assert_eq!(*root.key(), 4);
    assert_eq!(root.left().map(|node| *node.key()), Some(3));
    assert_eq!(root.right().map(|node| *node.key()), Some(8));
    assert!(seven.find(&5).is_end());
}

#[rstest]
fn test_remove_node_with_one_child_promotes_child() {
    let mut tree: BinarySearchTree<i32, ()> = [5, 3, 1].into_iter().map(|key| (key, ())).collect();
    tree.remove(&3);
    let root = tree.root().unwrap();
    let child = root.left().unwrap();
    assert_eq!(*child.key(), 1);
    assert_eq!(child.parent(), Some(root));
}

#[rstest]
fn test_remove_only_node() {
    let mut tree = BinarySearchTree::new();
    tree.insert("only", 1);
    assert_eq!(tree.remove_entry("only"), Some(("only", 1)));
    assert!(tree.root().is_none());
}

#[rstest]
fn test_remove_missing_key_is_noop(mut seven: BinarySearchTree<i32, String>) {
    let before = seven.clone();
    assert_eq!(seven.remove(&42), None);
    assert_eq!(seven, before);
}

#[rstest]
fn test_remove_everything_in_insertion_order(mut seven: BinarySearchTree<i32, String>) {
    for key in [5, 3, 8, 1, 4, 7, 9] {
        assert!(seven.remove(&key).is_some());
    }
    assert!(seven.is_empty());
    assert_eq!(seven.height(), 0);
}

// =============================================================================
// Lookup
// =============================================================================

#[rstest]
fn test_find_and_scan_agree(seven: BinarySearchTree<i32, String>) {
    for key in 0..11 {
        assert_eq!(seven.find(&key), seven.find_by_scan(&key), "key {key}");
    }
}

#[rstest]
fn test_lookup_missing_key_is_error(seven: BinarySearchTree<i32, String>) {
    assert_eq!(seven.lookup(&2), Err(KeyNotFoundError));
    assert_eq!(KeyNotFoundError.to_string(), "key not found in tree");
}

#[rstest]
fn test_lookup_mut_changes_value(mut seven: BinarySearchTree<i32, String>) {
    seven.lookup_mut(&7).unwrap().push('!');
    assert_eq!(seven[&7], "v7!");
}

#[rstest]
fn test_lookup_through_borrowed_form() {
    let mut tree = BinarySearchTree::new();
    tree.insert("pear".to_owned(), 3);
    tree.insert("apple".to_owned(), 1);
    assert_eq!(tree.lookup("apple"), Ok(&1));
    assert!(tree.contains_key("pear"));
    assert!(!tree.contains_key("plum"));
}

#[rstest]
#[should_panic(expected = "key not found in tree")]
fn test_index_missing_key_panics(seven: BinarySearchTree<i32, String>) {
    let _ = &seven[&100];
}

// =============================================================================
// Structure
// =============================================================================

#[rstest]
fn test_perfect_tree_is_balanced(seven: BinarySearchTree<i32, String>) {
    assert_eq!(seven.height(), 3);
    assert!(seven.is_balanced());
    assert!(seven.has_equal_leaf_depths());
}

#[rstest]
fn test_empty_tree_is_balanced() {
    let tree: BinarySearchTree<i32, ()> = BinarySearchTree::new();
    assert!(tree.is_balanced());
    assert_eq!(tree.height(), 0);
}

#[rstest]
fn test_balance_checks_every_node() {
    // The root's subtrees differ by one, but node 3 has a left chain of two
    // and no right child.
    let tree: BinarySearchTree<i32, ()> = [5, 3, 8, 2, 9, 1]
        .into_iter()
        .map(|key| (key, ()))
        .collect();
    assert!(!tree.is_balanced());
}

#[rstest]
fn test_clear_releases_everything(mut seven: BinarySearchTree<i32, String>) {
    seven.clear();
    assert!(seven.is_empty());
    assert_eq!(seven.len(), 0);
    seven.insert(1, "again".to_owned());
    assert_eq!(keys(&seven), vec![1]);
}

// =============================================================================
// Trait implementations
// =============================================================================

#[rstest]
fn test_display_lists_entries_in_order() {
    let tree: BinarySearchTree<i32, &str> = [(2, "two"), (1, "one")].into_iter().collect();
    assert_eq!(tree.to_string(), "{1: one, 2: two}");
    assert_eq!(format!("{tree:?}"), r#"{1: "one", 2: "two"}"#);
}

#[rstest]
fn test_equality_ignores_shape() {
    let left: BinarySearchTree<i32, ()> = [1, 2, 3].into_iter().map(|key| (key, ())).collect();
    let right: BinarySearchTree<i32, ()> = [2, 1, 3].into_iter().map(|key| (key, ())).collect();
    assert_ne!(left.height(), right.height());
    assert_eq!(left, right);
}

#[rstest]
fn test_extend_and_into_iter(mut seven: BinarySearchTree<i32, String>) {
    seven.extend([(2, "v2".to_owned()), (6, "v6".to_owned())]);
    let owned: Vec<(i32, String)> = seven.into_iter().collect();
    assert_eq!(owned.len(), 9);
    assert!(owned.windows(2).all(|pair| pair[0].0 < pair[1].0));
}
