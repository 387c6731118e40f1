//! Property tests for the search tree: traversal orders and the
//! agreement between recursive and stack-based variants.

use std::collections::HashSet;

use deepfirst::BinaryTree;
use quickcheck_macros::quickcheck;

fn build(keys: &[u8]) -> BinaryTree<u8> {
    let mut tree = BinaryTree::new();
    for &key in keys {
        tree.insert(key);
    }
    tree
}

#[quickcheck]
fn in_order_is_non_decreasing(keys: Vec<u8>) -> bool {
    let tree = build(&keys);
    let visited = tree.in_order();
    visited.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn in_order_of_unique_keys_is_strictly_increasing(keys: Vec<u8>) -> bool {
    // Dedup through a HashSet so the insertion order is as arbitrary
    // as the tree shape it produces.
    let unique: HashSet<u8> = keys.into_iter().collect();
    let mut tree = BinaryTree::new();
    for key in unique {
        tree.insert(key);
    }
    let visited = tree.in_order();
    visited.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn pre_order_iter_matches_recursive(keys: Vec<u8>) -> bool {
    let tree = build(&keys);
    tree.pre_order_iter().collect::<Vec<_>>() == tree.pre_order()
}

#[quickcheck]
fn in_order_iter_matches_recursive(keys: Vec<u8>) -> bool {
    let tree = build(&keys);
    tree.in_order_iter().collect::<Vec<_>>() == tree.in_order()
}

#[quickcheck]
fn post_order_iter_matches_recursive(keys: Vec<u8>) -> bool {
    let tree = build(&keys);
    tree.post_order_iter().collect::<Vec<_>>() == tree.post_order()
}

#[quickcheck]
fn every_insertion_is_visited(keys: Vec<u8>) -> bool {
    let tree = build(&keys);
    tree.pre_order().len() == keys.len()
        && tree.in_order().len() == keys.len()
        && tree.post_order().len() == keys.len()
}

#[quickcheck]
fn all_orders_visit_the_same_multiset(keys: Vec<u8>) -> bool {
    let tree = build(&keys);
    let mut pre: Vec<&u8> = tree.pre_order();
    let mut post: Vec<&u8> = tree.post_order();
    pre.sort();
    post.sort();
    // in_order is already sorted by the search-tree invariant.
    pre == tree.in_order() && post == tree.in_order()
}
