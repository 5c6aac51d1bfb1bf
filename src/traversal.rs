//! Depth-first and breadth-first walks over a [`Subtree`], collecting values (not keys).
//!
//! Every walk returns a freshly built `Vec`. The `*_into` variants append to a vector the caller
//! already has instead, which is how the recursion threads its output through the subtrees.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{traversal, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//! for key in [2, 1, 3] {
//!     tree.insert(key, key * 10);
//! }
//!
//! assert_eq!(traversal::in_order(tree.root()), vec![&10, &20, &30]);
//! assert_eq!(traversal::pre_order(tree.root()), vec![&20, &10, &30]);
//! assert_eq!(traversal::post_order(tree.root()), vec![&10, &30, &20]);
//! assert_eq!(traversal::level_order(tree.root()), vec![&20, &10, &30]);
//! ```

use crate::queue::Queue;
use crate::tree::Subtree;

/// Left subtree, then this node, then the right subtree. Ascending key order for a valid BST.
pub fn in_order<'a, K, V>(tree: Subtree<'a, K, V>) -> Vec<&'a V> {
    let mut values = Vec::new();
    in_order_into(tree, &mut values);
    values
}

/// [`in_order`], appending to `values`.
pub fn in_order_into<'a, K, V>(node: Subtree<'a, K, V>, values: &mut Vec<&'a V>) {
    if let Some(left) = node.left() {
        in_order_into(left, values);
    }
    values.extend(node.value());
    if let Some(right) = node.right() {
        in_order_into(right, values);
    }
}

/// This node, then the left subtree, then the right subtree.
pub fn pre_order<'a, K, V>(tree: Subtree<'a, K, V>) -> Vec<&'a V> {
    let mut values = Vec::new();
    pre_order_into(tree, &mut values);
    values
}

/// [`pre_order`], appending to `values`.
pub fn pre_order_into<'a, K, V>(node: Subtree<'a, K, V>, values: &mut Vec<&'a V>) {
    values.extend(node.value());
    if let Some(left) = node.left() {
        pre_order_into(left, values);
    }
    if let Some(right) = node.right() {
        pre_order_into(right, values);
    }
}

/// The left subtree, then the right subtree, then this node.
pub fn post_order<'a, K, V>(tree: Subtree<'a, K, V>) -> Vec<&'a V> {
    let mut values = Vec::new();
    post_order_into(tree, &mut values);
    values
}

/// [`post_order`], appending to `values`.
pub fn post_order_into<'a, K, V>(node: Subtree<'a, K, V>, values: &mut Vec<&'a V>) {
    if let Some(left) = node.left() {
        post_order_into(left, values);
    }
    if let Some(right) = node.right() {
        post_order_into(right, values);
    }
    values.extend(node.value());
}

/// Breadth first: all values at one depth, left to right, before any at the next.
pub fn level_order<'a, K, V>(tree: Subtree<'a, K, V>) -> Vec<&'a V> {
    let mut values = Vec::new();
    level_order_into(tree, &mut values);
    values
}

/// [`level_order`], appending to `values`.
pub fn level_order_into<'a, K, V>(tree: Subtree<'a, K, V>, values: &mut Vec<&'a V>) {
    let mut queue = Queue::new();
    queue.enqueue(tree);
    while let Some(node) = queue.dequeue() {
        values.extend(node.value());

        if let Some(left) = node.left() {
            queue.enqueue(left);
        }
        if let Some(right) = node.right() {
            queue.enqueue(right);
        }
    }
}
