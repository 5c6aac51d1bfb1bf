//! Structural questions about a tree: how tall it is, whether it is balanced, whether its keys are
//! ordered, and which node holds the k-th largest key.

use std::fmt;

use crate::tree::Subtree;

/// The number of nodes on the longest path from `tree` down to a leaf. An empty tree has height 0
/// and a lone root has height 1.
///
/// # Examples
///
/// ```
/// use ordered_tree::{shape, OrderedTree};
///
/// let mut tree = OrderedTree::new();
/// assert_eq!(shape::height(tree.root()), 0);
///
/// for key in 1..=4 {
///     tree.insert(key, ());
/// }
/// // Sorted input degenerates into a chain.
/// assert_eq!(shape::height(tree.root()), 4);
/// ```
pub fn height<K, V>(tree: Subtree<'_, K, V>) -> usize {
    if tree.is_empty() {
        return 0;
    }
    let mut max = 1;
    deepest(tree, 1, &mut max);
    max
}

fn deepest<K, V>(node: Subtree<'_, K, V>, depth: usize, max: &mut usize) {
    *max = (*max).max(depth);
    for child in [node.left(), node.right()].into_iter().flatten() {
        deepest(child, depth + 1, max);
    }
}

/// Whether every key in the tree respects the bounds set by all of its ancestors: strictly less
/// than any ancestor it sits left of, and greater or equal to any ancestor it sits right of.
///
/// Trees built through [`OrderedTree::insert`][crate::OrderedTree::insert] always pass.
pub fn is_valid_bst<K, V>(tree: Subtree<'_, K, V>) -> bool
where
    K: Ord,
{
    within(tree, None, None)
}

/// `lower` is inclusive, `upper` exclusive.
fn within<'a, K, V>(node: Subtree<'a, K, V>, lower: Option<&'a K>, upper: Option<&'a K>) -> bool
where
    K: Ord,
{
    let Some(key) = node.key() else {
        return true;
    };
    if lower.is_some_and(|lower| key < lower) || upper.is_some_and(|upper| key >= upper) {
        return false;
    }
    node.left().is_none_or(|left| within(left, lower, Some(key)))
        && node.right().is_none_or(|right| within(right, Some(key), upper))
}

/// Whether every node's key lies between its own children's keys. This only looks one level
/// down, so a grandchild on the wrong side of its grandparent goes unnoticed; use
/// [`is_valid_bst`] for the full check.
pub fn is_locally_ordered<K, V>(tree: Subtree<'_, K, V>) -> bool
where
    K: Ord,
{
    let Some(key) = tree.key() else {
        return true;
    };
    let left_ok = tree
        .left()
        .is_none_or(|left| left.key() <= Some(key) && is_locally_ordered(left));
    left_ok
        && tree
            .right()
            .is_none_or(|right| right.key() >= Some(key) && is_locally_ordered(right))
}

/// Whether every downward path from `tree` ends within one level of every other. A path ends at
/// any node missing a child, so a single-child chain counts as unbalanced.
///
/// # Examples
///
/// ```
/// use ordered_tree::{shape, OrderedTree};
///
/// let mut balanced = OrderedTree::new();
/// for key in [4, 2, 6, 1, 3, 5, 7] {
///     balanced.insert(key, ());
/// }
/// assert!(shape::is_balanced(balanced.root()));
///
/// let mut chain = OrderedTree::new();
/// for key in 1..=7 {
///     chain.insert(key, ());
/// }
/// assert!(!shape::is_balanced(chain.root()));
/// ```
pub fn is_balanced<K, V>(tree: Subtree<'_, K, V>) -> bool {
    if tree.left().is_none() && tree.right().is_none() {
        return true;
    }
    let mut ends = None;
    path_ends_within_one(tree, 1, &mut ends)
}

/// `ends` is the shallowest and deepest path end seen so far. Stops descending on the first
/// violation.
fn path_ends_within_one<K, V>(
    node: Subtree<'_, K, V>,
    depth: usize,
    ends: &mut Option<(usize, usize)>,
) -> bool {
    let (left, right) = (node.left(), node.right());
    if left.is_none() || right.is_none() {
        let (shallowest, deepest) = match *ends {
            Some((shallowest, deepest)) => (shallowest.min(depth), deepest.max(depth)),
            None => (depth, depth),
        };
        *ends = Some((shallowest, deepest));
        if deepest - shallowest > 1 {
            return false;
        }
    }
    left.is_none_or(|left| path_ends_within_one(left, depth + 1, ends))
        && right.is_none_or(|right| path_ends_within_one(right, depth + 1, ends))
}

/// The outcome of asking for the k-th largest node.
#[derive(Debug)]
pub enum OrderStatistic<'a, K, V> {
    /// The node holding the k-th largest key.
    Found(Subtree<'a, K, V>),
    /// The tree holds fewer than `wanted` nodes.
    TooFewNodes {
        /// The rank that was asked for.
        wanted: usize,
        /// How many nodes the tree does hold.
        present: usize,
    },
}

impl<'a, K, V> OrderStatistic<'a, K, V> {
    /// The found node, if there was one.
    pub fn node(&self) -> Option<Subtree<'a, K, V>> {
        match self {
            Self::Found(node) => Some(*node),
            Self::TooFewNodes { .. } => None,
        }
    }
}

impl<K, V> fmt::Display for OrderStatistic<'_, K, V>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(node) => match node.key() {
                Some(key) => write!(f, "node with key {key}"),
                None => write!(f, "empty node"),
            },
            Self::TooFewNodes { wanted, present } => {
                write!(f, "fewer than {wanted} nodes (tree has {present})")
            }
        }
    }
}

/// The node holding the third largest key.
///
/// # Examples
///
/// ```
/// use ordered_tree::{shape, OrderedTree};
///
/// let mut tree = OrderedTree::new();
/// tree.insert(2, 'b');
/// tree.insert(1, 'a');
///
/// let outcome = shape::third_largest(tree.root());
/// assert_eq!(outcome.to_string(), "fewer than 3 nodes (tree has 2)");
///
/// tree.insert(3, 'c');
/// let third = shape::third_largest(tree.root()).node().unwrap();
/// assert_eq!(third.value(), Some(&'a'));
/// ```
pub fn third_largest<K, V>(tree: Subtree<'_, K, V>) -> OrderStatistic<'_, K, V> {
    kth_largest(tree, 3)
}

/// The node holding the `k`-th largest key (the largest is `k = 1`), found by walking the tree in
/// reverse order and stopping at the `k`-th node visited. Equal keys each count once.
///
/// # Panics
///
/// When `k` is 0.
pub fn kth_largest<K, V>(tree: Subtree<'_, K, V>, k: usize) -> OrderStatistic<'_, K, V> {
    assert!(k > 0, "ranks start at 1");
    let mut visited = 0;
    match visit_descending(tree, k, &mut visited) {
        Some(node) => OrderStatistic::Found(node),
        None => OrderStatistic::TooFewNodes {
            wanted: k,
            present: visited,
        },
    }
}

fn visit_descending<'a, K, V>(
    node: Subtree<'a, K, V>,
    k: usize,
    visited: &mut usize,
) -> Option<Subtree<'a, K, V>> {
    if let Some(found) = node.right().and_then(|right| visit_descending(right, k, visited)) {
        return Some(found);
    }
    if node.is_empty() {
        return None;
    }
    *visited += 1;
    if *visited == k {
        return Some(node);
    }
    node.left().and_then(|left| visit_descending(left, k, visited))
}
