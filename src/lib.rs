//! This crate exposes a mutable, unbalanced Binary Search Tree (BST) along with the walks and
//! structural analyses one usually writes against such a tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The invariants kept here are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` (where `height` is the longest path from the root `Node` to a
//! leaf `Node`). No rebalancing happens, so inserting sorted keys degenerates the tree into a
//! chain of height `N`. BSTs also naturally support sorted iteration by visiting the left
//! subtree, then the subtree root, then the right subtree.
//!
//! ## Layout
//!
//! - [`OrderedTree`] owns the nodes; [`Subtree`] is a read-only handle on any one of them.
//! - [`traversal`] collects values in in-, pre-, post- and level-order.
//! - [`shape`] answers height, balance, validity and k-th largest questions.
//! - [`sequence`] decides whether two insertion orders build the same tree.
//! - [`queue`] and [`search`] are small standalone helpers.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{shape, traversal, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//! for key in [25, 15, 50, 10, 24, 35, 70] {
//!     tree.insert(key, key);
//! }
//!
//! assert_eq!(
//!     traversal::pre_order(tree.root()),
//!     vec![&25, &15, &10, &24, &50, &35, &70]
//! );
//! assert_eq!(shape::height(tree.root()), 3);
//! assert!(shape::is_balanced(tree.root()));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod queue;
pub mod search;
pub mod sequence;
pub mod shape;
pub mod traversal;
mod tree;

pub use error::{KeyError, Result};
pub use tree::{OrderedTree, Subtree};
