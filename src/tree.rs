//! A mutable, parent-linked BST. Nodes live in an arena owned by the tree and refer to each other
//! by index, so the parent back-reference never owns anything.
//!
//! The root node *is* the tree: it always occupies the same slot and an empty tree is a root with
//! no entry. Removing the root therefore overwrites its content instead of detaching it.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{KeyError, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), Err(KeyError));
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.find(&1), Ok(&2));
//!
//! // Removing a node returns its value.
//! assert_eq!(tree.remove(&1), Ok(2));
//! assert_eq!(tree.find(&1), Err(KeyError));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::error::{KeyError, Result};

/// Index of a node in the tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// The root never moves out of the first slot.
pub(crate) const ROOT: NodeId = NodeId(0);

/// Which child slot of a parent a node hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Clone)]
struct Node<K, V> {
    /// `None` only for the root of an empty tree and for slots on the free list.
    entry: Option<(K, V)>,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, parent: NodeId) -> Self {
        Self {
            entry: Some((key, value)),
            parent: Some(parent),
            left: None,
            right: None,
        }
    }

    fn vacant() -> Self {
        Self {
            entry: None,
            parent: None,
            left: None,
            right: None,
        }
    }

    fn key(&self) -> &K {
        &self.entry.as_ref().expect("linked node holds an entry").0
    }

    fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

/// An unbalanced Binary Search Tree mapping keys to values. Keys that compare equal to an
/// existing key are placed in its right subtree, so duplicates are kept rather than overwritten.
#[derive(Clone)]
pub struct OrderedTree<K, V> {
    nodes: Vec<Node<K, V>>,
    /// Arena slots released by `remove`, reused by the next `insert`.
    free: Vec<NodeId>,
    len: usize,
}

impl<K, V> Default for OrderedTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for OrderedTree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<K, V> OrderedTree<K, V> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::vacant()],
            free: Vec::new(),
            len: 0,
        }
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no entries (its root is the empty sentinel).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// A handle on the root node. For an empty tree the handle reports no key and no children.
    pub fn root(&self) -> Subtree<'_, K, V> {
        Subtree {
            tree: self,
            id: ROOT,
        }
    }

    /// Inserts the given value into the tree under the given key. Keys equal to one already in
    /// the tree descend to the right, so inserting a key twice stores two entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2, "two");
    /// tree.insert(1, "one");
    /// tree.insert(3, "three");
    ///
    /// assert_eq!(tree.root().key(), Some(&2));
    /// assert_eq!(tree.root().left().and_then(|n| n.key()), Some(&1));
    /// assert_eq!(tree.root().right().and_then(|n| n.key()), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        if self.nodes[ROOT.0].entry.is_none() {
            log::trace!("inserting into empty tree at the root");
            self.nodes[ROOT.0].entry = Some((key, value));
            self.len = 1;
            return;
        }

        let mut current = ROOT;
        loop {
            let side = if key < *self.nodes[current.0].key() {
                Side::Left
            } else {
                Side::Right
            };
            match self.nodes[current.0].child(side) {
                Some(child) => current = child,
                None => {
                    let id = self.alloc(Node::new(key, value, current));
                    self.nodes[current.0].set_child(side, Some(id));
                    log::trace!("inserted node {} as {:?} child of {}", id.0, side, current.0);
                    self.check_node(current);
                    break;
                }
            }
        }
        self.len += 1;
    }

    /// Finds the value associated with the given key. When the key was inserted more than once,
    /// the shallowest (earliest surviving) entry wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{KeyError, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Ok(&2));
    /// assert_eq!(tree.find(&42), Err(KeyError));
    /// ```
    pub fn find(&self, key: &K) -> Result<&V>
    where
        K: Ord,
    {
        match self.locate(key).and_then(|id| self.nodes[id.0].entry.as_ref()) {
            Some((_, value)) => Ok(value),
            None => {
                log::debug!("lookup missed in tree of {} entries", self.len);
                Err(KeyError)
            }
        }
    }

    /// Removes the node holding the given key and returns its value.
    ///
    /// A node with two children takes over its in-order successor's entry and the successor's
    /// node is removed in its place. A node with one child is spliced out. The root is never
    /// detached: its content is overwritten instead, or reset to empty when it was the last node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{KeyError, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.remove(&1), Ok(2));
    /// assert_eq!(tree.remove(&1), Err(KeyError));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<V>
    where
        K: Ord,
    {
        let Some(target) = self.locate(key) else {
            log::debug!("removal missed in tree of {} entries", self.len);
            return Err(KeyError);
        };
        let value = self.remove_node(target);
        self.len -= 1;
        Ok(value)
    }

    /// Descends from the root the way `find` does and returns the first node whose key matches.
    fn locate(&self, key: &K) -> Option<NodeId>
    where
        K: Ord,
    {
        let mut current = ROOT;
        loop {
            let node = &self.nodes[current.0];
            let (node_key, _) = node.entry.as_ref()?;
            let next = match key.cmp(node_key) {
                Ordering::Equal => return Some(current),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            current = next?;
        }
    }

    fn remove_node(&mut self, id: NodeId) -> V {
        let node = &self.nodes[id.0];
        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let successor = self.find_min(right);
                log::trace!("node {} has two children, promoting successor {}", id.0, successor.0);

                // Swap entries: the successor's moves up, ours leaves with the successor's node.
                let promoted = self.nodes[successor.0].entry.take();
                let displaced = mem::replace(&mut self.nodes[id.0].entry, promoted);
                self.nodes[successor.0].entry = displaced;

                // The successor has no left child so this recursion ends at the next level.
                self.remove_node(successor)
            }
            (Some(child), None) | (None, Some(child)) => self.replace_with(id, Some(child)),
            (None, None) => self.replace_with(id, None),
        }
    }

    /// Puts `replacement` where `id` hangs and returns `id`'s value.
    fn replace_with(&mut self, id: NodeId, replacement: Option<NodeId>) -> V {
        let removed = match self.nodes[id.0].parent {
            Some(parent) => {
                let parent_node = &mut self.nodes[parent.0];
                if parent_node.left == Some(id) {
                    parent_node.left = replacement;
                } else if parent_node.right == Some(id) {
                    parent_node.right = replacement;
                }
                if let Some(replacement) = replacement {
                    self.nodes[replacement.0].parent = Some(parent);
                }
                let removed = self.release(id);
                self.check_node(parent);
                removed
            }
            // The root has no slot to rewrite so its content is overwritten in place.
            None => match replacement {
                Some(child) => {
                    log::trace!("overwriting root with its only child {}", child.0);
                    let child = self.release(child);
                    let (left, right) = (child.left, child.right);
                    let removed = mem::replace(
                        &mut self.nodes[id.0],
                        Node {
                            entry: child.entry,
                            parent: None,
                            left,
                            right,
                        },
                    );
                    for grandchild in [left, right].into_iter().flatten() {
                        self.nodes[grandchild.0].parent = Some(id);
                    }
                    self.check_node(id);
                    removed
                }
                None => {
                    log::trace!("removed last node, root is empty");
                    mem::replace(&mut self.nodes[id.0], Node::vacant())
                }
            },
        };
        removed
            .entry
            .map(|(_, value)| value)
            .expect("removed node held an entry")
    }

    /// The leftmost node of the subtree rooted at `id`.
    fn find_min(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id.0].left {
            id = left;
        }
        id
    }

    fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<K, V> {
        debug_assert_ne!(id, ROOT, "the root slot is never released");
        self.free.push(id);
        mem::replace(&mut self.nodes[id.0], Node::vacant())
    }

    /// In debug builds, assert that the links around `id` agree: its children point back at it
    /// and its parent holds it on one side.
    fn check_node(&self, id: NodeId) {
        if !cfg!(debug_assertions) {
            return;
        }
        let node = &self.nodes[id.0];
        assert!(node.entry.is_some() || id == ROOT);
        for child in [node.left, node.right].into_iter().flatten() {
            assert_eq!(self.nodes[child.0].parent, Some(id));
            assert!(self.nodes[child.0].entry.is_some());
        }
        match node.parent {
            Some(parent) => {
                let parent = &self.nodes[parent.0];
                assert!(parent.left == Some(id) || parent.right == Some(id));
            }
            None => assert_eq!(id, ROOT),
        }
    }

    /// Walks the whole tree and asserts that every child points back at its parent and that the
    /// reachable node count matches `len`.
    #[cfg(test)]
    pub(crate) fn check_links(&self) {
        let root = &self.nodes[ROOT.0];
        assert!(root.parent.is_none());
        if root.entry.is_none() {
            assert!(root.left.is_none() && root.right.is_none());
            assert_eq!(self.len, 0);
            return;
        }

        let mut reachable = 0;
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            reachable += 1;
            for child in [self.nodes[id.0].left, self.nodes[id.0].right]
                .into_iter()
                .flatten()
            {
                assert_eq!(self.nodes[child.0].parent, Some(id));
                assert!(self.nodes[child.0].entry.is_some());
                stack.push(child);
            }
        }
        assert_eq!(reachable, self.len);
    }

    /// Hangs a new node directly off `parent` without checking the ordering, so analyses can be
    /// tested against trees that `insert` would never build.
    #[cfg(test)]
    pub(crate) fn graft(&mut self, parent: NodeId, side: Side, key: K, value: V) -> NodeId {
        let id = self.alloc(Node::new(key, value, parent));
        self.nodes[parent.0].set_child(side, Some(id));
        self.len += 1;
        id
    }
}

/// A read-only handle on one node of an [`OrderedTree`] and, through its children, the subtree
/// below it. Traversals and analyses accept any handle, so they run on whole trees (via
/// [`OrderedTree::root`]) or on subtrees alike.
pub struct Subtree<'a, K, V> {
    tree: &'a OrderedTree<K, V>,
    id: NodeId,
}

impl<K, V> Clone for Subtree<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K, V> Copy for Subtree<'_, K, V> {}

impl<K, V> fmt::Debug for Subtree<'_, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key())
            .field("value", &self.value())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<'a, K, V> Subtree<'a, K, V> {
    fn node(&self) -> &'a Node<K, V> {
        &self.tree.nodes[self.id.0]
    }

    fn at(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self {
            tree: self.tree,
            id,
        })
    }

    /// This node's key, or `None` for the root of an empty tree.
    pub fn key(&self) -> Option<&'a K> {
        self.entry().map(|(key, _)| key)
    }

    /// This node's value, or `None` for the root of an empty tree.
    pub fn value(&self) -> Option<&'a V> {
        self.entry().map(|(_, value)| value)
    }

    /// This node's key and value together.
    pub fn entry(&self) -> Option<(&'a K, &'a V)> {
        self.node().entry.as_ref().map(|(key, value)| (key, value))
    }

    /// Whether this is the empty-tree sentinel.
    pub fn is_empty(&self) -> bool {
        self.node().entry.is_none()
    }

    /// The left child, holding strictly smaller keys.
    pub fn left(&self) -> Option<Self> {
        self.at(self.node().left)
    }

    /// The right child, holding greater or equal keys.
    pub fn right(&self) -> Option<Self> {
        self.at(self.node().right)
    }

    /// The node this one hangs from. `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.at(self.node().parent)
    }

    /// Whether this handle refers to the tree's root.
    pub fn is_root(&self) -> bool {
        self.id == ROOT
    }

    #[cfg(test)]
    pub(crate) fn id(&self) -> NodeId {
        self.id
    }
}
