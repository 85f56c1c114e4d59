//! A binary search tree with invariant-preserving operations.
//!
//! The ordering invariant is: for every node, all keys in the left subtree
//! compare `<=` the node's key and all keys in the right subtree compare
//! `>` it. [`Bst::insert`] breaks ties toward the left subtree, and
//! [`Bst::is_valid`] checks exactly this (duplicates inserted through this
//! API always validate).
//!
//! Internally, mutation follows the "returns the new root" pattern: the
//! recursive insert consumes a [`Link`] and hands back the possibly new
//! link, because inserting into an empty subtree replaces the link itself.

use crate::errors::TreeError;
use crate::node::{Link, Node};
use itertools::Itertools;
use std::cmp::Ordering;
use std::ops::Bound;

/// An owned binary search tree. The empty tree is the absence of a root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bst<K> {
    root: Link<K>,
}

impl<K> Bst<K> {
    pub fn new() -> Self {
        Bst { root: None }
    }

    pub(crate) fn from_root(root: Link<K>) -> Self {
        Bst { root }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Mutable access to the root node, for the in-place value transforms
    /// in [`crate::traverse`].
    pub fn root_mut(&mut self) -> Option<&mut Node<K>> {
        self.root.as_deref_mut()
    }
}

impl<K: Ord> Bst<K> {
    /// Inserts `key`, keeping the ordering invariant. Equal keys descend
    /// into the left subtree.
    pub fn insert(&mut self, key: K) {
        self.root = insert_at(self.root.take(), key);
    }

    /// The smallest key, found by following left children.
    pub fn min(&self) -> Result<&K, TreeError> {
        let mut node = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.key)
    }

    /// The smallest key `>= x`.
    ///
    /// [`TreeError::EmptyTree`] on an empty tree, [`TreeError::NotFound`]
    /// when `x` exceeds every key. Both are distinct from any legitimate
    /// key value, so the full key domain remains usable.
    pub fn ceil(&self, x: &K) -> Result<&K, TreeError> {
        let root = self.root.as_deref().ok_or(TreeError::EmptyTree)?;
        ceil_at(Some(root), x).ok_or(TreeError::NotFound)
    }

    /// Checks the ordering invariant by propagating an interval from the
    /// root. The bounds are carried as [`Bound`] flags rather than
    /// predecessor/successor arithmetic, so any `Ord` key type works:
    /// descending left tightens the upper bound inclusively (ties live on
    /// the left), descending right tightens the lower bound exclusively.
    pub fn is_valid(&self) -> bool {
        valid_within(self.root.as_deref(), Bound::Unbounded, Bound::Unbounded)
    }

    /// All keys in `[low, high]`, ascending. Subtrees that cannot contain
    /// keys in range are pruned, not visited.
    pub fn range(&self, low: &K, high: &K) -> Vec<&K> {
        let mut keys = Vec::new();
        range_into(self.root.as_deref(), low, high, &mut keys);
        keys
    }
}

impl<K: Ord> FromIterator<K> for Bst<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut bst = Bst::new();
        bst.extend(iter);
        bst
    }
}

impl<K: Ord> Extend<K> for Bst<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

fn insert_at<K: Ord>(link: Link<K>, key: K) -> Link<K> {
    match link {
        None => Some(Node::boxed(key)),
        Some(mut node) => {
            if key <= node.key {
                node.left = insert_at(node.left.take(), key);
            } else {
                node.right = insert_at(node.right.take(), key);
            }
            Some(node)
        }
    }
}

fn ceil_at<'a, K: Ord>(node: Option<&'a Node<K>>, x: &K) -> Option<&'a K> {
    let node = node?;
    match x.cmp(&node.key) {
        Ordering::Equal => Some(&node.key),
        // Everything on the left is < x as well, so only the right subtree
        // can hold a candidate.
        Ordering::Greater => ceil_at(node.right.as_deref(), x),
        // The current key is a candidate; a smaller one can only be on the
        // left.
        Ordering::Less => ceil_at(node.left.as_deref(), x).or(Some(&node.key)),
    }
}

fn valid_within<K: Ord>(node: Option<&Node<K>>, lower: Bound<&K>, upper: Bound<&K>) -> bool {
    let Some(node) = node else { return true };
    let above = match lower {
        Bound::Unbounded => true,
        Bound::Excluded(bound) => node.key > *bound,
        Bound::Included(bound) => node.key >= *bound,
    };
    let below = match upper {
        Bound::Unbounded => true,
        Bound::Included(bound) => node.key <= *bound,
        Bound::Excluded(bound) => node.key < *bound,
    };
    above
        && below
        && valid_within(node.left.as_deref(), lower, Bound::Included(&node.key))
        && valid_within(node.right.as_deref(), Bound::Excluded(&node.key), upper)
}

fn range_into<'a, K: Ord>(node: Option<&'a Node<K>>, low: &K, high: &K, keys: &mut Vec<&'a K>) {
    let Some(node) = node else { return };
    // Ties live in the left subtree, so it can still hold keys equal to
    // `low` when `low == node.key`; only prune it when `low` is larger.
    if *low <= node.key {
        range_into(node.left.as_deref(), low, high, keys);
    }
    if *low <= node.key && node.key <= *high {
        keys.push(&node.key);
    }
    if *high > node.key {
        range_into(node.right.as_deref(), low, high, keys);
    }
}

/// Decides from a BST's preorder traversal whether every internal node has
/// exactly one child, by checking that each key's successor and the last
/// key lie on the same side of it.
///
/// The input must be the preorder of a valid BST with unique keys. Runs in
/// O(n) and agrees with [`single_child_chain_bounds`] on every such input.
pub fn single_child_chain<K: Ord>(preorder: &[K]) -> bool {
    let Some(last) = preorder.last() else {
        return true;
    };
    preorder
        .iter()
        .tuple_windows()
        .all(|(key, next)| (key > next) == (key > last))
}

/// Same decision as [`single_child_chain`], computed by scanning backward
/// with an expanding min/max bound seeded from the last two keys: in a
/// single-child chain every earlier key must fall outside the interval
/// spanned by the keys after it.
pub fn single_child_chain_bounds<K: Ord>(preorder: &[K]) -> bool {
    let n = preorder.len();
    if n < 3 {
        return true;
    }
    let (mut lo, mut hi) = (&preorder[n - 1], &preorder[n - 2]);
    if lo > hi {
        (lo, hi) = (hi, lo);
    }
    for key in preorder[..n - 2].iter().rev() {
        if key < lo {
            lo = key;
        } else if key > hi {
            hi = key;
        } else {
            return false;
        }
    }
    true
}
