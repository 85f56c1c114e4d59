//! Read-only traversals and in-place value transforms over the tree
//! structures.
//!
//! The recursive traversals drive a caller-supplied visitor closure; the
//! iterative ones are [`Iterator`] implementations over an explicit
//! [`Stack`] and are lazy, single-pass and not restartable. Both families
//! produce identical orders, which the tests pin down.

use crate::bst::Bst;
use crate::errors::TreeError;
use crate::node::{NaryNode, Node};
use crate::stack::Stack;
use num_traits::PrimInt;

/// Recursive in-order traversal: left subtree, node, right subtree.
pub fn in_order<K>(root: Option<&Node<K>>, visit: &mut impl FnMut(&K)) {
    if let Some(node) = root {
        in_order(node.left.as_deref(), visit);
        visit(&node.key);
        in_order(node.right.as_deref(), visit);
    }
}

/// Recursive pre-order traversal: node, left subtree, right subtree.
pub fn pre_order<K>(root: Option<&Node<K>>, visit: &mut impl FnMut(&K)) {
    if let Some(node) = root {
        visit(&node.key);
        pre_order(node.left.as_deref(), visit);
        pre_order(node.right.as_deref(), visit);
    }
}

/// Recursive post-order traversal: left subtree, right subtree, node.
pub fn post_order<K>(root: Option<&Node<K>>, visit: &mut impl FnMut(&K)) {
    if let Some(node) = root {
        post_order(node.left.as_deref(), visit);
        post_order(node.right.as_deref(), visit);
        visit(&node.key);
    }
}

/// Iterative in-order traversal over an explicit stack.
///
/// Nodes are pushed while descending left; when there is no left child the
/// top is popped, its key emitted, and descent continues from its right
/// child. The iterator is exhausted when the stack is empty and no current
/// node remains.
pub struct InOrder<'a, K> {
    stack: Stack<&'a Node<K>>,
    current: Option<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub fn new(root: Option<&'a Node<K>>) -> Self {
        InOrder {
            stack: Stack::new(),
            current: root,
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(&node.key)
    }
}

/// Iterative pre-order traversal over an explicit stack.
///
/// Pops a node, emits it, then pushes the right child before the left one
/// so that the left subtree is visited first.
pub struct PreOrder<'a, K> {
    stack: Stack<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub fn new(root: Option<&'a Node<K>>) -> Self {
        let mut stack = Stack::new();
        if let Some(node) = root {
            stack.push(node);
        }
        PreOrder { stack }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.key)
    }
}

impl<K> Bst<K> {
    /// Lazy iterative in-order iteration; ascending for a valid BST.
    pub fn iter_in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root())
    }

    /// Lazy iterative pre-order iteration.
    pub fn iter_pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root())
    }
}

/// Computes the post-order traversal of the tree described by its in-order
/// and pre-order traversals, without building the tree.
///
/// The first pre-order element is the subtree root; its position in the
/// in-order slice splits the remainder into left and right subtrees. The
/// root search is linear, so the whole reconstruction is O(n²). Sequences
/// that do not describe the same tree are rejected with
/// [`TreeError::MismatchedTraversals`].
pub fn postorder_from_traversals<K>(inorder: &[K], preorder: &[K]) -> Result<Vec<K>, TreeError>
where
    K: PartialEq + Clone,
{
    if inorder.len() != preorder.len() {
        return Err(TreeError::MismatchedTraversals);
    }
    let mut postorder = Vec::with_capacity(preorder.len());
    let mut next_root = 0;
    collect_postorder(inorder, preorder, &mut next_root, &mut postorder)?;
    if next_root != preorder.len() {
        return Err(TreeError::MismatchedTraversals);
    }
    Ok(postorder)
}

fn collect_postorder<K>(
    inorder: &[K],
    preorder: &[K],
    next_root: &mut usize,
    postorder: &mut Vec<K>,
) -> Result<(), TreeError>
where
    K: PartialEq + Clone,
{
    if inorder.is_empty() {
        return Ok(());
    }
    let root = preorder
        .get(*next_root)
        .ok_or(TreeError::MismatchedTraversals)?;
    *next_root += 1;

    let split = inorder
        .iter()
        .position(|key| key == root)
        .ok_or(TreeError::MismatchedTraversals)?;

    collect_postorder(&inorder[..split], preorder, next_root, postorder)?;
    collect_postorder(&inorder[split + 1..], preorder, next_root, postorder)?;
    postorder.push(root.clone());
    Ok(())
}

/// The height of a general tree: number of nodes on the longest root-leaf
/// path, `0` for the empty tree.
pub fn nary_height<K>(root: Option<&NaryNode<K>>) -> usize {
    match root {
        None => 0,
        Some(node) => {
            1 + node
                .children
                .iter()
                .map(|child| nary_height(Some(child)))
                .max()
                .unwrap_or(0)
        }
    }
}

/// Height and diameter of a subtree, computed together in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extent {
    /// Nodes on the longest root-leaf path.
    pub height: usize,
    /// Nodes on the longest path between any two nodes in the subtree.
    pub diameter: usize,
}

/// Computes [`Extent`] in a single traversal. Each recursive call returns
/// both figures, so no shared mutable state is threaded through the
/// recursion; the longest path through a node has
/// `1 + left.height + right.height` nodes.
pub fn extent<K>(root: Option<&Node<K>>) -> Extent {
    match root {
        None => Extent::default(),
        Some(node) => {
            let left = extent(node.left.as_deref());
            let right = extent(node.right.as_deref());
            Extent {
                height: 1 + left.height.max(right.height),
                diameter: (1 + left.height + right.height)
                    .max(left.diameter)
                    .max(right.diameter),
            }
        }
    }
}

/// Post-order transform: every node with **both** children present takes
/// the bitwise AND of its children's values. Leaves and single-child nodes
/// are untouched. Stabilizes after one pass (applying it again is a no-op).
pub fn apply_and_property<K: PrimInt>(root: Option<&mut Node<K>>) {
    let Some(node) = root else { return };
    apply_and_property(node.left.as_deref_mut());
    apply_and_property(node.right.as_deref_mut());
    if let (Some(left), Some(right)) = (node.left.as_deref(), node.right.as_deref()) {
        node.key = left.key & right.key;
    }
}

/// Post-order transform: every internal node adds its left subtree's total
/// to its own value; leaves keep theirs. Returns the total of the subtree
/// (the updated node value plus the right subtree's total).
pub fn apply_left_subtree_sum<K: PrimInt>(root: Option<&mut Node<K>>) -> K {
    let Some(node) = root else { return K::zero() };
    let left_sum = apply_left_subtree_sum(node.left.as_deref_mut());
    let right_sum = apply_left_subtree_sum(node.right.as_deref_mut());
    node.key = node.key + left_sum;
    node.key + right_sum
}
