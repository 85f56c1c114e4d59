//! Owned node storage for the tree structures in this crate.
//!
//! Every parent exclusively owns its children through [`Box`]ed links, so a
//! whole subtree is dropped when its root goes out of scope. There are no
//! parent pointers and no sharing; operations that may replace a subtree's
//! root therefore consume the old link and return the new one.

use core::fmt;

/// An owned, possibly absent subtree. `None` is the empty tree.
pub type Link<K> = Option<Box<Node<K>>>;

/// A binary tree node holding a single key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub key: K,
    pub left: Link<K>,
    pub right: Link<K>,
}

impl<K> Node<K> {
    /// A node with no children.
    pub fn new(key: K) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }

    /// A node with explicit child links. Mostly useful for building fixed
    /// shapes in tests and builders.
    pub fn with_children(key: K, left: Link<K>, right: Link<K>) -> Self {
        Node { key, left, right }
    }

    /// A freshly boxed leaf, ready to be hung into a [`Link`].
    pub fn boxed(key: K) -> Box<Self> {
        Box::new(Node::new(key))
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<K> fmt::Display for Node<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "key: {}, left: {}, right: {}",
            self.key,
            self.left.is_some(),
            self.right.is_some()
        )
    }
}

/// A general tree node with unbounded fan-out, used by the height
/// computation over non-binary trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaryNode<K> {
    pub key: K,
    pub children: Vec<NaryNode<K>>,
}

impl<K> NaryNode<K> {
    pub fn new(key: K) -> Self {
        NaryNode {
            key,
            children: Vec::new(),
        }
    }

    pub fn with_children(key: K, children: Vec<NaryNode<K>>) -> Self {
        NaryNode { key, children }
    }
}

/// A binary expression-tree node. The value type is generic because the
/// ternary builder stores plain characters while the parenthesized parse
/// tree stores operator/operand symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNode<V> {
    pub value: V,
    pub left: Option<Box<ExprNode<V>>>,
    pub right: Option<Box<ExprNode<V>>>,
}

impl<V> ExprNode<V> {
    pub fn new(value: V) -> Self {
        ExprNode {
            value,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_and_links() {
        let mut node = Node::new(7);
        assert!(node.is_leaf());

        node.left = Some(Node::boxed(3));
        assert!(!node.is_leaf());
        assert_eq!(node.left.as_ref().map(|n| n.key), Some(3));
        assert!(node.right.is_none());
    }

    #[test]
    fn test_subtree_drop() {
        // Rebinding a link drops the whole subtree that used to hang there.
        let mut root = Node::with_children(
            2,
            Some(Box::new(Node::with_children(
                1,
                Some(Node::boxed(0)),
                None,
            ))),
            None,
        );
        root.left = Some(Node::boxed(9));
        assert!(root.left.as_ref().is_some_and(|n| n.is_leaf()));
    }
}
