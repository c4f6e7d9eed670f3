use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use serde_derive::Serialize;

/// A read-only view of a node in an `AvlSet<T>`, for callers that lay out or draw the tree.
pub struct NodeRef<'a, T> {
    node: &'a Node<T>,
}

// Manual impls: deriving would require `T: Clone`.
impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(node: &'a Node<T>) -> Self {
        NodeRef { node }
    }

    /// Returns the key stored in this node.
    pub fn key(&self) -> &'a T {
        &self.node.key
    }

    /// Returns the height of the subtree rooted at this node. A leaf has height one.
    pub fn height(&self) -> usize {
        self.node.height
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance(&self) -> i32 {
        self.node.balance()
    }

    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.node.left.as_ref().map(|node| NodeRef::new(node))
    }

    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.node.right.as_ref().map(|node| NodeRef::new(node))
    }
}

/// The diagram position of one node, as produced by `AvlSet::layout`.
#[derive(Debug, PartialEq, Serialize)]
pub struct Placement<'a, T> {
    pub key: &'a T,
    pub x: f64,
    pub y: f64,
    pub depth: usize,
    pub left: Option<&'a T>,
    pub right: Option<&'a T>,
}

pub fn layout<T>(root: &tree::Tree<T>, spacing: f64) -> Vec<Placement<'_, T>> {
    fn place<'a, T>(
        tree: &'a tree::Tree<T>,
        x: f64,
        depth: usize,
        spacing: f64,
        out: &mut Vec<Placement<'a, T>>,
    ) {
        if let Some(ref node) = tree {
            out.push(Placement {
                key: &node.key,
                x,
                y: -(depth as f64),
                depth,
                left: node.left.as_ref().map(|child| &child.key),
                right: node.right.as_ref().map(|child| &child.key),
            });
            place(&node.left, x - spacing, depth + 1, spacing / 2.0, out);
            place(&node.right, x + spacing, depth + 1, spacing / 2.0, out);
        }
    }

    let mut placements = Vec::new();
    place(root, 0.0, 0, spacing, &mut placements);
    placements
}
