use crate::avl_tree::node::Node;
use crate::avl_tree::tree;

/// The order in which [`AvlSet::traverse`](super::AvlSet::traverse) visits keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Yields keys in ascending order.
    InOrder,
    /// Left subtree, then right subtree, then node.
    PostOrder,
}

enum Visit<'a, T> {
    Expand(&'a Node<T>),
    Yield(&'a T),
}

/// A lazy iterator over the keys of an `AvlSet<T>` in a chosen `TraversalOrder`.
///
/// Each pending subtree is kept on an explicit stack, so the iterator holds at most a few entries
/// per level of the tree.
pub struct Traversal<'a, T> {
    order: TraversalOrder,
    stack: Vec<Visit<'a, T>>,
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(root: &'a tree::Tree<T>, order: TraversalOrder) -> Self {
        let mut stack = Vec::new();
        if let Some(ref node) = root {
            stack.push(Visit::Expand(&**node));
        }
        Traversal { order, stack }
    }

    fn push_subtree(&mut self, subtree: &'a tree::Tree<T>) {
        if let Some(ref node) = subtree {
            self.stack.push(Visit::Expand(&**node));
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(visit) = self.stack.pop() {
            let node = match visit {
                Visit::Yield(key) => return Some(key),
                Visit::Expand(node) => node,
            };

            // pushed in reverse of the visiting order
            match self.order {
                TraversalOrder::PreOrder => {
                    self.push_subtree(&node.right);
                    self.push_subtree(&node.left);
                    return Some(&node.key);
                },
                TraversalOrder::InOrder => {
                    self.push_subtree(&node.right);
                    self.stack.push(Visit::Yield(&node.key));
                    self.push_subtree(&node.left);
                },
                TraversalOrder::PostOrder => {
                    self.stack.push(Visit::Yield(&node.key));
                    self.push_subtree(&node.right);
                    self.push_subtree(&node.left);
                },
            }
        }
        None
    }
}
