use avl_collections::avl_tree::{AvlSet, NodeRef};

// Walks the tree through its read-only view and asserts ordering, heights and balance. Returns
// the number of nodes.
fn check_node<T>(node: NodeRef<'_, T>, lower: Option<&T>, upper: Option<&T>) -> usize
where
    T: Ord,
{
    if let Some(lower) = lower {
        assert!(lower < node.key());
    }
    if let Some(upper) = upper {
        assert!(node.key() < upper);
    }

    let left_height = node.left().map_or(0, |child| child.height());
    let right_height = node.right().map_or(0, |child| child.height());
    assert_eq!(node.height(), left_height.max(right_height) + 1);
    assert!(node.balance().abs() <= 1);

    let left = node.left().map_or(0, |child| check_node(child, lower, Some(node.key())));
    let right = node.right().map_or(0, |child| check_node(child, Some(node.key()), upper));
    1 + left + right
}

pub fn assert_avl<T>(set: &AvlSet<T>)
where
    T: Ord,
{
    let count = set.root().map_or(0, |root| check_node(root, None, None));
    assert_eq!(count, set.len());
    assert_eq!(set.height(), set.root().map_or(0, |root| root.height()));
}
