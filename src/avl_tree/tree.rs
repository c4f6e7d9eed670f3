use crate::avl_tree::node::Node;
use log::trace;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating left at a subtree of height {}", node.height);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("rotating right at a subtree of height {}", node.height);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Restores balance after an insertion. `child_dir` is the direction the new key took at the
// child on the insertion path, which picks between the single and the double rotation.
fn balance_inserted<T>(tree: &mut Tree<T>, child_dir: Ordering) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if child_dir == Ordering::Greater {
            node.left = node.left.take().map(rotate_left);
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if child_dir == Ordering::Less {
            node.right = node.right.take().map(rotate_right);
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// Restores balance after a removal, choosing the rotation from the heavier child's own balance
// factor. Must run on every node of the removal path.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// precondition: there exists a minimum node in the tree
fn remove_min<T>(tree: &mut Tree<T>) -> Box<Node<T>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            let min = remove_min(&mut node.left);
            balance(tree);
            return min;
        }
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            node
        },
        None => unreachable!(),
    }
}

// Returns `None` if the key already exists, `Some(Ordering::Equal)` if the key was placed at the
// root of `tree`, and otherwise the direction the key took at the root of `tree`.
fn insert_directed<T>(tree: &mut Tree<T>, key: T) -> Option<Ordering>
where
    T: Ord,
{
    let (dir, child_dir) = match tree {
        Some(ref mut node) => {
            let dir = key.cmp(&node.key);
            let child_dir = match dir {
                Ordering::Less => insert_directed(&mut node.left, key)?,
                Ordering::Greater => insert_directed(&mut node.right, key)?,
                Ordering::Equal => return None,
            };
            (dir, child_dir)
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return Some(Ordering::Equal);
        },
    };

    balance_inserted(tree, child_dir);
    Some(dir)
}

pub fn insert<T>(tree: &mut Tree<T>, key: T) -> bool
where
    T: Ord,
{
    insert_directed(tree, key).is_some()
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => match (node.left.take(), node.right.take()) {
                (None, right) => {
                    *tree = right;
                    Some(node.key)
                },
                (left, None) => {
                    *tree = left;
                    Some(node.key)
                },
                (left, mut right) => {
                    let successor = remove_min(&mut right);
                    trace!("replacing a node with two children by its in-order successor");
                    node.left = left;
                    node.right = right;
                    let removed = mem::replace(&mut node.key, successor.key);
                    *tree = Some(node);
                    Some(removed)
                },
            },
        },
        None => return None,
    };

    balance(tree);
    ret
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    match tree {
        None => false,
        Some(ref node) => match key.cmp(&node.key) {
            Ordering::Less => contains(&node.left, key),
            Ordering::Greater => contains(&node.right, key),
            Ordering::Equal => true,
        },
    }
}

pub fn ceil<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn floor<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(&node.key) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.key),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.key),
        }
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

/// Asserts ordering, height and balance of every node and returns the number of nodes.
#[cfg(any(test, feature = "consistency_check"))]
pub fn check_consistency<T>(tree: &Tree<T>) -> usize
where
    T: Ord,
{
    fn check<'a, T>(tree: &'a Tree<T>, lower: Option<&'a T>, upper: Option<&'a T>) -> usize
    where
        T: Ord,
    {
        let node = match tree {
            Some(ref node) => node,
            None => return 0,
        };

        if let Some(lower) = lower {
            assert!(*lower < node.key, "key is not greater than all keys to its left");
        }
        if let Some(upper) = upper {
            assert!(node.key < *upper, "key is not less than all keys to its right");
        }

        let left_height = height(&node.left);
        let right_height = height(&node.right);
        assert_eq!(node.height, left_height.max(right_height) + 1, "stale node height");
        assert!(node.balance().abs() <= 1, "balance factor out of range");

        1 + check(&node.left, lower, Some(&node.key)) + check(&node.right, Some(&node.key), upper)
    }

    check(tree, None, None)
}
