use crate::avl_tree::layout::{self, NodeRef, Placement};
use crate::avl_tree::node::Node;
use crate::avl_tree::traverse::{Traversal, TraversalOrder};
use crate::avl_tree::tree;
use std::fmt;
use std::iter::FromIterator;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Every insertion and removal
/// retraces the path back to the root, recomputing heights and rotating wherever a node has
/// become unbalanced, so the height of the tree stays within about `1.44 * log2(n + 2)`.
///
/// # Examples
///
/// ```
/// use avl_collections::avl_tree::{AvlSet, TraversalOrder};
///
/// let mut set = AvlSet::new();
/// set.insert(10);
/// set.insert(20);
/// set.insert(30);
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.root().map(|node| *node.key()), Some(20));
///
/// assert!(set.contains(&10));
/// assert_eq!(set.ceil(&15), Some(&20));
///
/// assert_eq!(set.remove(&10), Some(10));
/// assert_eq!(set.remove(&10), None);
///
/// let keys: Vec<&u32> = set.traverse(TraversalOrder::PostOrder).collect();
/// assert_eq!(keys, vec![&30, &20]);
/// ```
pub struct AvlSet<T> {
    root: tree::Tree<T>,
    len: usize,
}

impl<T> AvlSet<T> {
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet {
            root: None,
            len: 0,
        }
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the set, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert!(set.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns the height of the tree: zero when empty, one for a single key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), 0);
    /// set.extend(0..7);
    /// assert_eq!(set.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.root)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.root)
    }

    /// Returns a lazy iterator over the keys in the given order. Each call starts a fresh
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::{AvlSet, TraversalOrder};
    ///
    /// let set: AvlSet<u32> = vec![2, 1, 3].into_iter().collect();
    ///
    /// let pre: Vec<&u32> = set.traverse(TraversalOrder::PreOrder).collect();
    /// let post: Vec<&u32> = set.traverse(TraversalOrder::PostOrder).collect();
    /// assert_eq!(pre, vec![&2, &1, &3]);
    /// assert_eq!(post, vec![&1, &3, &2]);
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, T> {
        Traversal::new(&self.root, order)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Traversal<'_, T> {
        self.traverse(TraversalOrder::InOrder)
    }

    /// Returns a read-only view of the root node, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![10, 20, 30].into_iter().collect();
    /// let root = set.root().unwrap();
    ///
    /// assert_eq!(root.key(), &20);
    /// assert_eq!(root.left().map(|node| *node.key()), Some(10));
    /// assert_eq!(root.right().map(|node| *node.key()), Some(30));
    /// ```
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.as_ref().map(|node| NodeRef::new(node))
    }

    /// Assigns diagram coordinates to every node, in pre-order. The root sits at `(0, 0)`, each
    /// level is one unit lower than its parent, and children are offset horizontally by
    /// `spacing` at the first level, halving at every level below.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = vec![10, 20, 30].into_iter().collect();
    /// let placements = set.layout(4.0);
    ///
    /// assert_eq!(placements[0].key, &20);
    /// assert_eq!((placements[1].x, placements[1].y), (-4.0, -1.0));
    /// assert_eq!((placements[2].x, placements[2].y), (4.0, -1.0));
    /// ```
    pub fn layout(&self, spacing: f64) -> Vec<Placement<'_, T>> {
        layout::layout(&self.root, spacing)
    }
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Inserts a key into the set. Returns `true` if the key was inserted and `false` if it was
    /// already present, in which case the set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.root, key);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the set. If the key exists in the set, it will return the removed key.
    /// Otherwise it will return `None` and leave the set unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let ret = tree::remove(&mut self.root, key);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(!set.contains(&1));
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.root, key)
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        tree::floor(&self.root, key)
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        tree::ceil(&self.root, key)
    }

    /// Panics if the tree is out of order, holds a stale height, has a node whose subtree heights
    /// differ by more than one, or disagrees with `len`.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        assert_eq!(tree::check_consistency(&self.root), self.len, "stale length");
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = AvlSetIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        AvlSetIntoIter {
            current: self.root,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlSet<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlSet<T>`.
///
/// This iterator traverses the keys of the set in-order and yields owned keys.
pub struct AvlSetIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for AvlSet<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        AvlSet {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T> PartialEq for AvlSet<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for AvlSet<T> where T: Eq {}

impl<T> fmt::Debug for AvlSet<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = AvlSet::new();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}
