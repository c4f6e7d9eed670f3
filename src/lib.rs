//! An ordered set backed by an AVL tree.
//!
//! The set keeps the heights of the two subtrees of every node within one of each other by
//! retracing the path to the root after every insertion and removal, rotating wherever a node
//! has become unbalanced. Lookups, insertions and removals are therefore `O(log n)`.
//!
//! Besides the ordered-set operations, the tree exposes its shape read-only through
//! [`AvlSet::root`](avl_tree::AvlSet::root) and [`AvlSet::layout`](avl_tree::AvlSet::layout) so
//! that a separate renderer can draw it.
//!
//! Rotations are logged at `trace` level through the `log` facade.

pub mod avl_tree;
