//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod layout;
mod node;
mod serialize;
mod set;
mod traverse;
mod tree;

pub use self::layout::{NodeRef, Placement};
pub use self::set::{AvlSet, AvlSetIntoIter};
pub use self::traverse::{Traversal, TraversalOrder};
