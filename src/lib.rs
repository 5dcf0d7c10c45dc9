mod depth;
mod empty;
mod error;
mod rbtree;

pub use crate::depth::Depth;
pub use crate::empty::{Empty, RbSet};
pub use crate::error::RbError;
pub use crate::rbtree::{Iter, Node, NodeId, Range, RbTree, Reverse, Stats};

#[cfg(test)]
mod depth_test;
