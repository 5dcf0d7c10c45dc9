use std::{error, fmt};

/// RbError enumerates over all possible errors that this package
/// shall return.
#[derive(Debug, PartialEq)]
pub enum RbError<K>
where
    K: Clone + Ord,
{
    /// Fatal case, root node is colored red.
    RedRoot,
    /// Fatal case, a red node has a red child.
    ConsecutiveReds,
    /// Fatal case, black-height differs between two paths. The String
    /// component of this variant can be used for debugging.
    UnbalancedBlacks(String),
    /// Fatal case, index entries are not in sort-order. Carries the
    /// two offending keys as they appear in in-order traversal.
    SortError(K, K),
    /// Fatal case, a child does not point back to its parent. The String
    /// component of this variant can be used for debugging.
    BrokenParent(String),
    /// Fatal case, number of reachable nodes does not match the count
    /// of nodes held by the tree, as (reachable, held).
    CountMismatch(usize, usize),
    /// Rotation requested on a node that lacks the child it pivots on.
    MissingChild(&'static str),
    /// Node-id does not belong to this tree.
    InvalidNode(usize),
}

impl<K> fmt::Display for RbError<K>
where
    K: Clone + Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RbError::RedRoot => write!(f, "root node is red"),
            RbError::ConsecutiveReds => write!(f, "consecutive red nodes"),
            RbError::UnbalancedBlacks(msg) => write!(f, "unbalanced blacks, {}", msg),
            RbError::SortError(a, b) => write!(f, "sort error, {:?} after {:?}", b, a),
            RbError::BrokenParent(msg) => write!(f, "broken parent link, {}", msg),
            RbError::CountMismatch(n, m) => {
                write!(f, "count mismatch, reachable:{} held:{}", n, m)
            }
            RbError::MissingChild(side) => write!(f, "rotation without {} child", side),
            RbError::InvalidNode(id) => write!(f, "invalid node-id {}", id),
        }
    }
}

impl<K> error::Error for RbError<K> where K: Clone + Ord + fmt::Debug {}
