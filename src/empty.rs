use crate::rbtree::RbTree;

/// Can be used while indexing keys without values, like ``RbTree<K, Empty>``.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Empty;

/// Ordered set of keys, duplicates allowed.
pub type RbSet<K> = RbTree<K, Empty>;

impl<K> RbTree<K, Empty>
where
    K: Clone + Ord,
{
    /// Add `key` to the set, return the root after rebalancing.
    pub fn add(&mut self, key: K) -> crate::NodeId {
        self.insert(key, Empty)
    }
}
