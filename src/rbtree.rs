use std::{
    borrow::Borrow,
    cmp::{Ord, Ordering},
    iter::FromIterator,
    mem,
    ops::{Bound, RangeBounds},
};

use log::{debug, trace};
use rand::Rng;

use crate::depth::Depth;
use crate::error::RbError;

/// Handle to a node held by an [`RbTree`]. Handles stay valid for the
/// life of the tree, nodes are never removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Return the arena offset of this node.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    // Keys strictly less than the node go left, equal keys go right.
    #[inline]
    fn descend<K: Ord>(key: &K, node_key: &K) -> Side {
        if key.lt(node_key) {
            Side::Left
        } else {
            Side::Right
        }
    }

    #[inline]
    fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// RbTree manage a single instance of in-memory index using
/// [red-black][rbtree] tree. Duplicate keys are allowed, a later entry
/// always sorts after the entries already present with the same key.
///
/// Nodes are held in an arena and link to each other by [`NodeId`],
/// including a back-link to their parent. There is no delete operation.
///
/// [rbtree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct RbTree<K, V>
where
    K: Clone + Ord,
{
    name: String,
    nodes: Vec<Node<K, V>>,
    root: Option<NodeId>,
}

/// Different ways to construct a new RbTree instance.
impl<K, V> RbTree<K, V>
where
    K: Clone + Ord,
{
    /// Create an empty instance of RbTree, identified by `name`.
    /// Applications can choose unique names.
    pub fn new<S>(name: S) -> RbTree<K, V>
    where
        S: AsRef<str>,
    {
        RbTree {
            name: name.as_ref().to_string(),
            nodes: Default::default(),
            root: Default::default(),
        }
    }

    /// Create a new instance of RbTree tree and load it with entries
    /// from `iter`, in iteration order.
    pub fn load_from<S, I>(name: S, iter: I) -> RbTree<K, V>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut index = RbTree::new(name);
        index.extend(iter);
        debug!("load {} entries into {:?}", index.len(), index.name);
        index
    }
}

/// Maintenance API.
impl<K, V> RbTree<K, V>
where
    K: Clone + Ord,
{
    /// Identify this instance. Applications can choose unique names while
    /// creating RbTree instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return the current root. Rotations can change it, do not cache.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Return the node for `id`, `None` if the id is not from this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.nodes.get(id.0)
    }

    /// Return mutable reference to the value held by `id`.
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.nodes.get_mut(id.0).map(|node| &mut node.value)
    }

    /// Return the number of edges on the longest path from root.
    pub fn height(&self) -> Option<usize> {
        self.root.map(|root| self.height_of(root))
    }

    /// Return quickly with basic statisics, only entries() method is valid
    /// with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.len(), mem::size_of::<Node<K, V>>())
    }
}

/// Write operations on RbTree instance.
impl<K, V> RbTree<K, V>
where
    K: Clone + Ord,
{
    /// Insert a new {key, value} entry in the index and return the root,
    /// which may have changed due to rebalancing.
    pub fn insert(&mut self, key: K, value: V) -> NodeId {
        let root = self.do_insert(self.root, key, value);
        self.root = Some(root);
        root
    }

    /// Rotate the sub-tree under `x` to the left, `x` becomes the left
    /// child of its current right child. Colors are left untouched, so
    /// the caller is responsible for the red-black rules. Return the
    /// root of the tree after rotation.
    ///
    /// Fail with [`RbError::MissingChild`] if `x` has no right child.
    pub fn rotate_left(&mut self, x: NodeId) -> Result<NodeId, RbError<K>> {
        self.rotate_at(x, Side::Left)
    }

    /// Rotate the sub-tree under `x` to the right, `x` becomes the right
    /// child of its current left child. Refer to [`RbTree::rotate_left`].
    ///
    /// Fail with [`RbError::MissingChild`] if `x` has no left child.
    pub fn rotate_right(&mut self, x: NodeId) -> Result<NodeId, RbError<K>> {
        self.rotate_at(x, Side::Right)
    }

    /// Validate the tree with following rules:
    ///
    /// * Root is black.
    /// * Every child links back to its parent.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Keys are in non-decreasing order.
    /// * Every node in the arena is reachable from root.
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats, RbError<K>> {
        let mut stats = Stats::new(self.len(), mem::size_of::<Node<K, V>>());
        stats.set_depths(Depth::new());

        let root = match self.root {
            Some(root) => root,
            None if self.nodes.is_empty() => {
                stats.set_blacks(0);
                return Ok(stats);
            }
            None => return Err(RbError::CountMismatch(0, self.nodes.len())),
        };
        if self.n(root).is_red() {
            return Err(RbError::RedRoot);
        }
        if let Some(parent) = self.n(root).parent {
            let err = format!("root {} points to {}", root.0, parent.0);
            return Err(RbError::BrokenParent(err));
        }

        let (count, blacks) = self.validate_tree(root, &mut stats)?;

        let mut prev: Option<&K> = None;
        for (key, _) in self.iter() {
            match prev {
                Some(prev) if key.lt(prev) => {
                    return Err(RbError::SortError(prev.clone(), key.clone()));
                }
                _ => prev = Some(key),
            }
        }
        if count != self.nodes.len() {
            return Err(RbError::CountMismatch(count, self.nodes.len()));
        }

        stats.set_blacks(blacks);
        debug!("validated {:?} entries:{} blacks:{}", self.name, count, blacks);
        Ok(stats)
    }
}

/// Read operations on RbTree instance.
impl<K, V> RbTree<K, V>
where
    K: Clone + Ord,
{
    /// Return the first node, along the search path, matching `key`.
    pub fn search<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root;
        while let Some(id) = node {
            let nref = self.n(id);
            node = match nref.key.borrow().cmp(key) {
                Ordering::Less => nref.right,
                Ordering::Greater => nref.left,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Get the value for key. With duplicates, any one of the matching
    /// entries is returned.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).map(|id| &self.n(id).value)
    }

    /// Check whether key is present in the index.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Return the node with smallest key, earliest inserted on ties.
    pub fn minimum(&self) -> Option<NodeId> {
        self.root.map(|root| self.extreme(root, Side::Left))
    }

    /// Return the node with largest key, latest inserted on ties.
    pub fn maximum(&self) -> Option<NodeId> {
        self.root.map(|root| self.extreme(root, Side::Right))
    }

    /// Return the smallest entry.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.minimum().map(|id| self.n(id).entry())
    }

    /// Return the largest entry.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.maximum().map(|id| self.n(id).entry())
    }

    /// Return the in-order successor of `id`.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?;
        self.step(id, Side::Right)
    }

    /// Return the in-order predecessor of `id`.
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?;
        self.step(id, Side::Left)
    }

    /// Return a random entry from this index.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<(&K, &V)> {
        let mut id = self.root?;

        let mut at_depth = rng.gen::<u8>() % 40;
        loop {
            let next = match rng.gen::<bool>() {
                true => self.n(id).left,
                false => self.n(id).right,
            };
            match next {
                Some(next) if at_depth > 0 => {
                    at_depth -= 1;
                    id = next;
                }
                _ => break Some(self.n(id).entry()),
            }
        }
    }

    /// Return an iterator over all entries in this instance, in sort
    /// order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            index: self,
            cursor: self.minimum(),
        }
    }

    /// Return an iterator over all keys, in sort order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Return an iterator over all values, in key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Range over all entries from low to high.
    pub fn range<Q, R>(&self, range: R) -> Range<'_, K, V>
    where
        K: Borrow<Q>,
        R: RangeBounds<Q>,
        Q: Ord + ToOwned<Owned = K> + ?Sized,
    {
        let low: Bound<K> = match range.start_bound() {
            Bound::Included(key) => Bound::Included(key.to_owned()),
            Bound::Excluded(key) => Bound::Excluded(key.to_owned()),
            Bound::Unbounded => Bound::Unbounded,
        };
        let high: Bound<K> = match range.end_bound() {
            Bound::Included(key) => Bound::Included(key.to_owned()),
            Bound::Excluded(key) => Bound::Excluded(key.to_owned()),
            Bound::Unbounded => Bound::Unbounded,
        };

        Range {
            index: self,
            cursor: self.lower_bound(&low),
            high,
            low,
        }
    }
}

impl<K, V> RbTree<K, V>
where
    K: Clone + Ord,
{
    #[inline]
    fn n(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.0]
    }

    #[inline]
    fn n_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.0]
    }

    #[inline]
    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.n(id).left,
            Side::Right => self.n(id).right,
        }
    }

    #[inline]
    fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.n_mut(id).left = child,
            Side::Right => self.n_mut(id).right = child,
        }
    }

    // which side of `parent` is `child` hanging from.
    #[inline]
    fn side_of(&self, child: NodeId, parent: NodeId) -> Side {
        if self.n(parent).left == Some(child) {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(next) = self.child(id, side) {
            id = next
        }
        id
    }

    // in-order neighbour of `id`, successor for Side::Right.
    fn step(&self, id: NodeId, side: Side) -> Option<NodeId> {
        if let Some(child) = self.child(id, side) {
            return Some(self.extreme(child, side.flip()));
        }
        let mut node = id;
        while let Some(parent) = self.n(node).parent {
            if self.child(parent, side) != Some(node) {
                return Some(parent);
            }
            node = parent;
        }
        None
    }

    // first node, in sort order, that is not below `low`.
    fn lower_bound(&self, low: &Bound<K>) -> Option<NodeId> {
        let (mut node, mut found) = (self.root, None);
        while let Some(id) = node {
            let key = &self.n(id).key;
            let ok = match low {
                Bound::Included(qow) => key.ge(qow),
                Bound::Excluded(qow) => key.gt(qow),
                Bound::Unbounded => true,
            };
            node = if ok {
                found = Some(id);
                self.n(id).left
            } else {
                self.n(id).right
            };
        }
        found
    }

    // last node, in sort order, that is not above `high`.
    fn upper_bound(&self, high: &Bound<K>) -> Option<NodeId> {
        let (mut node, mut found) = (self.root, None);
        while let Some(id) = node {
            let key = &self.n(id).key;
            let ok = match high {
                Bound::Included(qigh) => key.le(qigh),
                Bound::Excluded(qigh) => key.lt(qigh),
                Bound::Unbounded => true,
            };
            node = if ok {
                found = Some(id);
                self.n(id).right
            } else {
                self.n(id).left
            };
        }
        found
    }

    // explicit stack, caller rotations can leave a chain as deep as len.
    fn height_of(&self, root: NodeId) -> usize {
        let (mut stack, mut height) = (vec![(root, 0_usize)], 0);
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.n(id);
            for child in node.left.iter().chain(node.right.iter()) {
                stack.push((*child, depth + 1));
            }
        }
        height
    }

    fn do_insert(&mut self, root: Option<NodeId>, key: K, value: V) -> NodeId {
        let id = NodeId(self.nodes.len());
        let root = match root {
            None => {
                self.nodes.push(Node::new(key, value, true /*black*/, None));
                return id;
            }
            Some(root) => root,
        };

        let mut parent = root;
        let side = loop {
            let side = Side::descend(&key, &self.n(parent).key);
            match self.child(parent, side) {
                Some(next) => parent = next,
                None => break side,
            }
        };

        self.nodes.push(Node::new(key, value, false /*red*/, Some(parent)));
        self.set_child(parent, side, Some(id));

        if self.n(parent).is_black() {
            root
        } else {
            self.repair(root, id)
        }
    }

    // restore red-black rules after `node` is painted red, return the
    // new root.
    fn repair(&mut self, mut root: NodeId, mut node: NodeId) -> NodeId {
        loop {
            let parent = match self.n(node).parent {
                None => {
                    trace!("repair: root {}, paint black", node.0);
                    self.n_mut(node).set_black();
                    return node;
                }
                Some(parent) => parent,
            };
            if self.n(node).is_black() || self.n(parent).is_black() {
                return root;
            }
            let grand = match self.n(parent).parent {
                Some(grand) => grand,
                None => {
                    // red root, left behind by a caller rotation.
                    self.n_mut(parent).set_black();
                    return root;
                }
            };

            let pside = self.side_of(parent, grand);
            let uncle = self.child(grand, pside.flip());

            //            (b)                   (r)
            //            gp                    gp
            //           /  \                  /  \
            //         (r)  (r)     ==>      (b)  (b)
            //         p    uncle            p    uncle
            //        /                     /
            //      (r)                   (r)
            //      node                  node
            if let Some(uncle) = uncle.filter(|u| self.n(*u).is_red()) {
                trace!("repair: red uncle {}, push red up to {}", uncle.0, grand.0);
                self.n_mut(parent).set_black();
                self.n_mut(uncle).set_black();
                self.n_mut(grand).set_red();
                node = grand;
                continue;
            }

            let nside = self.side_of(node, parent);
            if nside != pside {
                // zig-zag, straighten it and continue with old parent.
                trace!("repair: zig-zag at {}, rotate {}", node.0, pside.as_str());
                root = self.must_rotate(root, parent, pside);
                node = parent;
                continue;
            }

            //            (b)                   (b)
            //            gp                     p
            //           /  \                   / \
            //         (r)  (b)     ==>      (r)   (r)
            //         p    uncle            node   gp
            //        /                              \
            //      (r)                              (b)
            //      node                            uncle
            trace!("repair: line at {}, rotate {}", grand.0, pside.flip().as_str());
            root = self.must_rotate(root, grand, pside.flip());
            self.n_mut(parent).set_black();
            self.n_mut(grand).set_red();
            return root;
        }
    }

    fn must_rotate(&mut self, root: NodeId, x: NodeId, side: Side) -> NodeId {
        match self.rotate(root, x, side) {
            Ok(root) => root,
            Err(_) => panic!(
                "repair(): rotate {} without pivot child ? Call the programmer",
                side.as_str()
            ),
        }
    }

    fn rotate_at(&mut self, x: NodeId, side: Side) -> Result<NodeId, RbError<K>> {
        let root = match (self.node(x), self.root) {
            (Some(_), Some(root)) => root,
            _ => return Err(RbError::InvalidNode(x.0)),
        };
        let root = self.rotate(root, x, side)?;
        self.root = Some(root);
        Ok(root)
    }

    // rotate `x` towards `side`, return the root of the whole tree.
    //
    //  rotate left:     (i)                       (i)
    //                    |                         |
    //                    x                         y
    //                   / \                       / \
    //                  /   \                     /   \
    //                 /     \                   /     \
    //               xl       y                 x       yr
    //                       / \               / \
    //                     yl   yr           xl   yl
    //
    fn rotate(&mut self, root: NodeId, x: NodeId, side: Side) -> Result<NodeId, RbError<K>> {
        let from = side.flip();
        let y = match self.child(x, from) {
            Some(y) => y,
            None => return Err(RbError::MissingChild(from.as_str())),
        };

        let inner = self.child(y, side);
        self.set_child(x, from, inner);
        if let Some(inner) = inner {
            self.n_mut(inner).parent = Some(x);
        }

        let parent = self.n(x).parent;
        self.n_mut(y).parent = parent;
        let root = match parent {
            None => y,
            Some(parent) => {
                let pside = self.side_of(x, parent);
                self.set_child(parent, pside, Some(y));
                root
            }
        };

        self.set_child(y, side, Some(x));
        self.n_mut(x).parent = Some(y);
        trace!("rotate {} at {}, {} moves up", side.as_str(), x.0, y.0);
        Ok(root)
    }

    // walk from root with an explicit stack of
    // (node, depth, blacks-above, parent-is-red), return the number of
    // nodes visited and the black count shared by every boundary.
    fn validate_tree(&self, root: NodeId, stats: &mut Stats) -> Result<(usize, usize), RbError<K>> {
        let (mut count, mut blacks) = (0, None);
        let mut stack = vec![(root, 0_usize, 0_usize, false)];
        while let Some((id, depth, mut nb, fromred)) = stack.pop() {
            count += 1;
            if count > self.nodes.len() {
                return Err(RbError::CountMismatch(count, self.nodes.len()));
            }

            let red = self.n(id).is_red();
            if fromred && red {
                return Err(RbError::ConsecutiveReds);
            }
            if !red {
                nb += 1;
            }
            for side in [Side::Left, Side::Right].iter() {
                match self.child(id, *side) {
                    Some(child) if self.n(child).parent != Some(id) => {
                        let err = format!("node {} is a child of {}", child.0, id.0);
                        return Err(RbError::BrokenParent(err));
                    }
                    Some(child) => stack.push((child, depth + 1, nb, red)),
                    None => {
                        stats.sample_depth(depth + 1);
                        match blacks {
                            None => blacks = Some(nb),
                            Some(expected) if expected != nb => {
                                let err = format!(
                                    "node: {} {}: {} expected: {}",
                                    id.0,
                                    side.as_str(),
                                    nb,
                                    expected
                                );
                                return Err(RbError::UnbalancedBlacks(err));
                            }
                            Some(_) => (),
                        }
                    }
                }
            }
        }
        Ok((count, blacks.unwrap_or(0)))
    }
}

impl<K, V> Extend<(K, V)> for RbTree<K, V>
where
    K: Clone + Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for RbTree<K, V>
where
    K: Clone + Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        RbTree::load_from("", iter)
    }
}

/// In-order iterator over [`RbTree`], walks successor links lazily.
pub struct Iter<'a, K, V>
where
    K: Clone + Ord,
{
    index: &'a RbTree<K, V>,
    cursor: Option<NodeId>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Clone + Ord,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.index.step(id, Side::Right);
        Some(self.index.n(id).entry())
    }
}

/// Iterator over a window of [`RbTree`], refer to [`RbTree::range`].
pub struct Range<'a, K, V>
where
    K: Clone + Ord,
{
    index: &'a RbTree<K, V>,
    cursor: Option<NodeId>,
    low: Bound<K>,
    high: Bound<K>,
}

impl<'a, K, V> Range<'a, K, V>
where
    K: Clone + Ord,
{
    /// Walk the same window from high to low.
    pub fn rev(self) -> Reverse<'a, K, V> {
        Reverse {
            index: self.index,
            cursor: self.index.upper_bound(&self.high),
            low: self.low,
        }
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V>
where
    K: Clone + Ord,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.index.n(id);
        let ok = match &self.high {
            Bound::Unbounded => true,
            Bound::Included(qigh) => node.key.le(qigh),
            Bound::Excluded(qigh) => node.key.lt(qigh),
        };
        if ok {
            self.cursor = self.index.step(id, Side::Right);
            Some(node.entry())
        } else {
            self.cursor = None;
            None
        }
    }
}

/// Reverse iterator over a window of [`RbTree`].
pub struct Reverse<'a, K, V>
where
    K: Clone + Ord,
{
    index: &'a RbTree<K, V>,
    cursor: Option<NodeId>,
    low: Bound<K>,
}

impl<'a, K, V> Iterator for Reverse<'a, K, V>
where
    K: Clone + Ord,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let node = self.index.n(id);
        let ok = match &self.low {
            Bound::Unbounded => true,
            Bound::Included(qow) => node.key.ge(qow),
            Bound::Excluded(qow) => node.key.gt(qow),
        };
        if ok {
            self.cursor = self.index.step(id, Side::Left);
            Some(node.entry())
        } else {
            self.cursor = None;
            None
        }
    }
}

/// Node corresponds to a single entry in RbTree instance.
#[derive(Clone)]
pub struct Node<K, V>
where
    K: Clone + Ord,
{
    key: K,
    value: V,
    black: bool,              // store: black or red
    left: Option<NodeId>,     // store: left child
    right: Option<NodeId>,    // store: right child
    parent: Option<NodeId>,   // lookup only, never owns
}

// Primary operations on a single node.
impl<K, V> Node<K, V>
where
    K: Clone + Ord,
{
    // CREATE operation
    fn new(key: K, value: V, black: bool, parent: Option<NodeId>) -> Node<K, V> {
        Node {
            key,
            value,
            black,
            left: None,
            right: None,
            parent,
        }
    }

    #[inline]
    fn entry(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    #[inline]
    fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    fn set_black(&mut self) {
        self.black = true
    }

    /// Return the key for this entry.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Return the value for this entry.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Return true if this node is painted black.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.black
    }

    /// Return true if this node is painted red.
    #[inline]
    pub fn is_red(&self) -> bool {
        !self.black
    }

    /// Return the left child, if any.
    #[inline]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Return the right child, if any.
    #[inline]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Return the parent, `None` for root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Statistics on [`RbTree`]. Serves two purpose:
///
/// * To get partial but quick statistics via [`RbTree::stats`] method.
/// * To get full statisics via [`RbTree::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    #[inline]
    fn sample_depth(&mut self, depth: usize) {
        if let Some(depths) = self.depths.as_mut() {
            depths.sample(depth)
        }
    }

    /// Return number entries in [`RbTree`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including link and color overhead. The size
    /// varies with key and value types. EG:
    ///
    /// ```
    /// use rb_index::RbTree;
    /// let mut index: RbTree<u64, u64> = RbTree::new("myinstance");
    /// index.insert(10, 100);
    ///
    /// let stats = index.validate().unwrap();
    /// assert_eq!(stats.entries(), 1);
    /// assert_eq!(stats.blacks(), Some(1));
    /// assert!(stats.node_size() > 16);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes from root to any leaf, root included.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics.
    pub fn depths(&self) -> Option<Depth> {
        self.depths.as_ref().filter(|d| d.samples() > 0).cloned()
    }
}
