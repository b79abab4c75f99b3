use core::{array, fmt::Debug};
use arrayvec::ArrayVec;
use granite::{Storage, DefaultStorage};
use super::{node, KaryTree, Node};

/// A reference to a node in a k-ary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree.
#[derive(Debug)]
pub struct NodeRef<'a, T, const N: usize = 2, K = usize, S = DefaultStorage<Node<T, K, N>>>
where
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a KaryTree<T, N, K, S>,
    key: K,
}
impl<'a, T, const N: usize, K, S> NodeRef<'a, T, N, K, S>
where
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's out of bounds.
    #[inline]
    pub fn new_raw(tree: &'a KaryTree<T, N, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(Self::new_trusted(tree, key))
        } else {
            None
        }
    }
    #[inline(always)]
    pub(super) fn new_trusted(tree: &'a KaryTree<T, N, K, S>, key: K) -> Self {
        Self { tree, key }
    }
    /// Returns the tree the node belongs to.
    #[inline(always)]
    pub fn tree(&self) -> &'a KaryTree<T, N, K, S> {
        self.tree
    }
    /// Returns a reference the raw storage key for the node.
    #[inline(always)]
    pub fn raw_key(&self) -> &K {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    pub fn into_raw_key(self) -> K {
        self.key
    }
    /// Returns a reference to the value stored in the node.
    #[inline]
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.node()
            .parent
            .clone()
            .map(|parent| Self::new_trusted(self.tree, parent))
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. none of its child slots are occupied; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node().children.iter().all(Option::is_none)
    }
    /// Returns the number of occupied child slots.
    #[inline]
    pub fn num_children(&self) -> usize {
        self.node().children.iter().filter(|x| x.is_some()).count()
    }
    /// Returns the index of the child slot the node occupies in its parent, or `None` if it's the root node.
    pub fn child_index(&self) -> Option<usize> {
        let parent = self.parent()?;
        parent
            .node()
            .children
            .iter()
            .position(|child| child.as_ref() == Some(&self.key))
    }
    /// Returns a reference to the child in slot `n`, or `None` if that slot is empty.
    ///
    /// # Panics
    /// Will panic if `n` is not less than `N`.
    #[track_caller]
    pub fn nth_child(&self, n: usize) -> Option<Self> {
        node::check_slot::<N>(n);
        self.node().children[n]
            .clone()
            .map(|child| Self::new_trusted(self.tree, child))
    }
    /// Returns references to the children in every child slot, with `None` for empty slots.
    #[inline]
    pub fn children(&self) -> [Option<Self>; N] {
        let children = &self.node().children;
        array::from_fn(|n| {
            children[n]
                .clone()
                .map(|child| Self::new_trusted(self.tree, child))
        })
    }
    /// Returns references to the children in occupied child slots, in ascending slot order.
    pub fn occupied_children(&self) -> ArrayVec<Self, N> {
        self.node()
            .children
            .iter()
            .flatten()
            .map(|child| Self::new_trusted(self.tree, child.clone()))
            .collect()
    }

    #[track_caller]
    fn node(&self) -> &'a Node<T, K, N> {
        self.tree.node_data(&self.key)
    }
}
impl<T, const N: usize, K, S> Copy for NodeRef<'_, T, N, K, S>
where
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Copy + Debug + Eq,
{
}
impl<T, const N: usize, K, S> Clone for NodeRef<'_, T, N, K, S>
where
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            key: self.key.clone(),
        }
    }
}
impl<T, const N: usize, K, S> PartialEq for NodeRef<'_, T, N, K, S>
where
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Two references are equal if they point to the same node of the same tree.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tree, other.tree) && self.key == other.key
    }
}
impl<T, const N: usize, K, S> Eq for NodeRef<'_, T, N, K, S>
where
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Clone + Debug + Eq,
{
}
