use core::fmt::Debug;
use granite::{Storage, DefaultStorage};
use crate::AddSubNodeError;
use super::{node, KaryTree, Node, NodeRef};

/// A *mutable* reference to a node in a k-ary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree and to grow it.
#[derive(Debug)]
pub struct NodeRefMut<'a, T, const N: usize = 2, K = usize, S = DefaultStorage<Node<T, K, N>>>
where
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a mut KaryTree<T, N, K, S>,
    key: K,
}
impl<'a, T, const N: usize, K, S> NodeRefMut<'a, T, N, K, S>
where
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage, or `None` if it's out of bounds.
    #[inline]
    pub fn new_raw(tree: &'a mut KaryTree<T, N, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(Self::new_trusted(tree, key))
        } else {
            None
        }
    }
    #[inline(always)]
    pub(super) fn new_trusted(tree: &'a mut KaryTree<T, N, K, S>, key: K) -> Self {
        Self { tree, key }
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
    pub fn value(&self) -> &T {
        &self.tree.node_data(&self.key).value
    }
    /// Returns a *mutable* reference to the value stored in the node.
    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.tree.node_data_mut(&self.key).value
    }
    /// Consumes the reference and returns a *mutable* reference to the value which lives as long as the borrow of the tree.
    #[inline]
    pub fn into_value_mut(self) -> &'a mut T {
        let Self { tree, key } = self;
        &mut tree.node_data_mut(&key).value
    }
    /// Adds a leaf node with the specified value into the first empty child slot, returning its key.
    ///
    /// # Errors
    /// Will fail if all `N` child slots are occupied, returning the value back.
    #[inline]
    pub fn add_child(&mut self, value: T) -> Result<K, AddSubNodeError<T>> {
        self.tree.attach(&self.key, value)
    }
    /// Returns a *mutable* reference to the child in slot `n`, or `None` if that slot is empty.
    ///
    /// # Panics
    /// Will panic if `n` is not less than `N`.
    #[track_caller]
    pub fn nth_child_mut(&mut self, n: usize) -> Option<NodeRefMut<'_, T, N, K, S>> {
        let child = self.child_key(n)?;
        Some(NodeRefMut::new_trusted(self.tree, child))
    }
    /// Consumes the reference and returns a *mutable* reference to the child in slot `n`, or `None` if that slot is empty.
    ///
    /// # Panics
    /// Will panic if `n` is not less than `N`.
    #[track_caller]
    pub fn into_nth_child(self, n: usize) -> Option<Self> {
        let child = self.child_key(n)?;
        Some(Self::new_trusted(self.tree, child))
    }

    #[track_caller]
    fn child_key(&self, n: usize) -> Option<K> {
        node::check_slot::<N>(n);
        self.tree.node_data(&self.key).children[n].clone()
    }
}
impl<'a, T, const N: usize, K, S> From<NodeRefMut<'a, T, N, K, S>> for NodeRef<'a, T, N, K, S>
where
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn from(op: NodeRefMut<'a, T, N, K, S>) -> Self {
        let NodeRefMut { tree, key } = op;
        NodeRef::new_trusted(tree, key)
    }
}
