use core::fmt::{self, Formatter, Debug, Display};
use alloc::vec::Vec;
use granite::{Storage, DefaultStorage};
use log::{debug, trace, warn};
use crate::{
    traversal::{algorithms, BreadthFirst, DepthFirst, PreOrder, InOrder, PostOrder},
    AddSubNodeError,
    NotBinaryError,
};
use super::{Node, NodeRef, NodeRefMut};

/// A k-ary tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct KaryTree<T, const N: usize = 2, K = usize, S = DefaultStorage<Node<T, K, N>>>
where
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) storage: S,
    pub(super) root: Option<K>,
}
impl<T, const N: usize, K, S> KaryTree<T, N, K, S>
where
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// The number of child slots of every node.
    pub const ARITY: usize = N;

    /// Creates an empty tree, without a root node.
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
        }
    }
    /// Creates an empty tree with enough storage capacity for the specified number of nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
        }
    }
    /// Creates a tree consisting only of a root node with the specified value.
    #[inline]
    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        tree.add_root(value);
        tree
    }
    /// Returns the number of child slots of every node of the tree.
    #[inline(always)]
    #[allow(clippy::unused_self)]
    pub fn arity(&self) -> usize {
        N
    }
    /// Returns the number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the tree has no root node, `false` otherwise.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Sets the value of the root node, creating the root if the tree is empty.
    ///
    /// If the tree already has a root, only its value is overwritten and its children stay in place. Returns the key of the root node.
    pub fn add_root(&mut self, value: T) -> K {
        if let Some(root) = self.root.clone() {
            trace!("overwriting the value of root node {:?}", root);
            self.node_data_mut(&root).value = value;
            root
        } else {
            let root = self.storage.add(Node::root(value));
            trace!("created root node {:?}", root);
            self.root = Some(root.clone());
            root
        }
    }
    /// Adds a leaf node with the specified value into the first empty child slot of the node with the key `parent`, returning the key of the new node.
    ///
    /// Passing `None` as the parent is a no-op which returns `Ok(None)`.
    ///
    /// # Errors
    /// Will fail in the following scenarios, leaving the tree unchanged and returning the value back:
    /// - All `N` child slots of the parent are already occupied.
    /// - The parent key does not belong to a node of this tree.
    pub fn add_sub_node(
        &mut self,
        parent: Option<K>,
        value: T,
    ) -> Result<Option<K>, AddSubNodeError<T>> {
        match parent {
            Some(parent) => self.attach(&parent, value).map(Some),
            None => Ok(None),
        }
    }
    pub(super) fn attach(&mut self, parent: &K, value: T) -> Result<K, AddSubNodeError<T>> {
        let slot = match self.storage.get(parent) {
            Some(node) => node.first_free_slot(),
            None => {
                warn!("cannot add sub node: {:?} is not a node of the tree", parent);
                return Err(AddSubNodeError::InvalidParent { value });
            }
        };
        let slot = if let Some(slot) = slot {
            slot
        } else {
            warn!(
                "no empty slot to add sub node: all {} slots of {:?} are occupied",
                N, parent,
            );
            return Err(AddSubNodeError::NoFreeSlot { value });
        };
        let child = self.storage.add(Node::leaf(value, Some(parent.clone())));
        self.node_data_mut(parent).children[slot] = Some(child.clone());
        Ok(child)
    }

    /// Returns the key of the root node, or `None` if the tree is empty.
    #[inline]
    pub fn root_key(&self) -> Option<&K> {
        self.root.as_ref()
    }
    /// Returns a reference to the root node, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, T, N, K, S>> {
        self.root.clone().map(|root| NodeRef::new_trusted(self, root))
    }
    /// Returns a *mutable* reference to the root node, or `None` if the tree is empty.
    #[inline]
    pub fn root_mut(&mut self) -> Option<NodeRefMut<'_, T, N, K, S>> {
        let root = self.root.clone()?;
        Some(NodeRefMut::new_trusted(self, root))
    }
    /// Returns a reference to the node with the specified key, or `None` if there is no such node.
    #[inline]
    pub fn node(&self, key: K) -> Option<NodeRef<'_, T, N, K, S>> {
        NodeRef::new_raw(self, key)
    }
    /// Returns a *mutable* reference to the node with the specified key, or `None` if there is no such node.
    #[inline]
    pub fn node_mut(&mut self, key: K) -> Option<NodeRefMut<'_, T, N, K, S>> {
        NodeRefMut::new_raw(self, key)
    }

    /// Returns a cursor at the first node of a breadth-first traversal.
    #[inline]
    pub fn begin_bfs(&self) -> BreadthFirst<'_, Self> {
        BreadthFirst::new(self)
    }
    /// Returns the end sentinel of a breadth-first traversal.
    #[inline]
    pub fn end_bfs(&self) -> BreadthFirst<'_, Self> {
        BreadthFirst::end(self)
    }
    /// Returns a cursor at the first node of a depth-first traversal, in discovery order.
    #[inline]
    pub fn begin_dfs(&self) -> DepthFirst<'_, Self> {
        DepthFirst::new(self)
    }
    /// Returns the end sentinel of a depth-first traversal.
    #[inline]
    pub fn end_dfs(&self) -> DepthFirst<'_, Self> {
        DepthFirst::end(self)
    }
    /// Returns a cursor at the first node of a pre-order traversal.
    #[inline]
    pub fn begin_preorder(&self) -> PreOrder<'_, Self> {
        PreOrder::new(self)
    }
    /// Returns the end sentinel of a pre-order traversal.
    #[inline]
    pub fn end_preorder(&self) -> PreOrder<'_, Self> {
        PreOrder::end(self)
    }
    /// Returns a cursor at the first node of an in-order traversal. Falls back to discovery order unless `N` is 2.
    #[inline]
    pub fn begin_inorder(&self) -> InOrder<'_, Self> {
        InOrder::new(self)
    }
    /// Returns the end sentinel of an in-order traversal.
    #[inline]
    pub fn end_inorder(&self) -> InOrder<'_, Self> {
        InOrder::end(self)
    }
    /// Returns a cursor at the first node of a post-order traversal. Falls back to discovery order unless `N` is 2.
    #[inline]
    pub fn begin_postorder(&self) -> PostOrder<'_, Self> {
        PostOrder::new(self)
    }
    /// Returns the end sentinel of a post-order traversal.
    #[inline]
    pub fn end_postorder(&self) -> PostOrder<'_, Self> {
        PostOrder::end(self)
    }
    /// Returns an iterator over the values of the tree in breadth-first order.
    #[inline(always)]
    pub fn iter(&self) -> BreadthFirst<'_, Self> {
        self.begin_bfs()
    }

    /// Reorganizes a binary tree into a min-heap and returns a breadth-first cursor over the result.
    ///
    /// The nodes are collected in breadth-first order, arranged so that no node is greater than either of its children, and linked back together in the layout of an array-backed binary heap: the node at position `i` of the breadth-first order gets the nodes at positions `2i + 1` and `2i + 2` as its children. The multiset of values is unchanged; their places in the tree are not, so any previously obtained key now refers to a node in a different position.
    ///
    /// # Errors
    /// Fails without touching the tree if `N` is not 2.
    pub fn heapify(&mut self) -> Result<BreadthFirst<'_, Self>, NotBinaryError>
    where
        T: PartialOrd,
    {
        if N != 2 {
            debug!("refusing to build a heap out of a tree with arity {}", N);
            return Err(NotBinaryError { arity: N });
        }
        let mut order = Vec::with_capacity(self.len());
        let mut walk = BreadthFirst::new(&*self);
        while let Some(cursor) = walk.step() {
            order.push(cursor);
        }
        debug!("rebuilding {} nodes into a min-heap", order.len());
        algorithms::build_min_heap_by(&mut order, |a, b| {
            self.node_data(a).value < self.node_data(b).value
        });

        for (index, key) in order.iter().enumerate() {
            let (left, right) = algorithms::heap_children(index);
            let parent = index.checked_sub(1).map(|i| order[i / 2].clone());
            let node = self.node_data_mut(key);
            node.parent = parent;
            for (slot, position) in node.children.iter_mut().zip([left, right].iter()) {
                *slot = order.get(*position).cloned();
            }
        }
        self.root = order.first().cloned();
        debug!("min-heap rebuild finished");
        Ok(BreadthFirst::new(self))
    }

    #[track_caller]
    pub(super) fn node_data(&self, key: &K) -> &Node<T, K, N> {
        self.storage
            .get(key)
            .unwrap_or_else(|| panic!("invalid cursor: {:?}", key))
    }
    #[track_caller]
    pub(super) fn node_data_mut(&mut self, key: &K) -> &mut Node<T, K, N> {
        self.storage
            .get_mut(key)
            .unwrap_or_else(|| panic!("invalid cursor: {:?}", key))
    }
}
impl<T, const N: usize, K, S> Default for KaryTree<T, N, K, S>
where
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<'a, T, const N: usize, K, S> IntoIterator for &'a KaryTree<T, N, K, S>
where
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = &'a T;
    type IntoIter = BreadthFirst<'a, KaryTree<T, N, K, S>>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.begin_bfs()
    }
}
/// Renders the tree one value per line in depth-first order, indenting every level by two spaces.
impl<T, const N: usize, K, S> Display for KaryTree<T, N, K, S>
where
    T: Display,
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(K, usize)> = self.root.iter().map(|root| (root.clone(), 0)).collect();
        while let Some((key, depth)) = stack.pop() {
            let node = self.node_data(&key);
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            writeln!(f, "{}", node.value)?;
            for child in node.children.iter().rev().flatten() {
                stack.push((child.clone(), depth + 1));
            }
        }
        Ok(())
    }
}
