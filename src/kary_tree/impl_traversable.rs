use core::fmt::Debug;
use granite::Storage;
use crate::traversal::Traversable;
use super::{KaryTree, Node};

impl<T, const N: usize, K, S> Traversable for KaryTree<T, N, K, S>
where
    S: Storage<Element = Node<T, K, N>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Value = T;
    type Cursor = K;
    const ARITY: usize = N;

    #[inline]
    fn cursor_to_root(&self) -> Option<Self::Cursor> {
        self.root.clone()
    }
    #[track_caller]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value {
        &self.node_data(cursor).value
    }
    #[track_caller]
    fn nth_child_of(&self, cursor: &Self::Cursor, n: usize) -> Option<Self::Cursor> {
        self.node_data(cursor).children.get(n).cloned().flatten()
    }
}
