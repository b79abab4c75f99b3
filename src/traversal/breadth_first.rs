use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
};
use alloc::collections::VecDeque;
use super::{Traversable, Cursor, same_tree};

/// A cursor visiting the nodes of a tree level by level, left to right within a level.
///
/// Created by the `begin_bfs` and `end_bfs` methods of trees, or directly from any [`Traversable`].
///
/// [`Traversable`]: trait.Traversable.html " "
pub struct BreadthFirst<'a, T: Traversable + ?Sized> {
    tree: &'a T,
    queue: VecDeque<T::Cursor>,
}
impl<'a, T: Traversable + ?Sized> BreadthFirst<'a, T> {
    /// Creates a cursor positioned at the root of the specified tree. If the tree is empty, the cursor is immediately at its end.
    #[inline]
    pub fn new(tree: &'a T) -> Self {
        let mut queue = VecDeque::new();
        queue.extend(tree.cursor_to_root());
        Self { tree, queue }
    }
    /// Creates an exhausted cursor over the specified tree, for use as the end sentinel of a traversal.
    #[inline]
    pub fn end(tree: &'a T) -> Self {
        Self {
            tree,
            queue: VecDeque::new(),
        }
    }
    /// Returns the tree the cursor is walking.
    #[inline(always)]
    pub fn tree(&self) -> &'a T {
        self.tree
    }
    /// Returns the raw cursor of the node the traversal is currently at, or `None` if it has been exhausted.
    #[inline]
    pub fn current_cursor(&self) -> Option<&T::Cursor> {
        self.queue.front()
    }
    /// Pops the front of the queue and enqueues its children, returning the popped cursor.
    pub(crate) fn step(&mut self) -> Option<T::Cursor> {
        let current = self.queue.pop_front()?;
        for n in 0..T::ARITY {
            if let Some(child) = self.tree.nth_child_of(&current, n) {
                self.queue.push_back(child);
            }
        }
        Some(current)
    }
}
impl<'a, T: Traversable + ?Sized> Cursor for BreadthFirst<'a, T> {
    type Item = &'a T::Value;
    #[inline]
    fn is_at_end(&self) -> bool {
        self.queue.is_empty()
    }
    #[inline]
    fn current(&self) -> Option<Self::Item> {
        let tree = self.tree;
        self.queue.front().map(|cursor| tree.value_of(cursor))
    }
    #[inline]
    fn advance(&mut self) {
        self.step();
    }
}
impl<'a, T: Traversable + ?Sized> Iterator for BreadthFirst<'a, T> {
    type Item = &'a T::Value;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.step().map(|cursor| tree.value_of(&cursor))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), None)
    }
}
impl<T: Traversable + ?Sized> FusedIterator for BreadthFirst<'_, T> {}
impl<T: Traversable + ?Sized> Clone for BreadthFirst<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            queue: self.queue.clone(),
        }
    }
}
impl<T: Traversable + ?Sized> PartialEq for BreadthFirst<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        same_tree(self.tree, other.tree) && self.queue == other.queue
    }
}
impl<T: Traversable + ?Sized> Eq for BreadthFirst<'_, T> {}
impl<T: Traversable + ?Sized> Debug for BreadthFirst<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreadthFirst")
            .field("queue", &self.queue)
            .finish()
    }
}
