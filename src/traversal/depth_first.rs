use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
};
use alloc::vec::Vec;
use super::{Traversable, Cursor, same_tree};

/// A cursor visiting the nodes of a tree in the order they are discovered by a depth-first walk which explores slot 0 first.
///
/// For any arity, this is the same order as a pre-order walk: a node is followed by the entire subtree in its slot 0, then the one in slot 1, and so on. The other order cursors fall back to this one for arities other than 2.
pub struct DepthFirst<'a, T: Traversable + ?Sized> {
    tree: &'a T,
    stack: Vec<T::Cursor>,
}
impl<'a, T: Traversable + ?Sized> DepthFirst<'a, T> {
    /// Creates a cursor positioned at the root of the specified tree. If the tree is empty, the cursor is immediately at its end.
    #[inline]
    pub fn new(tree: &'a T) -> Self {
        let mut stack = Vec::new();
        stack.extend(tree.cursor_to_root());
        Self { tree, stack }
    }
    /// Creates an exhausted cursor over the specified tree, for use as the end sentinel of a traversal.
    #[inline]
    pub fn end(tree: &'a T) -> Self {
        Self {
            tree,
            stack: Vec::new(),
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
        self.stack.last()
    }
    pub(crate) fn step(&mut self) -> Option<T::Cursor> {
        let current = self.stack.pop()?;
        // Reverse order, so that slot 0 ends up on top
        for n in (0..T::ARITY).rev() {
            if let Some(child) = self.tree.nth_child_of(&current, n) {
                self.stack.push(child);
            }
        }
        Some(current)
    }
}
impl<'a, T: Traversable + ?Sized> Cursor for DepthFirst<'a, T> {
    type Item = &'a T::Value;
    #[inline]
    fn is_at_end(&self) -> bool {
        self.stack.is_empty()
    }
    #[inline]
    fn current(&self) -> Option<Self::Item> {
        let tree = self.tree;
        self.stack.last().map(|cursor| tree.value_of(cursor))
    }
    #[inline]
    fn advance(&mut self) {
        self.step();
    }
}
impl<'a, T: Traversable + ?Sized> Iterator for DepthFirst<'a, T> {
    type Item = &'a T::Value;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.step().map(|cursor| tree.value_of(&cursor))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), None)
    }
}
impl<T: Traversable + ?Sized> FusedIterator for DepthFirst<'_, T> {}
impl<T: Traversable + ?Sized> Clone for DepthFirst<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
        }
    }
}
impl<T: Traversable + ?Sized> PartialEq for DepthFirst<'_, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        same_tree(self.tree, other.tree) && self.stack == other.stack
    }
}
impl<T: Traversable + ?Sized> Eq for DepthFirst<'_, T> {}
impl<T: Traversable + ?Sized> Debug for DepthFirst<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepthFirst")
            .field("stack", &self.stack)
            .finish()
    }
}
