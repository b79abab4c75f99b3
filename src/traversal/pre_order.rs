use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
};
use super::{Traversable, Cursor, DepthFirst};

/// A cursor visiting a node before the subtrees in its child slots.
///
/// For binary trees, this is the classic root, left subtree, right subtree order. Discovery order already has that shape for every arity, so this cursor simply wraps [`DepthFirst`]; for arities other than 2 it is a fallback rather than a generalized pre-order.
///
/// [`DepthFirst`]: struct.DepthFirst.html " "
pub struct PreOrder<'a, T: Traversable + ?Sized> {
    inner: DepthFirst<'a, T>,
}
impl<'a, T: Traversable + ?Sized> PreOrder<'a, T> {
    /// Creates a cursor positioned at the root of the specified tree. If the tree is empty, the cursor is immediately at its end.
    #[inline]
    pub fn new(tree: &'a T) -> Self {
        Self {
            inner: DepthFirst::new(tree),
        }
    }
    /// Creates an exhausted cursor over the specified tree, for use as the end sentinel of a traversal.
    #[inline]
    pub fn end(tree: &'a T) -> Self {
        Self {
            inner: DepthFirst::end(tree),
        }
    }
    /// Returns the tree the cursor is walking.
    #[inline(always)]
    pub fn tree(&self) -> &'a T {
        self.inner.tree()
    }
    /// Returns the raw cursor of the node the traversal is currently at, or `None` if it has been exhausted.
    #[inline(always)]
    pub fn current_cursor(&self) -> Option<&T::Cursor> {
        self.inner.current_cursor()
    }
}
impl<'a, T: Traversable + ?Sized> Cursor for PreOrder<'a, T> {
    type Item = &'a T::Value;
    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.inner.is_at_end()
    }
    #[inline(always)]
    fn current(&self) -> Option<Self::Item> {
        self.inner.current()
    }
    #[inline(always)]
    fn advance(&mut self) {
        self.inner.advance()
    }
}
impl<'a, T: Traversable + ?Sized> Iterator for PreOrder<'a, T> {
    type Item = &'a T::Value;
    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
impl<T: Traversable + ?Sized> FusedIterator for PreOrder<'_, T> {}
impl<T: Traversable + ?Sized> Clone for PreOrder<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
impl<T: Traversable + ?Sized> PartialEq for PreOrder<'_, T> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}
impl<T: Traversable + ?Sized> Eq for PreOrder<'_, T> {}
impl<T: Traversable + ?Sized> Debug for PreOrder<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PreOrder").field(&self.inner).finish()
    }
}
