use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
};
use alloc::vec::Vec;
use super::{Traversable, Cursor, DepthFirst, same_tree};

/// A cursor visiting, for binary trees, the left subtree of a node, then its right subtree, then the node itself.
///
/// The whole visiting order is computed when the cursor is created, as the reverse of a root, right subtree, left subtree walk. Only cursors are stored, never values.
///
/// # Arities other than 2
/// There is no universally agreed-upon post-order for nodes with more than two children. For such trees, this cursor yields nodes in the same order as [`DepthFirst`], which it wraps.
///
/// [`DepthFirst`]: struct.DepthFirst.html " "
pub struct PostOrder<'a, T: Traversable + ?Sized> {
    strategy: Strategy<'a, T>,
}
enum Strategy<'a, T: Traversable + ?Sized> {
    Binary {
        tree: &'a T,
        // Popping from the end yields the post-order
        stack: Vec<T::Cursor>,
    },
    Discovery(DepthFirst<'a, T>),
}
impl<'a, T: Traversable + ?Sized> PostOrder<'a, T> {
    /// Creates a cursor positioned at the first node of the post-order of the specified tree. If the tree is empty, the cursor is immediately at its end.
    pub fn new(tree: &'a T) -> Self {
        let strategy = if T::ARITY == 2 {
            let mut pending: Vec<T::Cursor> = tree.cursor_to_root().into_iter().collect();
            let mut stack = Vec::new();
            while let Some(cursor) = pending.pop() {
                // Left goes in first, so that the right subtree is walked first
                for n in 0..2 {
                    if let Some(child) = tree.nth_child_of(&cursor, n) {
                        pending.push(child);
                    }
                }
                stack.push(cursor);
            }
            Strategy::Binary { tree, stack }
        } else {
            Strategy::Discovery(DepthFirst::new(tree))
        };
        Self { strategy }
    }
    /// Creates an exhausted cursor over the specified tree, for use as the end sentinel of a traversal.
    #[inline]
    pub fn end(tree: &'a T) -> Self {
        let strategy = if T::ARITY == 2 {
            Strategy::Binary {
                tree,
                stack: Vec::new(),
            }
        } else {
            Strategy::Discovery(DepthFirst::end(tree))
        };
        Self { strategy }
    }
    /// Returns the tree the cursor is walking.
    #[inline]
    pub fn tree(&self) -> &'a T {
        match &self.strategy {
            Strategy::Binary { tree, .. } => *tree,
            Strategy::Discovery(inner) => inner.tree(),
        }
    }
    /// Returns the raw cursor of the node the traversal is currently at, or `None` if it has been exhausted.
    #[inline]
    pub fn current_cursor(&self) -> Option<&T::Cursor> {
        match &self.strategy {
            Strategy::Binary { stack, .. } => stack.last(),
            Strategy::Discovery(inner) => inner.current_cursor(),
        }
    }
    #[inline]
    fn step(&mut self) -> Option<T::Cursor> {
        match &mut self.strategy {
            Strategy::Binary { stack, .. } => stack.pop(),
            Strategy::Discovery(inner) => inner.step(),
        }
    }
}
impl<'a, T: Traversable + ?Sized> Cursor for PostOrder<'a, T> {
    type Item = &'a T::Value;
    #[inline]
    fn is_at_end(&self) -> bool {
        self.current_cursor().is_none()
    }
    #[inline]
    fn current(&self) -> Option<Self::Item> {
        let tree = self.tree();
        self.current_cursor().map(|cursor| tree.value_of(cursor))
    }
    #[inline]
    fn advance(&mut self) {
        self.step();
    }
}
impl<'a, T: Traversable + ?Sized> Iterator for PostOrder<'a, T> {
    type Item = &'a T::Value;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree();
        self.step().map(|cursor| tree.value_of(&cursor))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.strategy {
            Strategy::Binary { stack, .. } => (stack.len(), Some(stack.len())),
            Strategy::Discovery(inner) => inner.size_hint(),
        }
    }
}
impl<T: Traversable + ?Sized> FusedIterator for PostOrder<'_, T> {}
impl<T: Traversable + ?Sized> Clone for PostOrder<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        let strategy = match &self.strategy {
            Strategy::Binary { tree, stack } => Strategy::Binary {
                tree: *tree,
                stack: stack.clone(),
            },
            Strategy::Discovery(inner) => Strategy::Discovery(inner.clone()),
        };
        Self { strategy }
    }
}
impl<T: Traversable + ?Sized> PartialEq for PostOrder<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.strategy, &other.strategy) {
            (
                Strategy::Binary { tree, stack },
                Strategy::Binary {
                    tree: other_tree,
                    stack: other_stack,
                },
            ) => same_tree(*tree, *other_tree) && stack == other_stack,
            (Strategy::Discovery(inner), Strategy::Discovery(other_inner)) => inner == other_inner,
            _ => false,
        }
    }
}
impl<T: Traversable + ?Sized> Eq for PostOrder<'_, T> {}
impl<T: Traversable + ?Sized> Debug for PostOrder<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.strategy {
            Strategy::Binary { stack, .. } => f
                .debug_struct("PostOrder")
                .field("stack", stack)
                .finish(),
            Strategy::Discovery(inner) => f.debug_tuple("PostOrder").field(inner).finish(),
        }
    }
}
