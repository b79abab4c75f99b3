use core::{
    fmt::{self, Formatter, Debug},
    iter::FusedIterator,
};
use alloc::vec::Vec;
use super::{Traversable, Cursor, DepthFirst, same_tree};

/// A cursor visiting, for binary trees, the left subtree of a node, then the node itself, then its right subtree.
///
/// # Arities other than 2
/// There is no universally agreed-upon in-order for nodes with more than two children. For such trees, this cursor yields nodes in the same order as [`DepthFirst`], which it wraps.
///
/// [`DepthFirst`]: struct.DepthFirst.html " "
pub struct InOrder<'a, T: Traversable + ?Sized> {
    strategy: Strategy<'a, T>,
}
enum Strategy<'a, T: Traversable + ?Sized> {
    Binary {
        tree: &'a T,
        // The top is always the leftmost node which was not yet visited
        stack: Vec<T::Cursor>,
    },
    Discovery(DepthFirst<'a, T>),
}
impl<'a, T: Traversable + ?Sized> InOrder<'a, T> {
    /// Creates a cursor positioned at the leftmost node of the specified tree. If the tree is empty, the cursor is immediately at its end.
    #[inline]
    pub fn new(tree: &'a T) -> Self {
        let strategy = if T::ARITY == 2 {
            let mut stack = Vec::new();
            push_left_chain(tree, &mut stack, tree.cursor_to_root());
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
    fn step(&mut self) -> Option<T::Cursor> {
        match &mut self.strategy {
            Strategy::Binary { tree, stack } => {
                let current = stack.pop()?;
                push_left_chain(*tree, stack, tree.nth_child_of(&current, 1));
                Some(current)
            }
            Strategy::Discovery(inner) => inner.step(),
        }
    }
}

fn push_left_chain<T: Traversable + ?Sized>(
    tree: &T,
    stack: &mut Vec<T::Cursor>,
    mut node: Option<T::Cursor>,
) {
    while let Some(cursor) = node {
        node = tree.nth_child_of(&cursor, 0);
        stack.push(cursor);
    }
}

impl<'a, T: Traversable + ?Sized> Cursor for InOrder<'a, T> {
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
impl<'a, T: Traversable + ?Sized> Iterator for InOrder<'a, T> {
    type Item = &'a T::Value;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree();
        self.step().map(|cursor| tree.value_of(&cursor))
    }
}
impl<T: Traversable + ?Sized> FusedIterator for InOrder<'_, T> {}
impl<T: Traversable + ?Sized> Clone for InOrder<'_, T> {
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
impl<T: Traversable + ?Sized> PartialEq for InOrder<'_, T> {
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
impl<T: Traversable + ?Sized> Eq for InOrder<'_, T> {}
impl<T: Traversable + ?Sized> Debug for InOrder<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.strategy {
            Strategy::Binary { stack, .. } => f
                .debug_struct("InOrder")
                .field("stack", stack)
                .finish(),
            Strategy::Discovery(inner) => f.debug_tuple("InOrder").field(inner).finish(),
        }
    }
}
