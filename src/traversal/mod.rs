//! Everything related to traversing trees in general.
//!
//! The module is home to the following items:
//! - [`Traversable`] — *trait for types which describe tree-like structures* with a fixed number of ordered child slots per node, which is the only capability the cursors below rely on
//! - [`Cursor`] — *trait for the traversal cursors*, exposing the "at end", "current value" and "advance" operations explicitly
//! - The cursors themselves: [`BreadthFirst`], [`DepthFirst`], [`PreOrder`], [`InOrder`] and [`PostOrder`]
//! - Implementations of algorithms operating on traversal results (see the [`algorithms`] module for more)
//!
//! Cursors never copy the tree: they borrow it and keep a work list of cursors into it. Every cursor is also a [`FusedIterator`] yielding references to values, which is the preferred way of consuming them.
//!
//! # Ordering guarantees
//! Sibling nodes are always discovered in ascending slot order, which makes the output of every cursor deterministic for a given tree shape.
//!
//! # Arities other than 2
//! Pre-order, in-order and post-order are only classically defined for binary trees. For any other arity, [`PreOrder`], [`InOrder`] and [`PostOrder`] yield nodes in the same order as [`DepthFirst`]. This is a documented fallback, not a generalized definition of those orders.
//!
//! # Equality
//! Two cursors compare equal when they borrow the very same tree and their remaining work lists are identical, which in particular makes every exhausted cursor equal to the `end_*` sentinel of its tree.
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`FusedIterator`]: https://doc.rust-lang.org/core/iter/trait.FusedIterator.html " "

pub mod algorithms;

mod breadth_first;
mod depth_first;
mod in_order;
mod post_order;
mod pre_order;


pub use breadth_first::BreadthFirst;
pub use depth_first::DepthFirst;
pub use in_order::InOrder;
pub use post_order::PostOrder;
pub use pre_order::PreOrder;

use core::fmt::Debug;

/// Data structures which can be traversed by the cursors of this module.
///
/// Every node has exactly [`ARITY`] child slots, each of which is either empty or refers to a distinct child node.
///
/// [`ARITY`]: #associatedconstant.ARITY " "
pub trait Traversable {
    /// The payload stored in every node.
    type Value;
    /// The type for the cursor which will be used for keeping track of the traversed nodes.
    ///
    /// Must be very cheaply clonable, but not required to be `Copy`.
    type Cursor: Clone + Debug + Eq;
    /// The number of child slots of every node.
    const ARITY: usize;

    /// Returns the cursor pointing to the root node, or `None` if the traversable is empty.
    fn cursor_to_root(&self) -> Option<Self::Cursor>;
    /// Returns a reference to the value of the node at the specified cursor.
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value;
    /// Returns a cursor to the child in slot `n` of the node at the specified cursor, or `None` if that slot is empty or `n` is not less than [`ARITY`].
    ///
    /// [`ARITY`]: #associatedconstant.ARITY " "
    fn nth_child_of(&self, cursor: &Self::Cursor, n: usize) -> Option<Self::Cursor>;
}
impl<T: Traversable + ?Sized> Traversable for &T {
    type Value = T::Value;
    type Cursor = T::Cursor;
    const ARITY: usize = T::ARITY;

    #[inline(always)]
    fn cursor_to_root(&self) -> Option<Self::Cursor> {
        (**self).cursor_to_root()
    }
    #[inline(always)]
    fn value_of(&self, cursor: &Self::Cursor) -> &Self::Value {
        (**self).value_of(cursor)
    }
    #[inline(always)]
    fn nth_child_of(&self, cursor: &Self::Cursor, n: usize) -> Option<Self::Cursor> {
        (**self).nth_child_of(cursor, n)
    }
}

/// A forward-only position inside a traversal order.
///
/// Cursors are what the `begin_*` and `end_*` factories of a tree return. They can be driven manually through this trait or consumed as an [`Iterator`], which repeatedly reads [`current`] and then calls [`advance`].
///
/// [`current`]: #tymethod.current " "
/// [`advance`]: #tymethod.advance " "
pub trait Cursor {
    /// The value the cursor points to.
    type Item;
    /// Returns `true` if the traversal has been exhausted, `false` otherwise.
    fn is_at_end(&self) -> bool;
    /// Returns the value at the current position, or `None` if the traversal has been exhausted.
    fn current(&self) -> Option<Self::Item>;
    /// Moves to the next position in the traversal order. Does nothing if the traversal has been exhausted.
    fn advance(&mut self);
}

#[inline]
pub(crate) fn same_tree<T: ?Sized>(a: &T, b: &T) -> bool {
    core::ptr::eq(a, b)
}
