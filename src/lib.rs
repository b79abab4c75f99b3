//! Implements an arena-allocated tree with a fixed number of child slots per node, together with cursors for walking it in every classic order.
//!
//! # Overview
//! The [`KaryTree`] type stores its nodes using a technique called ["arena-allocated trees"][arena tree blog post], described by Ben Lovy. Instead of owning pointers, every node lives in a backing storage (by default a sparse `Vec`) and refers to its children through keys into that storage. Each node has exactly `N` child slots, where `N` is a const generic parameter fixed by the tree type; slots are filled in ascending order and a filled slot is never reassigned.
//!
//! # Traversal
//! Five cursor types are provided by the [`traversal`] module, each created through a `begin_*`/`end_*` pair of factories on the tree:
//! - [`BreadthFirst`] — level by level, left to right within a level
//! - [`DepthFirst`] — discovery order of a depth-first walk exploring slot 0 first
//! - [`PreOrder`], [`InOrder`] and [`PostOrder`] — the classic binary orders. **For arities other than 2 those three fall back to discovery order**, since there is no agreed-upon definition of in-order or post-order for trees with more than two children per node.
//!
//! Every cursor is also an [`Iterator`] over references to the stored values.
//!
//! # Heap rebuild
//! Binary trees can be reorganized into min-heap shape with [`KaryTree::heapify`], which returns a breadth-first cursor over the result.
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the error types.
//! - `complex` (**enabled by default**) — adds the [`complex`] module with a small complex number type, handy as an example element type. Requires `std` for floating-point math.
//!
//! # Logging
//! Failed insertions and heap rebuilds are reported through the [`log`] facade. The crate never installs a logger by itself.
//!
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`log`]: https://docs.rs/log/*/log/ " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod kary_tree;
pub use kary_tree::{KaryTree, BinaryTree, TernaryTree};

pub mod traversal;
pub use traversal::{
    Cursor,
    Traversable,
    BreadthFirst,
    DepthFirst,
    PreOrder,
    InOrder,
    PostOrder,
};

#[cfg(feature = "complex")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "complex")))]
pub mod complex;

/// A prelude for using the crate, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::kary_tree::{
        KaryTree,
        BinaryTree,
        NodeRef as KaryTreeNodeRef,
        NodeRefMut as KaryTreeNodeRefMut,
    };
    #[doc(no_inline)]
    pub use crate::traversal::{Cursor as TreeCursor, Traversable as TraversableTree};
    #[doc(no_inline)]
    pub use crate::{AddSubNodeError, NotBinaryError};
}

use core::fmt::{self, Formatter, Display, Debug};

/// The error type returned by [`KaryTree::add_sub_node`] and [`NodeRefMut::add_child`] when the new node could not be attached.
///
/// The value which was supposed to be stored in the new node is handed back instead of being dropped.
///
/// [`KaryTree::add_sub_node`]: kary_tree/struct.KaryTree.html#method.add_sub_node " "
/// [`NodeRefMut::add_child`]: kary_tree/struct.NodeRefMut.html#method.add_child " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AddSubNodeError<T> {
    /// Every child slot of the parent node was already occupied.
    NoFreeSlot {
        /// The value of the node which could not be added.
        value: T,
    },
    /// The parent key does not identify a node of the tree.
    InvalidParent {
        /// The value of the node which could not be added.
        value: T,
    },
}
impl<T> AddSubNodeError<T> {
    /// Extracts the value which was deemed useless when the operation failed.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_value(self) -> T {
        match self {
            Self::NoFreeSlot { value } | Self::InvalidParent { value } => value,
        }
    }
}
impl<T> Display for AddSubNodeError<T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::NoFreeSlot { .. } => "no empty slot to add sub node",
            Self::InvalidParent { .. } => "the parent node does not belong to the tree",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<T: Debug> std::error::Error for AddSubNodeError<T> {}

/// The error type returned by [`KaryTree::heapify`] when called on a tree whose nodes do not have exactly two child slots.
///
/// [`KaryTree::heapify`]: kary_tree/struct.KaryTree.html#method.heapify " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NotBinaryError {
    /// The arity of the tree the operation was attempted on.
    pub arity: usize,
}
impl Display for NotBinaryError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "tree is not binary (nodes have {} child slots)", self.arity)
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for NotBinaryError {}
