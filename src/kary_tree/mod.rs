//! Trees whose nodes have a fixed number of ordered child slots, the [arity] of the tree.
//!
//! The arity `N` is a const generic parameter of [`KaryTree`] and defaults to 2, making the default tree a binary one. Every node has exactly `N` slots, each of which is either empty or holds a child node. New nodes always go into the first empty slot of their parent, so the slots of a node are filled in ascending order and never reassigned; nodes cannot be removed.
//!
//! # Example
//! ```rust
//! use kary::{BinaryTree, Cursor};
//!
//! // Create an empty tree. The turbofish is needed to state that we are using the default
//! // storage method instead of asking the compiler to infer it, which would be impossible.
//! let mut tree = BinaryTree::<_>::new();
//! assert!(tree.root().is_none());
//!
//! // Give the tree a root, then hang a few nodes under it.
//! let root = tree.add_root(1);
//! let two = tree.add_sub_node(Some(root), 2).unwrap().unwrap();
//! tree.add_sub_node(Some(root), 3).unwrap();
//! tree.add_sub_node(Some(two), 4).unwrap();
//! tree.add_sub_node(Some(two), 5).unwrap();
//!
//! // The root already has both of its children, so there is no place for another one.
//! let error = tree.add_sub_node(Some(root), 6).unwrap_err();
//! assert_eq!(error.into_value(), 6);
//!
//! // Cursors are also iterators.
//! let bfs: Vec<_> = tree.begin_bfs().copied().collect();
//! assert_eq!(bfs, [1, 2, 3, 4, 5]);
//! let preorder: Vec<_> = tree.begin_preorder().copied().collect();
//! assert_eq!(preorder, [1, 2, 4, 5, 3]);
//!
//! // They can also be driven manually, comparing against the end sentinel.
//! let mut cursor = tree.begin_inorder();
//! let mut inorder = Vec::new();
//! while cursor != tree.end_inorder() {
//!     inorder.push(*cursor.current().unwrap());
//!     cursor.advance();
//! }
//! assert_eq!(inorder, [4, 2, 5, 1, 3]);
//!
//! // Turn the tree into a min-heap.
//! tree.add_root(9);
//! let heap: Vec<_> = tree.heapify().unwrap().copied().collect();
//! assert_eq!(heap[0], 2);
//! ```
//!
//! [arity]: https://en.wikipedia.org/wiki/M-ary_tree " "

mod base;
mod impl_traversable;
mod node;
mod node_ref;
mod node_ref_mut;

#[cfg(test)]
mod tests;

pub use base::KaryTree;
pub use node::Node;
pub use node_ref::NodeRef;
pub use node_ref_mut::NodeRefMut;

/// A tree in which every node has at most two children.
///
/// This is the same type as `KaryTree<T>`, since the arity defaults to 2; the alias only exists for readability.
pub type BinaryTree<T> = KaryTree<T, 2>;
/// A tree in which every node has at most three children.
pub type TernaryTree<T> = KaryTree<T, 3>;
/// A k-ary tree which uses a plain `Vec` as backing storage.
///
/// The default `KaryTree` type uses `Vec` with sparse storage. Since nodes are never removed, both behave identically; this is provided for convenience.
#[allow(unused_qualifications)]
pub type VecKaryTree<T, const N: usize> = KaryTree<T, N, usize, alloc::vec::Vec<Node<T, usize, N>>>;
