//! Ubiquitous algorithms for trees.
//!
//! This includes:
//! - Min-heap arrangement of traversal results, used by [`KaryTree::heapify`]
//!
//! [`KaryTree::heapify`]: ../../kary_tree/struct.KaryTree.html#method.heapify " "

mod heap;
pub use heap::*;
