use core::{array, fmt::Debug, num::NonZeroIsize};
use granite::{ListStorage, MoveFix};

/// A node of a k-ary tree.
///
/// Created by the tree internally and only publicly exposed so that tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<T, K, const N: usize>
where
    K: Clone + Debug + Eq,
{
    pub(super) value: T,
    pub(super) parent: Option<K>,
    pub(super) children: [Option<K>; N],
}
impl<T, K, const N: usize> Node<T, K, N>
where
    K: Clone + Debug + Eq,
{
    #[inline]
    pub(super) fn leaf(value: T, parent: Option<K>) -> Self {
        Self {
            value,
            parent,
            children: array::from_fn(|_| None),
        }
    }
    /// Creates a root node.
    ///
    /// The node should not be added into a tree if it already has a root node, as there can only be one.
    #[inline(always)]
    pub(super) fn root(value: T) -> Self {
        Self::leaf(value, None)
    }
    /// Returns the index of the first empty child slot, or `None` if all `N` are occupied.
    #[inline]
    pub(super) fn first_free_slot(&self) -> Option<usize> {
        self.children.iter().position(Option::is_none)
    }
}
/// Panics if `n` is not a valid child slot index for nodes with `N` slots.
#[track_caller]
pub(super) fn check_slot<const N: usize>(n: usize) {
    assert!(
        n < N,
        "\
nodes of this tree have {} child slots, at indices from 0 to {}, but child at index {} was requested",
        N,
        N.saturating_sub(1),
        n,
    );
}
impl<T, const N: usize> MoveFix for Node<T, usize, N> {
    #[inline]
    unsafe fn fix_shift<S>(storage: &mut S, shifted_from: usize, shifted_by: NonZeroIsize)
    where S: ListStorage<Element = Self>,
    {
        let fix_starting_from = if shifted_by.get() > 0 {
            shifted_from + 1 // If an insertion happened, ignore the new element
        } else {
            shifted_from
        };
        for i in fix_starting_from..storage.len() {
            let old_index = (i as isize - shifted_by.get()) as usize; // undo shift to figure out old index
            Self::fix_move(storage, old_index, i);
        }
    }

    unsafe fn fix_move<S>(storage: &mut S, previous_index: usize, current_index: usize)
    where S: ListStorage<Element = Self>,
    {
        let (children, parent) = match storage.get(current_index) {
            Some(node) => (node.children, node.parent),
            None => return,
        };
        for child in children.iter().flatten() {
            if let Some(child) = storage.get_mut(*child) {
                child.parent = Some(current_index);
            }
        }
        let parent = if let Some(parent) = parent.and_then(|x| storage.get_mut(x)) {
            parent
        } else {
            return;
        };
        for child in parent.children.iter_mut().flatten() {
            if *child == previous_index {
                *child = current_index;
                return;
            }
        }
    }
}
