use super::*;
use crate::{traversal::algorithms, AddSubNodeError, NotBinaryError};
use alloc::{string::ToString, vec::Vec};

/// 1 -> (2 -> (4, 5), 3)
fn sample() -> BinaryTree<i32> {
    let mut tree = BinaryTree::new();
    let root = tree.add_root(1);
    let two = tree.add_sub_node(Some(root), 2).unwrap().unwrap();
    tree.add_sub_node(Some(root), 3).unwrap();
    tree.add_sub_node(Some(two), 4).unwrap();
    tree.add_sub_node(Some(two), 5).unwrap();
    tree
}

fn bfs<const N: usize>(tree: &KaryTree<i32, N>) -> Vec<i32> {
    tree.begin_bfs().copied().collect()
}

#[test]
fn empty_tree() {
    let tree: BinaryTree<i32> = BinaryTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.root().is_none());
    assert!(tree.root_key().is_none());
    assert_eq!(tree.to_string(), "");
}

#[test]
fn add_root_overwrites_value_and_keeps_children() {
    let mut tree = sample();
    let root = *tree.root_key().unwrap();
    assert_eq!(tree.add_root(10), root);
    assert_eq!(tree.len(), 5);
    assert_eq!(bfs(&tree), [10, 2, 3, 4, 5]);
}

#[test]
fn sub_nodes_fill_slots_in_order() {
    let mut tree: TernaryTree<i32> = KaryTree::with_root(0);
    let root = *tree.root_key().unwrap();
    for value in 1..=3 {
        tree.add_sub_node(Some(root), value).unwrap();
    }
    let root = tree.root().unwrap();
    let values: Vec<_> = root
        .children()
        .iter()
        .map(|child| *child.as_ref().unwrap().value())
        .collect();
    assert_eq!(values, [1, 2, 3]);
    assert_eq!(root.num_children(), 3);
}

#[test]
fn full_parent_reports_capacity_error() {
    let mut tree = sample();
    let root = *tree.root_key().unwrap();
    let before = bfs(&tree);
    assert_eq!(
        tree.add_sub_node(Some(root), 6),
        Err(AddSubNodeError::NoFreeSlot { value: 6 }),
    );
    assert_eq!(bfs(&tree), before);
    assert_eq!(tree.len(), 5);
}

#[test]
fn missing_parent_is_a_no_op() {
    let mut tree = sample();
    assert_eq!(tree.add_sub_node(None, 6), Ok(None));
    assert_eq!(bfs(&tree), [1, 2, 3, 4, 5]);
}

#[test]
fn foreign_parent_is_rejected() {
    let mut tree = sample();
    let error = tree.add_sub_node(Some(1000), 6).unwrap_err();
    assert_eq!(error, AddSubNodeError::InvalidParent { value: 6 });
    assert_eq!(error.into_value(), 6);
    assert_eq!(tree.len(), 5);
}

#[test]
fn node_ref_navigation() {
    let tree = sample();
    let root = tree.root().unwrap();
    assert!(root.is_root());
    assert_eq!(root.child_index(), None);
    assert_eq!(root.parent(), None);

    let two = root.nth_child(0).unwrap();
    assert_eq!(*two.value(), 2);
    assert_eq!(two.child_index(), Some(0));
    assert_eq!(two.parent(), Some(root));

    let three = root.nth_child(1).unwrap();
    assert!(three.is_leaf());
    assert_eq!(three.child_index(), Some(1));
    assert!(three.occupied_children().is_empty());

    let grandchildren: Vec<_> = two
        .occupied_children()
        .iter()
        .map(|child| *child.value())
        .collect();
    assert_eq!(grandchildren, [4, 5]);

    let four = tree.node(*two.occupied_children()[0].raw_key()).unwrap();
    assert_eq!(*four.value(), 4);
    assert!(tree.node(1000).is_none());
}

#[test]
#[should_panic(expected = "child slots")]
fn node_ref_rejects_out_of_range_slot() {
    let tree = sample();
    tree.root().unwrap().nth_child(2);
}

#[test]
fn node_ref_mut_grows_tree() {
    let mut tree: BinaryTree<i32> = BinaryTree::with_root(1);
    let mut root = tree.root_mut().unwrap();
    *root.value_mut() = 7;
    root.add_child(8).unwrap();
    root.add_child(9).unwrap();
    assert_eq!(
        root.add_child(10),
        Err(AddSubNodeError::NoFreeSlot { value: 10 }),
    );
    {
        let mut left = root.nth_child_mut(0).unwrap();
        left.add_child(11).unwrap();
    }
    let right = root.into_nth_child(1).unwrap();
    *right.into_value_mut() += 1;
    assert_eq!(bfs(&tree), [7, 8, 10, 11]);

    let root = NodeRef::from(tree.root_mut().unwrap());
    assert_eq!(*root.value(), 7);
}

#[test]
fn display_indents_by_depth() {
    assert_eq!(sample().to_string(), "1\n  2\n    4\n    5\n  3\n");
}

#[test]
fn heapify_reorders_into_min_heap() {
    // 5 -> (4 -> (2, 1), 3)
    let mut tree = BinaryTree::new();
    let root = tree.add_root(5);
    let four = tree.add_sub_node(Some(root), 4).unwrap().unwrap();
    tree.add_sub_node(Some(root), 3).unwrap();
    tree.add_sub_node(Some(four), 2).unwrap();
    tree.add_sub_node(Some(four), 1).unwrap();

    let heap: Vec<_> = tree.heapify().unwrap().copied().collect();
    assert_eq!(heap, [1, 2, 3, 5, 4]);
    assert!(algorithms::is_min_heap_by(&heap, |a, b| a < b));

    // The structure really changed, not just the order of the returned cursor
    let root = tree.root().unwrap();
    assert_eq!(*root.value(), 1);
    let two = root.nth_child(0).unwrap();
    assert_eq!(*two.value(), 2);
    let five = two.nth_child(0).unwrap();
    assert_eq!(*five.value(), 5);
    assert_eq!(five.parent(), Some(two));
    assert!(root.nth_child(1).unwrap().is_leaf());
}

#[test]
fn heapify_on_trivial_trees() {
    let mut empty: BinaryTree<i32> = BinaryTree::new();
    assert_eq!(empty.heapify().unwrap().count(), 0);
    let mut single = BinaryTree::with_root(3);
    assert_eq!(single.heapify().unwrap().copied().collect::<Vec<_>>(), [3]);
}

#[test]
fn heapify_rejects_non_binary_tree() {
    let mut tree: TernaryTree<i32> = KaryTree::with_root(9);
    let root = *tree.root_key().unwrap();
    for value in [3, 1, 2].iter().copied() {
        tree.add_sub_node(Some(root), value).unwrap();
    }
    assert_eq!(tree.heapify().unwrap_err(), NotBinaryError { arity: 3 });
    assert_eq!(bfs(&tree), [9, 3, 1, 2]);
}

#[test]
fn plain_vec_storage() {
    let mut tree: VecKaryTree<i32, 2> = KaryTree::new();
    let root = tree.add_root(2);
    tree.add_sub_node(Some(root), 1).unwrap();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [2, 1]);
    let heap: Vec<_> = tree.heapify().unwrap().copied().collect();
    assert_eq!(heap, [1, 2]);
}

#[cfg(feature = "complex")]
#[test]
fn complex_values() {
    use crate::complex::Complex;

    let mut tree: BinaryTree<Complex> = BinaryTree::new();
    let root = tree.add_root(Complex::new(3.0, 4.0));
    let left = tree.add_sub_node(Some(root), Complex::new(1.0, 1.0)).unwrap().unwrap();
    tree.add_sub_node(Some(root), Complex::new(5.0, 12.0)).unwrap();
    tree.add_sub_node(Some(left), Complex::new(0.0, 0.5)).unwrap();

    let heap: Vec<_> = tree.heapify().unwrap().copied().collect();
    assert_eq!(heap[0], Complex::new(0.0, 0.5));
    assert!(algorithms::is_min_heap_by(&heap, |a, b| a < b));
    assert_eq!(tree.to_string(), "0+0.5i\n  1+1i\n    3+4i\n  5+12i\n");
}

#[cfg(feature = "std")]
mod capture {
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::{
        sync::Mutex,
        thread::{self, ThreadId},
    };

    struct CaptureLogger;
    static LOGGER: CaptureLogger = CaptureLogger;
    static RECORDS: Mutex<Vec<(ThreadId, Level, String)>> = Mutex::new(Vec::new());

    impl Log for CaptureLogger {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }
        fn log(&self, record: &Record<'_>) {
            if let Ok(mut records) = RECORDS.lock() {
                records.push((thread::current().id(), record.level(), record.args().to_string()));
            }
        }
        fn flush(&self) {}
    }

    /// Runs `f` and returns the log records it emitted. Tests run on separate threads, so records are told apart by thread.
    pub(super) fn records_of(f: impl FnOnce()) -> Vec<(Level, String)> {
        // Only the first call in the process installs it
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
        let current = thread::current().id();
        RECORDS.lock().unwrap().retain(|(thread, ..)| *thread != current);
        f();
        let mut records = RECORDS.lock().unwrap();
        let ours = records
            .iter()
            .filter(|(thread, ..)| *thread == current)
            .map(|(_, level, message)| (*level, message.clone()))
            .collect();
        records.retain(|(thread, ..)| *thread != current);
        ours
    }
}

#[cfg(feature = "std")]
#[test]
fn failed_insertions_log_warnings() {
    use log::Level;

    let mut tree = sample();
    let root = *tree.root_key().unwrap();
    let records = capture::records_of(|| {
        tree.add_sub_node(Some(root), 6).unwrap_err();
    });
    assert!(records
        .iter()
        .any(|(level, message)| *level == Level::Warn && message.contains("no empty slot")));

    let records = capture::records_of(|| {
        tree.add_sub_node(Some(1000), 7).unwrap_err();
    });
    assert!(records
        .iter()
        .any(|(level, message)| *level == Level::Warn && message.contains("not a node of the tree")));

    let records = capture::records_of(|| {
        let _ = tree.add_sub_node(Some(root), 8);
        tree.add_sub_node(None, 9).unwrap();
    });
    assert_eq!(records.iter().filter(|(level, _)| *level == Level::Warn).count(), 1);
}

#[test]
#[should_panic(expected = "child slots")]
fn node_ref_mut_rejects_out_of_range_slot() {
    let mut tree = sample();
    tree.root_mut().unwrap().nth_child_mut(2);
}

#[test]
#[should_panic(expected = "child slots")]
fn consuming_child_lookup_rejects_out_of_range_slot() {
    let mut tree = sample();
    tree.root_mut().unwrap().into_nth_child(5);
}

#[test]
fn empty_slot_is_none_for_both_handles() {
    let mut tree: TernaryTree<i32> = KaryTree::with_root(1);
    tree.root_mut().unwrap().add_child(2).unwrap();
    assert!(tree.root().unwrap().nth_child(2).is_none());
    assert!(tree.root_mut().unwrap().nth_child_mut(2).is_none());
    assert_eq!(*tree.root_mut().unwrap().into_nth_child(0).unwrap().value(), 2);
}
