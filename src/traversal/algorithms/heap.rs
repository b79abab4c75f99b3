/// Returns the positions of the children of the element at `index` in an array-backed binary heap.
#[inline(always)]
pub const fn heap_children(index: usize) -> (usize, usize) {
    (2 * index + 1, 2 * index + 2)
}

/// Rearranges the elements of the slice into min-heap order, where every element at index `i` is not greater than the elements at the indices returned by [`heap_children`]`(i)`.
///
/// `less` must return `true` if the first argument should be closer to the top of the heap than the second one. Runs in linear time (bottom-up heap construction). Elements which `less` cannot order against each other are left in an unspecified, but valid, permutation.
///
/// [`heap_children`]: fn.heap_children.html " "
pub fn build_min_heap_by<E, F>(elements: &mut [E], mut less: F)
where
    F: FnMut(&E, &E) -> bool,
{
    let len = elements.len();
    for index in (0..len / 2).rev() {
        sift_down(elements, index, &mut less);
    }
}

/// Rearranges the elements of the slice into min-heap order by their `PartialOrd` implementation.
///
/// See [`build_min_heap_by`] for details.
///
/// [`build_min_heap_by`]: fn.build_min_heap_by.html " "
#[inline]
pub fn build_min_heap<E: PartialOrd>(elements: &mut [E]) {
    build_min_heap_by(elements, |a, b| a < b)
}

/// Returns `true` if the slice satisfies the min-heap property, `false` otherwise.
pub fn is_min_heap_by<E, F>(elements: &[E], mut less: F) -> bool
where
    F: FnMut(&E, &E) -> bool,
{
    (0..elements.len()).all(|index| {
        let (left, right) = heap_children(index);
        [left, right]
            .iter()
            .filter_map(|&child| elements.get(child))
            .all(|child| !less(child, &elements[index]))
    })
}

fn sift_down<E, F>(elements: &mut [E], mut index: usize, less: &mut F)
where
    F: FnMut(&E, &E) -> bool,
{
    let len = elements.len();
    loop {
        let (left, right) = heap_children(index);
        let mut smallest = index;
        if left < len && less(&elements[left], &elements[smallest]) {
            smallest = left;
        }
        if right < len && less(&elements[right], &elements[smallest]) {
            smallest = right;
        }
        if smallest == index {
            return;
        }
        elements.swap(index, smallest);
        index = smallest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn builds_heap_from_descending_input() {
        let mut elements = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
        build_min_heap(&mut elements);
        assert_eq!(elements[0], 1);
        assert!(is_min_heap_by(&elements, |a, b| a < b));
    }

    #[test]
    fn keeps_sorted_input() {
        let mut elements = vec![1, 2, 3, 4, 5];
        build_min_heap(&mut elements);
        assert_eq!(elements, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn handles_duplicates_and_tiny_inputs() {
        let mut empty: [u8; 0] = [];
        build_min_heap(&mut empty);
        let mut single = [42];
        build_min_heap(&mut single);
        assert_eq!(single, [42]);
        let mut duplicates = vec![3, 3, 1, 3, 1];
        build_min_heap(&mut duplicates);
        assert_eq!(duplicates[0], 1);
        assert!(is_min_heap_by(&duplicates, |a, b| a < b));
    }

    #[test]
    fn detects_broken_heap() {
        assert!(!is_min_heap_by(&[2, 1, 3], |a, b| a < b));
        assert!(is_min_heap_by(&[1, 3, 2, 4], |a, b| a < b));
    }
}
