//! Pivot-partition sort used for catalog listings.
//!
//! Lomuto partitioning: the last element of the active range is the pivot, every
//! element that compares less than or equal to it is swapped into a growing low
//! partition, and the pivot is then swapped into its final slot. The sort is not
//! stable; equal keys may come out in any relative order.

use std::cmp::Ordering;

/// Sort `items` in place, ascending according to `compare`.
///
/// Average O(n log n), worst case O(n²) on already ordered input. The smaller
/// partition is handled recursively and the larger one in a loop, so the call
/// depth stays O(log n) even in the worst case.
pub fn quick_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range(items, &mut compare);
}

fn sort_range<T, F>(mut items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while items.len() > 1 {
        let pivot = partition(items, compare);
        let (low, rest) = std::mem::take(&mut items).split_at_mut(pivot);
        let high = &mut rest[1..];

        if low.len() < high.len() {
            sort_range(low, compare);
            items = high;
        } else {
            sort_range(high, compare);
            items = low;
        }
    }
}

/// Partition around the last element and return the pivot's final index.
fn partition<T, F>(items: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = items.len() - 1;
    let mut store = 0;

    for i in 0..last {
        if compare(&items[i], &items[last]) != Ordering::Greater {
            items.swap(i, store);
            store += 1;
        }
    }

    items.swap(store, last);
    store
}
