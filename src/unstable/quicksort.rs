//! Lomuto quicksort with median-of-three pivot selection.
//!
//! The median-of-three choice defends against the classic quadratic inputs
//! (sorted, reversed, constant) that a fixed last-element pivot degrades on.
//! After partitioning, only the smaller side is sorted recursively; the
//! larger side becomes the next loop iteration, which bounds the auxiliary
//! stack to O(log n) even when every partition is maximally lopsided.

use std::cmp::Ordering;

sort_impl!("quicksort_unstable");

pub fn sort<T: Ord>(v: &mut [T]) {
    quicksort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn quicksort<'a, T, F>(mut v: &'a mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() <= 1 {
            return;
        }

        let pivot_idx = partition(v, is_less);

        // Split around the pivot, recurse into the smaller side and continue
        // the loop with the larger one.
        let (left, rest) = v.split_at_mut(pivot_idx);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` with Lomuto's scheme and returns the pivot's final index.
/// Elements `<= pivot` end up on the left, the rest on the right.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let (lo, mid, hi) = (0, len / 2, len - 1);

    // Median-of-three: order lo/mid/hi, then park the median at the top
    // index where the scan below expects the pivot.
    if is_less(&v[mid], &v[lo]) {
        v.swap(lo, mid);
    }
    if is_less(&v[hi], &v[lo]) {
        v.swap(lo, hi);
    }
    if is_less(&v[hi], &v[mid]) {
        v.swap(mid, hi);
    }
    v.swap(mid, hi);

    let mut store = 0;
    for j in 0..len - 1 {
        // v[j] <= pivot
        if !is_less(&v[hi], &v[j]) {
            v.swap(store, j);
            store += 1;
        }
    }
    v.swap(store, hi);
    store
}
