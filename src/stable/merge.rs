//! Top-down merge sort.
//!
//! The slice is split at the midpoint, both halves are sorted recursively
//! and merged through one scratch buffer that is allocated once per
//! top-level call and reused across every merge. Ties take the left element,
//! which is what makes the sort stable. O(n log n) time, O(n) extra space,
//! O(log n) recursion depth.

use std::cmp::Ordering;

sort_impl!("merge_stable");

pub fn sort<T: Ord + Clone>(v: &mut [T]) {
    let mut buf = Vec::with_capacity(v.len());
    merge_sort(v, &mut buf, &mut |a, b| a.lt(b));
}

pub fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    let mut buf = Vec::with_capacity(v.len());
    merge_sort(v, &mut buf, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts with a caller-supplied scratch buffer, so repeated calls share one
/// allocation. The buffer is cleared and grown to the slice length if it is
/// too small; its contents afterwards are unspecified.
pub fn sort_with_buf<T: Ord + Clone>(v: &mut [T], buf: &mut Vec<T>) {
    buf.clear();
    buf.reserve(v.len());
    merge_sort(v, buf, &mut |a, b| a.lt(b));
}

fn merge_sort<T: Clone, F>(v: &mut [T], buf: &mut Vec<T>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return;
    }
    let mid = len / 2;
    merge_sort(&mut v[..mid], buf, is_less);
    merge_sort(&mut v[mid..], buf, is_less);
    merge(v, mid, buf, is_less);
}

/// Merges the sorted halves `v[..mid]` and `v[mid..]` back into `v`.
fn merge<T: Clone, F>(v: &mut [T], mid: usize, buf: &mut Vec<T>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // The halves are already in order across the split point, nothing to do.
    if !is_less(&v[mid], &v[mid - 1]) {
        return;
    }

    buf.clear();
    buf.extend_from_slice(v);
    let (left, right) = buf.split_at(mid);

    let mut i = 0;
    let mut j = 0;
    for slot in v.iter_mut() {
        // Take from the left on ties to preserve the relative order of equal
        // elements.
        if j == right.len() || (i < left.len() && !is_less(&right[j], &left[i])) {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
