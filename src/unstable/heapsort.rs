use std::cmp::Ordering;

sort_impl!("heapsort_unstable");

pub fn sort<T: Ord>(v: &mut [T]) {
    heapsort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    heapsort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// In-place max-heap sort: O(n log n) worst case, O(1) extra space, no
/// adversarial degradation.
fn heapsort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Build the max-heap bottom-up; everything past len / 2 is a leaf.
    for node in (0..len / 2).rev() {
        sift_down(v, node, is_less);
    }

    // Move the root behind the shrinking heap and restore the invariant.
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, is_less);
    }
}

/// Walks `node` down the heap in `v`, swapping with the larger child until
/// the heap property holds or a leaf is reached.
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        let mut child = 2 * node + 1;
        if child >= v.len() {
            return;
        }
        if child + 1 < v.len() && is_less(&v[child], &v[child + 1]) {
            child += 1;
        }
        if !is_less(&v[node], &v[child]) {
            return;
        }
        v.swap(node, child);
        node = child;
    }
}
