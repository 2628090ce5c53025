use std::cmp::Ordering;

sort_impl!("insertion_stable");

pub fn sort<T: Ord>(v: &mut [T]) {
    insertion_sort(v, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Grows a sorted prefix one element at a time: the key at `i` walks left
/// past every strictly greater element until it reaches its slot. The strict
/// comparison means equal elements are never crossed, keeping the sort
/// stable.
fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}
