//! Bucket sort for the floating point types.
//!
//! Values are scattered into `n` range-partitioned buckets, each bucket is
//! sorted on its own and the buckets are drained back into the caller's
//! slice in index order. Near-linear on uniformly distributed input.
//!
//! Policy decisions: the bucket count equals the input length; the scatter
//! index divides by `range + INDEX_EPSILON` and is clamped, so a value equal
//! to the maximum stays in bounds; a zero spread (all values equal) skips
//! distribution entirely. Buckets below [`INSERTION_THRESHOLD`] elements are
//! insertion sorted, larger ones fall back to the standard library sort.
//! In-bucket comparisons use the IEEE-754 total order, so NaN values cannot
//! break the sort; they gather in the lowest bucket and their final position
//! is unspecified.

use std::cmp::Ordering;

/// Buckets at most this long are insertion sorted.
const INSERTION_THRESHOLD: usize = 32;

/// Keeps the scatter index of the maximum value below the bucket count.
const INDEX_EPSILON: f64 = 1e-6;

/// Sorting key for [`sort`]. Sealed; implemented for `f32` and `f64`.
pub trait BucketKey: Copy + PartialOrd + private::Sealed {
    fn to_f64(self) -> f64;

    /// IEEE-754 total order, total even for NaN.
    fn total_order(self, other: Self) -> Ordering;
}

macro_rules! impl_bucket_key {
    ($($t:ty)*) => {$(
        impl BucketKey for $t {
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn total_order(self, other: Self) -> Ordering {
                self.total_cmp(&other)
            }
        }

        impl private::Sealed for $t {}
    )*};
}

impl_bucket_key! { f32 f64 }

mod private {
    pub trait Sealed {}
}

/// Sorts the slice ascending. The ordering is written back into the caller's
/// storage; the buckets live only for the duration of the call.
pub fn sort<K: BucketKey>(v: &mut [K]) {
    let n = v.len();
    if n <= 1 {
        return;
    }

    let mut min = v[0];
    let mut max = v[0];
    for &x in &v[1..] {
        if x < min {
            min = x;
        }
        if x > max {
            max = x;
        }
    }

    let range = max.to_f64() - min.to_f64();
    // Zero spread: every value equals every other, nothing to distribute.
    // This also catches a slice whose extremes are NaN.
    if !(range > 0.0) {
        return;
    }

    let bucket_count = n;
    let mut buckets: Vec<Vec<K>> = vec![Vec::new(); bucket_count];
    let min_f = min.to_f64();
    let scale = bucket_count as f64 / (range + INDEX_EPSILON);
    for &x in v.iter() {
        // The cast saturates, so NaN maps to bucket zero instead of anywhere
        // out of bounds.
        let idx = ((x.to_f64() - min_f) * scale) as usize;
        buckets[idx.min(bucket_count - 1)].push(x);
    }

    let mut out = 0;
    for bucket in &mut buckets {
        if bucket.len() <= INSERTION_THRESHOLD {
            insertion_sort(bucket);
        } else {
            bucket.sort_unstable_by(|a, b| a.total_order(*b));
        }
        for &x in bucket.iter() {
            v[out] = x;
            out += 1;
        }
    }
}

fn insertion_sort<K: BucketKey>(bucket: &mut [K]) {
    for i in 1..bucket.len() {
        let mut j = i;
        while j > 0 && bucket[j].total_order(bucket[j - 1]) == Ordering::Less {
            bucket.swap(j - 1, j);
            j -= 1;
        }
    }
}
