//! LSD radix sort for the primitive signed integers.
//!
//! Values are split into negatives and non-negatives, each group is ordered
//! by magnitude through repeated stable counting sorts on successive digits,
//! the negative group is reversed (ascending magnitude reads back as
//! descending value) and the groups are concatenated into the caller's
//! slice. O((n + base) * digits) time, O(n + base) extra space.

/// Sorting key for [`sort`]: a signed integer up to 64 bits. Sealed;
/// implemented for `i8`, `i16`, `i32`, `i64` and `isize`.
pub trait RadixKey: Copy + private::Sealed {
    fn is_negative(self) -> bool;

    /// Absolute value widened to `u64`, so it is well-defined for `MIN`.
    fn magnitude(self) -> u64;
}

macro_rules! impl_radix_key {
    ($($t:ty)*) => {$(
        impl RadixKey for $t {
            #[inline]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            fn magnitude(self) -> u64 {
                self.unsigned_abs() as u64
            }
        }

        impl private::Sealed for $t {}
    )*};
}

impl_radix_key! { i8 i16 i32 i64 isize }

mod private {
    pub trait Sealed {}
}

/// Sorts the slice ascending in base 10.
pub fn sort<K: RadixKey>(v: &mut [K]) {
    sort_with_base(v, 10);
}

/// Sorts the slice ascending, processing `base` digit values per counting
/// pass. Larger bases trade counting-table space for fewer passes.
///
/// # Panics
///
/// Panics if `base < 2`.
pub fn sort_with_base<K: RadixKey>(v: &mut [K], base: u64) {
    assert!(base >= 2, "radix base must be at least 2");
    if v.len() <= 1 {
        return;
    }

    // Split before any write to `v`; order within each group is preserved.
    let mut negatives = Vec::new();
    let mut non_negatives = Vec::new();
    for &x in v.iter() {
        if x.is_negative() {
            negatives.push(x);
        } else {
            non_negatives.push(x);
        }
    }

    sort_by_magnitude(&mut negatives, base);
    sort_by_magnitude(&mut non_negatives, base);

    // Ascending magnitude means descending value for the negatives.
    negatives.reverse();

    v[..negatives.len()].copy_from_slice(&negatives);
    v[negatives.len()..].copy_from_slice(&non_negatives);
}

/// Orders `v` by ascending magnitude: one stable counting pass per digit,
/// least significant first, until the largest magnitude runs out of digits.
fn sort_by_magnitude<K: RadixKey>(v: &mut [K], base: u64) {
    let max = match v.iter().map(|x| x.magnitude()).max() {
        Some(max) => max,
        None => return,
    };

    let mut output = v.to_vec();
    let mut counts = vec![0usize; base as usize];

    let mut exp = 1u64;
    while max / exp > 0 {
        counting_pass(v, &mut output, &mut counts, exp, base);
        v.copy_from_slice(&output);
        exp = match exp.checked_mul(base) {
            Some(next) => next,
            // The next digit position exceeds u64, so every magnitude is
            // already exhausted.
            None => break,
        };
    }
}

fn counting_pass<K: RadixKey>(
    v: &[K],
    output: &mut [K],
    counts: &mut [usize],
    exp: u64,
    base: u64,
) {
    let digit = |x: &K| ((x.magnitude() / exp) % base) as usize;

    counts.fill(0);
    for x in v {
        counts[digit(x)] += 1;
    }
    for d in 1..counts.len() {
        counts[d] += counts[d - 1];
    }

    // Scatter right-to-left off the cumulative counts: elements with equal
    // digits keep the order the previous pass gave them. Walking
    // left-to-right here would break the sort for multi-digit keys.
    for x in v.iter().rev() {
        let d = digit(x);
        counts[d] -= 1;
        output[counts[d]] = *x;
    }
}
