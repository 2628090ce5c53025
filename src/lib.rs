//! Self-contained implementations of the classical sorting algorithms, one
//! module per algorithm, all sharing the same contract: sort a finite
//! sequence ascending, in place, and return when done. No algorithm depends
//! on any other.
//!
//! The comparison sorts are generic over the element type and expose a
//! `sort`/`sort_by` pair. The distribution sorts are keyed on primitives
//! instead of a comparator: [`stable::radix`] on the signed integers,
//! [`unstable::bucket`] on the floating point types.

#![forbid(unsafe_code)]

// Generates the `SortImpl` facade each comparison-sort module exposes for
// the shared test battery.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }

            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod stable;
pub mod unstable;
