//! Test support for the sorting modules: the [`Sort`] facade trait, input
//! pattern generators and a shared correctness battery that each sort
//! instantiates via the `instantiate_sort_tests!` macro family.

pub mod patterns;
pub mod tests;

#[doc(hidden)]
pub use paste;

/// Uniform facade over one sorting implementation, so the shared battery can
/// be instantiated per sort.
///
/// The `Clone` bound exists for the sorts that fill a scratch buffer (merge);
/// the in-place sorts ignore it.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

#[doc(hidden)]
#[macro_export]
macro_rules! instantiate_sort_test_battery {
    ($sort_impl:ty, $($test_fn:ident),+ $(,)?) => {
        $(
            $crate::paste::paste! {
                #[test]
                fn [<test_ $test_fn>]() {
                    $crate::tests::$test_fn::<$sort_impl>();
                }
            }
        )+
    };
}

/// Instantiates the correctness battery for one [`Sort`] implementation.
#[macro_export]
macro_rules! instantiate_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_battery!(
            $sort_impl,
            basic,
            fixed,
            random,
            random_uniform,
            random_zipf,
            ascending,
            descending,
            all_equal,
            saw_mixed,
            pipe_organ,
            idempotent,
            permutation,
            sort_by_reverse,
        );
    };
}

/// The correctness battery plus the stability check. Only for sorts that
/// guarantee equal elements keep their input order.
#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!($sort_impl);
        $crate::instantiate_sort_test_battery!($sort_impl, stability);
    };
}

/// Extra battery over larger inputs. Only for sorts with sub-quadratic
/// runtime; sizes grow further with the `large_test_sizes` feature.
#[macro_export]
macro_rules! instantiate_large_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_test_battery!($sort_impl, random_large, pipe_organ_large);
    };
}
