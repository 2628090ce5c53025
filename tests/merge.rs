use sort_classics::stable::merge;
use sort_test_tools::{
    instantiate_large_sort_tests, instantiate_stable_sort_tests, patterns,
};

type TestSort = merge::SortImpl;

instantiate_stable_sort_tests!(TestSort);
instantiate_large_sort_tests!(TestSort);

#[test]
fn equal_keys_keep_input_order() {
    let mut v = vec![(3, 'a'), (1, 'b'), (3, 'c')];
    merge::sort_by(&mut v, |x, y| x.0.cmp(&y.0));
    assert_eq!(v, [(1, 'b'), (3, 'a'), (3, 'c')]);
}

#[test]
fn caller_scratch_buffer_is_reused() {
    let mut buf: Vec<i32> = Vec::new();

    let mut v = patterns::random(1_000);
    let mut expected = v.clone();
    expected.sort();
    merge::sort_with_buf(&mut v, &mut buf);
    assert_eq!(v, expected);
    assert!(buf.capacity() >= 1_000);

    // A second call of the same size must not grow the buffer again.
    let cap_after_first = buf.capacity();
    let mut w = patterns::descending(1_000);
    merge::sort_with_buf(&mut w, &mut buf);
    assert!(w.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(buf.capacity(), cap_after_first);
}
