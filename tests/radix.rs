use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sort_classics::stable::radix;
use sort_test_tools::patterns;

fn check_i64(mut v: Vec<i64>) {
    let mut expected = v.clone();
    expected.sort();
    radix::sort(&mut v);
    assert_eq!(v, expected);
}

#[test]
fn boundary_inputs() {
    let mut v: Vec<i32> = vec![];
    radix::sort(&mut v);
    assert!(v.is_empty());

    let mut v = vec![42];
    radix::sort(&mut v);
    assert_eq!(v, [42]);
}

#[test]
fn mixed_signs() {
    let mut v = vec![170, -45, 75, -90, 802, 24, 2, 66];
    radix::sort(&mut v);
    assert_eq!(v, [-90, -45, 2, 24, 66, 75, 170, 802]);
}

#[test]
fn all_negative() {
    let mut v = vec![-3, -100, -7, -100, -1];
    radix::sort(&mut v);
    assert_eq!(v, [-100, -100, -7, -3, -1]);
}

#[test]
fn digit_passes_preserve_lower_digit_order() {
    // Multi-digit keys only come out ordered if every counting pass is
    // stable: the tens pass must not disturb what the units pass arranged.
    let mut v = vec![21, 12, 22, 11, 20, 10, 121, 112];
    radix::sort(&mut v);
    assert_eq!(v, [10, 11, 12, 20, 21, 22, 112, 121]);
}

#[test]
fn extreme_magnitudes() {
    // i64::MIN has no positive counterpart; the widened magnitude has to
    // handle it without overflow.
    check_i64(vec![i64::MAX, i64::MIN, 0, -1, 1, i64::MIN + 1, i64::MAX - 1]);
}

#[test]
fn narrow_key_types() {
    let mut v: Vec<i8> = vec![-128, 127, 0, -1, 64, -64, 127, -128];
    radix::sort(&mut v);
    assert_eq!(v, [-128, -128, -64, -1, 0, 64, 127, 127]);

    let mut v: Vec<i16> = vec![300, -300, 0, i16::MIN, i16::MAX];
    radix::sort(&mut v);
    assert_eq!(v, [i16::MIN, -300, 0, 300, i16::MAX]);
}

#[test]
fn random_against_oracle() {
    let mut rng = StdRng::seed_from_u64(patterns::random_init_seed());
    for len in [10, 100, 1_000, 10_000] {
        let mut v: Vec<i64> = (0..len).map(|_| rng.gen()).collect();
        let mut expected = v.clone();
        expected.sort();
        radix::sort(&mut v);
        assert_eq!(v, expected, "seed {}", patterns::random_init_seed());
    }
}

#[test]
fn shared_patterns() {
    for gen in [
        patterns::random as fn(usize) -> Vec<i32>,
        patterns::ascending,
        patterns::descending,
        patterns::all_equal,
        patterns::pipe_organ,
    ] {
        for len in [0, 1, 2, 16, 101, 1_000] {
            let mut v = gen(len);
            let mut expected = v.clone();
            expected.sort();
            radix::sort(&mut v);
            assert_eq!(v, expected);
        }
    }
}

#[test]
fn duplicate_heavy_zipf() {
    let mut v = patterns::random_zipf(5_000, 1.0);
    let mut expected = v.clone();
    expected.sort();
    radix::sort(&mut v);
    assert_eq!(v, expected);
}

#[test]
fn alternate_bases() {
    let mut rng = StdRng::seed_from_u64(patterns::random_init_seed());
    let input: Vec<i32> = (0..2_000).map(|_| rng.gen()).collect();
    let mut expected = input.clone();
    expected.sort();

    for base in [2, 8, 16, 256] {
        let mut v = input.clone();
        radix::sort_with_base(&mut v, base);
        assert_eq!(v, expected, "base {base}");
    }
}

#[test]
#[should_panic(expected = "radix base must be at least 2")]
fn rejects_degenerate_base() {
    radix::sort_with_base(&mut [1, 2, 3], 1);
}
