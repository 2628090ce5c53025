//! Deterministic input pattern generators.
//!
//! All generators derive from one process-wide seed so a failing run can be
//! reproduced by setting `OVERRIDE_SEED=<seed>` in the environment.

use once_cell::sync::OnceCell;
use rand::distributions::uniform::SampleRange;
use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zipf::ZipfDistribution;

static SEED: OnceCell<u64> = OnceCell::new();

/// Seed used by all random patterns, resolved once per process.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| match std::env::var("OVERRIDE_SEED") {
        Ok(val) => val.parse().expect("invalid OVERRIDE_SEED value"),
        Err(_) => rand::thread_rng().gen(),
    })
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Uniformly random values over the full `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly random values restricted to `range`. Narrow ranges produce
/// duplicate-heavy inputs.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: SampleRange<i32> + Clone,
{
    let mut rng = rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Zipfian distributed values: low values vastly over-represented, a long
/// tail of rare ones.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let mut rng = rng();
    let dist = ZipfDistribution::new(1_000, exponent).expect("invalid zipf exponent");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Alternating ascending and descending runs, `saw_count` of them in total.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }
    let saw_length = (len / saw_count.max(1)).max(1);
    let mut v = Vec::with_capacity(len);
    let mut up = true;
    while v.len() < len {
        let run = saw_length.min(len - v.len()) as i32;
        if up {
            v.extend(0..run);
        } else {
            v.extend((0..run).rev());
        }
        up = !up;
    }
    v
}

/// First half ascending, second half descending.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mid = len / 2;
    let mut v: Vec<i32> = (0..mid as i32).collect();
    v.extend((0..(len - mid) as i32).rev());
    v
}
