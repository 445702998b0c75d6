use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::SeedableRng;
use rand::rngs::StdRng;

const BENCH_SAMPLE_SIZE: usize = 10;
const BENCH_WARMUP_MS: u64 = 80;
const BENCH_MEASURE_MS_SMALL: u64 = 120;
const BENCH_MEASURE_MS_LARGE: u64 = 300;
const BENCH_MEASURE_MS_XL: u64 = 500;
const RNG_SEED: u64 = 0x5EED_2026;

/// Scales measurement time with input size; large inputs switch to flat sampling.
pub fn apply_runtime_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    group.sample_size(BENCH_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(BENCH_WARMUP_MS));
    if size <= 16384 {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(BENCH_MEASURE_MS_SMALL));
    } else if size <= 65536 {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(BENCH_MEASURE_MS_LARGE));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(BENCH_MEASURE_MS_XL));
    }
}

/// Deterministic per-case seed derived from a case id, an input size and a salt.
pub fn seed_for(case: u64, size: usize, salt: u64) -> u64 {
    mix_seed(RNG_SEED ^ (case << 48) ^ (size as u64) ^ salt)
}

pub fn seeded_rng(case: u64, size: usize, salt: u64) -> StdRng {
    StdRng::seed_from_u64(seed_for(case, size, salt))
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
