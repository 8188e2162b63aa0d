use super::*;
use rand::distributions::Open01;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws on the open interval (0, 1).
///
/// Every transport function takes its source explicitly. Zero is excluded so that
/// `-ln(r)` and `sqrt(r)` are always defined.
pub trait RandomSource {
    fn uniform(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self) -> f64 {
        self.sample(Open01)
    }
}

/// Seed of the `index`-th independent stream derived from a master seed.
pub fn stream_seed(seed: u64, index: u64) -> u64 {
    seed.wrapping_add(index.wrapping_mul(STREAM_SEED_INCREMENT))
}

/// Independent seeded generator for one worker stream.
pub fn stream(seed: u64, index: u64) -> StdRng {
    StdRng::seed_from_u64(stream_seed(seed, index))
}

/// Master seed of the `run_index`-th of several runs sharing one seed.
///
/// Each run consumes `streams_per_run` consecutive stream indices, so the streams of
/// different runs never overlap.
pub fn run_seed(seed: u64, run_index: u64, streams_per_run: u64) -> u64 {
    stream_seed(seed, run_index.wrapping_mul(streams_per_run))
}

/// Draw a master seed when the input file does not fix one.
pub fn entropy_seed() -> u64 {
    rand::thread_rng().gen()
}
