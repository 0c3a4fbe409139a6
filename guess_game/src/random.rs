use rand::{Rng, SeedableRng, rngs::StdRng, rngs::ThreadRng};

use crate::config::GuessRange;

/// Supplies the hidden target. Called exactly once per session.
pub trait TargetSource {
    fn pick(&mut self, range: GuessRange) -> i64;
}

/// Draws targets uniformly from a `rand` generator.
pub struct RngTarget<R: Rng> {
    rng: R,
}

impl<R: Rng> RngTarget<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngTarget<ThreadRng> {
    pub fn thread() -> Self {
        Self::new(rand::rng())
    }
}

impl RngTarget<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TargetSource for RngTarget<R> {
    fn pick(&mut self, range: GuessRange) -> i64 {
        self.rng.random_range(range.low()..=range.high())
    }
}

/// Always returns the same value, clamped into the range.
#[derive(Debug, Clone, Copy)]
pub struct FixedTarget(pub i64);

impl TargetSource for FixedTarget {
    fn pick(&mut self, range: GuessRange) -> i64 {
        self.0.clamp(range.low(), range.high())
    }
}
