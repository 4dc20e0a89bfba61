use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Entropy for challenge generation and random mode resolution.
pub trait RandomSource {
    /// Uniform integer in `low..high_exclusive`.
    fn next_int(&mut self, low: i32, high_exclusive: i32) -> i32;
}

/// Production source backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sequence, for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_int(&mut self, low: i32, high_exclusive: i32) -> i32 {
        self.rng.gen_range(low..high_exclusive)
    }
}

/// Test source that replays a fixed script of values, cycling when exhausted.
///
/// Values are clamped into the requested range so a script stays valid
/// whatever the caller asks for.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<i32>,
    pos: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, pos: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_int(&mut self, low: i32, high_exclusive: i32) -> i32 {
        let value = match self.values.get(self.pos % self.values.len().max(1)) {
            Some(v) => *v,
            None => low,
        };
        self.pos += 1;
        value.clamp(low, high_exclusive - 1)
    }
}
