use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws for randomized bar widths.
pub trait RandomSource {
    /// A value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Draws from rand's thread-local generator. Used by the components.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// A reproducible source seeded from a fixed value.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}
