use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A seeded, reproducible source of uniform draws.
///
/// The stream is owned by the caller and lent mutably to whichever component
/// needs draws. Two streams built from the same seed yield the same sequence as
/// long as the draws happen in the same order. Streams are not `Clone`;
/// independent streams must be seeded up front.
#[derive(Debug)]
pub struct RandomStream {
    seed: u64,
    rng: StdRng,
}

impl RandomStream {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the seed this stream was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws the next uniform value in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// Draws the next uniform value in the half-open range `[lower, upper)`.
    ///
    /// Callers must ensure `lower < upper`.
    #[inline]
    pub fn uniform(&mut self, lower: f64, upper: f64) -> f64 {
        self.rng.gen_range(lower..upper)
    }
}
