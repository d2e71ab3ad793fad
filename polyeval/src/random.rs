use rand::{
    distributions::{Distribution, Uniform},
    rngs::StdRng,
    SeedableRng,
};
use tracing::trace;

use crate::polynomials::Polynomial;

/// Points closer to zero than this are redrawn.
pub const MIN_POINT_MAGNITUDE: f64 = 1e-10;

/// Source of random benchmark inputs.
///
/// Each instance owns its own PRNG; nothing here is global.
#[derive(Debug)]
pub struct RandomGenerator {
    rng: StdRng,
    coefficients: Uniform<i32>,
    points: Uniform<f64>,
}

impl RandomGenerator {
    /// Seeds from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic generator, handy for reproducing a run.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            coefficients: Uniform::new_inclusive(-10, 10),
            points: Uniform::new_inclusive(-10.0, 10.0),
        }
    }

    /// `degree + 1` coefficients, each uniform in `[-10, 10]`.
    pub fn create_polynomial(&mut self, degree: usize) -> Polynomial {
        let coefficients: Vec<i32> = (0..=degree)
            .map(|_| self.coefficients.sample(&mut self.rng))
            .collect();
        // at least one coefficient by construction
        Polynomial::from_coefficients(coefficients)
            .unwrap_or_else(|_| unreachable!("0..=degree is never empty"))
    }

    /// Uniform point in `[-10, 10]`, redrawn until `|x| >= MIN_POINT_MAGNITUDE`.
    pub fn next_evaluation_point(&mut self) -> f64 {
        loop {
            let x = self.points.sample(&mut self.rng);
            if x.abs() >= MIN_POINT_MAGNITUDE {
                return x;
            }
            trace!(x, "rejected near-zero evaluation point");
        }
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}
