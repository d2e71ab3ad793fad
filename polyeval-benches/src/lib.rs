//! Shared fixtures for the criterion benches.

use polyeval::{Polynomial, RandomGenerator};

/// Degrees benchmarked, a coarser version of the sweep.
pub const DEGREES: [usize; 5] = [10, 100, 250, 500, 1000];

/// Reproducible polynomial and point for `degree`.
pub fn fixture(degree: usize) -> (Polynomial, f64) {
    let mut generator = RandomGenerator::from_seed(degree as u64);
    let polynomial = generator.create_polynomial(degree);
    let x = generator.next_evaluation_point();
    (polynomial, x)
}
