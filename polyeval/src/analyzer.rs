use std::{hint::black_box, time::Instant};

use serde::Serialize;
use tracing::debug;

use crate::{
    error::{BenchError, Result},
    polynomials::Polynomial,
    random::RandomGenerator,
};

/// Which evaluation strategy to time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationMethod {
    /// Term-by-term with `powf`.
    Naive,
    /// Horner's nested multiplication.
    Horner,
}

impl EvaluationMethod {
    /// Runs the strategy once.
    #[inline]
    pub fn evaluate(self, polynomial: &Polynomial, x: f64) -> f64 {
        match self {
            EvaluationMethod::Naive => polynomial.evaluate_naive(x),
            EvaluationMethod::Horner => polynomial.evaluate_horner(x),
        }
    }
}

/// Average time per call of both strategies at one degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    /// Polynomial degree.
    pub degree: usize,
    /// Average ns per naive evaluation.
    pub naive_time_ns: u64,
    /// Average ns per Horner evaluation.
    pub horner_time_ns: u64,
}

impl ComparisonResult {
    /// How many times faster Horner was. Infinite if it rounded down to 0ns.
    pub fn speedup(&self) -> f64 {
        if self.horner_time_ns == 0 {
            return f64::INFINITY;
        }
        self.naive_time_ns as f64 / self.horner_time_ns as f64
    }
}

/// Wall-clock timing of the evaluation strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceAnalyzer;

impl PerformanceAnalyzer {
    /// Average nanoseconds per call of `method` over `repetitions` calls.
    ///
    /// Results are discarded. The division truncates.
    pub fn measure(
        polynomial: &Polynomial,
        x: f64,
        method: EvaluationMethod,
        repetitions: u32,
    ) -> Result<u64> {
        if repetitions == 0 {
            return Err(BenchError::ZeroRepetitions);
        }
        // dispatch once, outside the clock
        let elapsed = match method {
            EvaluationMethod::Naive => {
                time_repeated(repetitions, || polynomial.evaluate_naive(black_box(x)))
            }
            EvaluationMethod::Horner => {
                time_repeated(repetitions, || polynomial.evaluate_horner(black_box(x)))
            }
        };
        let per_call = elapsed / u128::from(repetitions);
        Ok(u64::try_from(per_call).unwrap_or(u64::MAX))
    }

    /// Times both strategies on one fresh random polynomial of `degree` and
    /// one fresh random point.
    pub fn compare(degree: usize, repetitions: u32) -> Result<ComparisonResult> {
        let mut generator = RandomGenerator::new();
        let polynomial = generator.create_polynomial(degree);
        let x = generator.next_evaluation_point();

        let naive_time_ns = Self::measure(&polynomial, x, EvaluationMethod::Naive, repetitions)?;
        let horner_time_ns = Self::measure(&polynomial, x, EvaluationMethod::Horner, repetitions)?;

        let result = ComparisonResult {
            degree,
            naive_time_ns,
            horner_time_ns,
        };
        debug!(
            degree,
            x,
            naive_time_ns,
            horner_time_ns,
            speedup = result.speedup(),
            "measured degree"
        );
        Ok(result)
    }
}

/// Elapsed nanoseconds for `repetitions` calls of `f`.
#[inline(always)]
fn time_repeated<F: FnMut() -> f64>(repetitions: u32, mut f: F) -> u128 {
    let start = Instant::now();
    for _ in 0..repetitions {
        black_box(f());
    }
    start.elapsed().as_nanos()
}
