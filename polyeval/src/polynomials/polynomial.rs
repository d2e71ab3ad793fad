use std::ops::Index;

use crate::error::{BenchError, Result};

/// Dense polynomial with small integer coefficients, lowest power first.
///
/// `coefficients[i]` is the coefficient of `x^i`. There is always at least one
/// coefficient, so the degree is well defined even for the zero polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<i32>,
}

impl Polynomial {
    /// Builds a polynomial, rejecting an empty coefficient list.
    pub fn from_coefficients(coefficients: Vec<i32>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(BenchError::EmptyPolynomial);
        }
        Ok(Self { coefficients })
    }

    /// Coefficient count minus one, regardless of the leading value.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Raw coefficients, lowest power first.
    #[inline]
    pub fn coefficients(&self) -> &[i32] {
        &self.coefficients
    }

    /// Term-by-term sum, raising `x` to each power from scratch with `powf`.
    ///
    /// Every term calls `powf`; powers are never carried between terms.
    pub fn evaluate_naive(&self, x: f64) -> f64 {
        let mut sum = 0.0;
        for (power, &coefficient) in self.coefficients.iter().enumerate() {
            sum += f64::from(coefficient) * x.powf(power as f64);
        }
        sum
    }

    /// Nested evaluation `(((c_n x + c_{n-1}) x + ...) x + c_0)`.
    pub fn evaluate_horner(&self, x: f64) -> f64 {
        let (leading, rest) = match self.coefficients.split_last() {
            Some(split) => split,
            None => return 0.0,
        };
        rest.iter()
            .rev()
            .fold(f64::from(*leading), |acc, &coefficient| {
                acc * x + f64::from(coefficient)
            })
    }
}

impl Index<usize> for Polynomial {
    type Output = i32;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coefficients[index]
    }
}
