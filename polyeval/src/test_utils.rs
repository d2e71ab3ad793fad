use proptest::{collection::vec, prelude::*};

use crate::polynomials::Polynomial;

/// Coefficient range used by the generator and by the strategies below.
pub const COEFFICIENT_RANGE: std::ops::RangeInclusive<i32> = -10..=10;

/// Coefficient vectors of degree `0..=max_degree` drawn from [`COEFFICIENT_RANGE`].
pub fn arb_coefficients(max_degree: usize) -> impl Strategy<Value = Vec<i32>> {
    vec(COEFFICIENT_RANGE, 1..=max_degree + 1)
}

/// Polynomials of degree at most `max_degree`.
pub fn arb_polynomial(max_degree: usize) -> impl Strategy<Value = Polynomial> {
    arb_coefficients(max_degree).prop_map(|coefficients| {
        Polynomial::from_coefficients(coefficients).expect("strategy never yields an empty vec")
    })
}

/// Evaluation points in the same band the generator draws from.
pub fn arb_point() -> impl Strategy<Value = f64> {
    -10.0f64..=10.0
}

/// Scale against which the two evaluation orders are compared: the sum of the
/// absolute values of every term. Cancellation can make the value itself tiny,
/// so a relative bound on the value alone is meaningless.
pub fn term_magnitude(polynomial: &Polynomial, x: f64) -> f64 {
    polynomial
        .coefficients()
        .iter()
        .enumerate()
        .map(|(power, &c)| f64::from(c).abs() * x.abs().powi(power as i32))
        .sum()
}
