#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unreachable_pub)]

//! polyeval: times naive term-by-term polynomial evaluation against Horner's
//! method over a sweep of random polynomials.

/// timing of the two strategies
pub mod analyzer;
/// process-wide setup
pub mod common;
/// error type
pub mod error;
/// csv output
pub mod logger;
/// the polynomial and its two evaluation strategies
pub mod polynomials;
/// random inputs
pub mod random;
/// degree sweep driver
pub mod sweep;
/// stdout table
pub mod table;

/// Test utilities.
#[cfg(any(test, feature = "test_utils"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test_utils")))]
pub mod test_utils;

pub use analyzer::{ComparisonResult, EvaluationMethod, PerformanceAnalyzer};
pub use error::{BenchError, Result};
pub use logger::ResultLogger;
pub use polynomials::Polynomial;
pub use random::RandomGenerator;
pub use sweep::{run_sweep, SweepConfig};
