use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can go wrong while running a comparison sweep.
#[derive(Debug, Error)]
pub enum BenchError {
    /// The results file could not be created or truncated.
    #[error("could not open file for writing: {}", path.display())]
    OpenOutput {
        /// Path we tried to open.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },
    /// Writing or flushing a CSV row failed.
    #[error("failed to write results row")]
    Csv(#[from] csv::Error),
    /// Writing the comparison table failed.
    #[error("failed to write comparison table")]
    Io(#[from] io::Error),
    /// A timing run was requested with zero repetitions.
    #[error("repetitions must be greater than zero")]
    ZeroRepetitions,
    /// A polynomial needs at least one coefficient.
    #[error("a polynomial needs at least one coefficient")]
    EmptyPolynomial,
    /// The degree sweep bounds make no sense.
    #[error("invalid sweep configuration: {0}")]
    InvalidSweep(String),
}

/// Result alias used across the crate.
pub type Result<T, E = BenchError> = std::result::Result<T, E>;
