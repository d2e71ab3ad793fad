use std::{io::Write, path::PathBuf};

use tracing::info;

use crate::{
    analyzer::{ComparisonResult, PerformanceAnalyzer},
    error::{BenchError, Result},
    logger::ResultLogger,
    table::ResultTable,
};

/// First degree measured.
pub const START_DEGREE: usize = 10;
/// Last degree measured (inclusive).
pub const END_DEGREE: usize = 1000;
/// Distance between measured degrees.
pub const DEGREE_STEP: usize = 10;
/// Evaluations timed per method and degree.
pub const REPETITIONS: u32 = 1000;
/// Results file, relative to the working directory.
pub const OUTPUT_PATH: &str = "resultados.csv";

/// Parameters of a degree sweep. The binary always runs [`SweepConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// First degree measured.
    pub start_degree: usize,
    /// Last degree measured, inclusive.
    pub end_degree: usize,
    /// Increment between degrees.
    pub step: usize,
    /// Timed evaluations per method and degree.
    pub repetitions: u32,
    /// Where the CSV goes.
    pub output_path: PathBuf,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_degree: START_DEGREE,
            end_degree: END_DEGREE,
            step: DEGREE_STEP,
            repetitions: REPETITIONS,
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl SweepConfig {
    /// Rejects a zero step, reversed bounds and zero repetitions.
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(BenchError::InvalidSweep("step must be non-zero".into()));
        }
        if self.start_degree > self.end_degree {
            return Err(BenchError::InvalidSweep(format!(
                "start degree {} is past end degree {}",
                self.start_degree, self.end_degree
            )));
        }
        if self.repetitions == 0 {
            return Err(BenchError::ZeroRepetitions);
        }
        Ok(())
    }

    /// Degrees visited, in order.
    pub fn degrees(&self) -> impl Iterator<Item = usize> {
        (self.start_degree..=self.end_degree).step_by(self.step.max(1))
    }
}

/// Runs the sweep: one comparison per degree, printed to `out` as a table and
/// appended to the CSV at `config.output_path`.
///
/// The CSV is opened before anything is printed, so an unwritable path fails
/// without producing partial output.
pub fn run_sweep<W: Write>(config: &SweepConfig, out: W) -> Result<Vec<ComparisonResult>> {
    config.validate()?;
    let mut logger = ResultLogger::create(&config.output_path)?;
    let mut table = ResultTable::new(out);

    info!(
        start = config.start_degree,
        end = config.end_degree,
        step = config.step,
        repetitions = config.repetitions,
        "starting sweep"
    );

    table.print_header()?;
    let mut results = Vec::new();
    for degree in config.degrees() {
        let result = PerformanceAnalyzer::compare(degree, config.repetitions)?;
        table.print_row(&result)?;
        logger.record(&result)?;
        results.push(result);
    }
    table.print_footer()?;
    logger.finish()?;

    let mut out = table.into_inner();
    writeln!(
        out,
        "Analisis completado y resultados guardados en '{}'",
        config.output_path.display()
    )?;

    if let Some(last) = results.last() {
        info!(
            degrees = results.len(),
            last_degree = last.degree,
            last_speedup = last.speedup(),
            "sweep finished"
        );
    }
    Ok(results)
}
