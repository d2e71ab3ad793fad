use std::{fs::File, path::Path};

use csv::{Writer, WriterBuilder};
use tracing::info;

use crate::{
    analyzer::ComparisonResult,
    error::{BenchError, Result},
};

/// Column names of the results file.
pub const CSV_HEADER: [&str; 3] = ["grado", "tiempo_tradicional_ns", "tiempo_optimizado_ns"];

/// Appends one CSV row per [`ComparisonResult`] to a results file.
///
/// The file is created (or truncated) on construction and the header is
/// written straight away. Dropping the logger flushes what it can and closes
/// the handle; call [`ResultLogger::finish`] to see flush errors.
#[derive(Debug)]
pub struct ResultLogger {
    writer: Writer<File>,
    rows: usize,
}

impl ResultLogger {
    /// Creates or truncates `path` and writes the header row.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| BenchError::OpenOutput {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(CSV_HEADER)?;
        info!(path = %path.display(), "opened results file");
        Ok(Self { writer, rows: 0 })
    }

    /// Appends `degree,naive_time_ns,horner_time_ns`.
    pub fn record(&mut self, result: &ComparisonResult) -> Result<()> {
        self.writer.serialize(result)?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes and closes the file, surfacing any flush error.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        info!(rows = self.rows, "results file written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn result(degree: usize, naive: u64, horner: u64) -> ComparisonResult {
        ComparisonResult {
            degree,
            naive_time_ns: naive,
            horner_time_ns: horner,
        }
    }

    #[test]
    fn writes_header_then_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resultados.csv");

        let mut logger = ResultLogger::create(&path).unwrap();
        logger.record(&result(10, 812, 35)).unwrap();
        logger.record(&result(20, 1630, 61)).unwrap();
        assert_eq!(logger.rows(), 2);
        logger.finish().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "grado,tiempo_tradicional_ns,tiempo_optimizado_ns\n10,812,35\n20,1630,61\n"
        );
    }

    #[test]
    fn header_is_written_even_without_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        drop(ResultLogger::create(&path).unwrap());

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "grado,tiempo_tradicional_ns,tiempo_optimizado_ns\n"
        );
    }

    #[test]
    fn existing_file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resultados.csv");
        fs::write(&path, "stale\nstale\nstale\n").unwrap();

        let mut logger = ResultLogger::create(&path).unwrap();
        logger.record(&result(10, 1, 1)).unwrap();
        logger.finish().unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn unopenable_path_reports_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("resultados.csv");

        let err = ResultLogger::create(&path).unwrap_err();

        assert!(matches!(err, BenchError::OpenOutput { .. }));
        assert!(err.to_string().starts_with("could not open file for writing"));
    }
}
