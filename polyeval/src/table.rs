use std::io::Write;

use crate::{analyzer::ComparisonResult, error::Result};

const DEGREE_WIDTH: usize = 12;
const TIME_WIDTH: usize = 20;
/// Three `"| "` separators plus the closing `|`, minus the two corners.
const RULE_WIDTH: usize = DEGREE_WIDTH + 2 * TIME_WIDTH + 5;

/// Bordered, left-aligned comparison table.
#[derive(Debug)]
pub struct ResultTable<W> {
    out: W,
}

impl<W: Write> ResultTable<W> {
    /// Wraps `out`; nothing is written until [`ResultTable::print_header`].
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Top rule, column titles and the rule under them.
    pub fn print_header(&mut self) -> Result<()> {
        self.print_rule()?;
        self.print_cells("Grado", "Tiempo Estandar (ns)", "Tiempo Horner (ns)")?;
        self.print_rule()
    }

    /// One line per degree.
    pub fn print_row(&mut self, result: &ComparisonResult) -> Result<()> {
        self.print_cells(result.degree, result.naive_time_ns, result.horner_time_ns)
    }

    /// Bottom rule; also flushes.
    pub fn print_footer(&mut self) -> Result<()> {
        self.print_rule()?;
        self.out.flush()?;
        Ok(())
    }

    /// Gives the writer back.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_rule(&mut self) -> Result<()> {
        writeln!(self.out, "+{}+", "-".repeat(RULE_WIDTH))?;
        Ok(())
    }

    fn print_cells(
        &mut self,
        degree: impl std::fmt::Display,
        naive: impl std::fmt::Display,
        horner: impl std::fmt::Display,
    ) -> Result<()> {
        writeln!(
            self.out,
            "| {:<dw$}| {:<tw$}| {:<tw$}|",
            degree,
            naive,
            horner,
            dw = DEGREE_WIDTH,
            tw = TIME_WIDTH
        )?;
        Ok(())
    }
}
