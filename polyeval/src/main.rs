use std::{io, process::ExitCode};

use anyhow::Result;
use polyeval::{common::trace::configure_tracing, run_sweep, SweepConfig};

fn run() -> Result<()> {
    let config = SweepConfig::default();
    run_sweep(&config, io::stdout().lock())?;
    Ok(())
}

fn main() -> ExitCode {
    configure_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
