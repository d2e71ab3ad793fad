use tracing::metadata::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Anything noisier would interleave with the table on a shared terminal.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Installs a compact stderr subscriber filtered by `RUST_LOG`.
pub fn configure_tracing() {
    let fmt_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_writer(std::io::stderr);
    let level_filter_layer = EnvFilter::builder()
        .with_default_directive(DEFAULT_LEVEL.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level_filter_layer)
        .init();
}
