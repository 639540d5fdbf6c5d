// src/log.rs
use std::{io, path::Path};

use tracing_subscriber::{
    fmt::{self, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::consts::{LOG_DATETIME_FORMAT, LOG_FILE};

fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pydoc_scrape={default_level}")))
}

/// Compact stderr output plus a plain-text `parser.log` in `log_dir`.
/// Safe to call more than once; later calls are no-ops.
pub fn init(log_dir: &Path, verbose: bool) -> io::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_timer(ChronoLocal::new(s!(LOG_DATETIME_FORMAT)))
        .compact();

    let file_layer = fmt::layer()
        .with_writer(tracing_appender::rolling::never(log_dir, LOG_FILE))
        .with_ansi(false)
        .with_timer(ChronoLocal::new(s!(LOG_DATETIME_FORMAT)));

    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
    Ok(())
}
