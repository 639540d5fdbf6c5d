// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;

use crate::config::{ExportFormat, Mode, OutputKind, RunOptions};
use crate::core::{ResponseCache, Session};
use crate::output::control_output;
use crate::progress::BarProgress;
use crate::runner;

#[derive(Parser, Debug)]
#[command(name = "pydoc_scrape", version, about = "Python documentation scraper")]
pub struct Args {
    /// Scraping mode
    #[arg(value_enum)]
    pub mode: Mode,

    /// Clear the HTTP cache before running
    #[arg(short, long)]
    pub clear_cache: bool,

    /// Extra output mode (default prints rows to the console)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputKind>,

    /// File format for `--output file`
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Directory that holds downloads/, results/, logs/ and the cache
    #[arg(long, env = "PYDOC_SCRAPE_DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Bypass the response cache entirely
    #[arg(long)]
    pub no_cache: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            mode: self.mode,
            output: self.output.unwrap_or_default(),
            format: self.format,
            base_dir: self.base_dir.clone(),
            clear_cache: self.clear_cache,
            use_cache: !self.no_cache,
        }
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    let opts = args.run_options();

    crate::log::init(&opts.log_dir(), args.verbose)
        .wrap_err_with(|| format!("cannot create log dir {}", opts.log_dir().display()))?;
    tracing::info!("Parser started!");
    tracing::info!("Command line arguments: {args:?}");

    let cache = opts.use_cache.then(|| ResponseCache::new(opts.cache_dir()));
    let session = Session::new(cache).wrap_err("cannot build HTTP session")?;

    if let Err(e) = execute(&session, &opts) {
        tracing::error!("Program error: {e}");
    }
    tracing::info!("Parser finished.");
    Ok(())
}

/// Honours `--clear-cache` even when `--no-cache` keeps the session uncached.
fn clear_cache(opts: &RunOptions) -> crate::error::Result<Option<usize>> {
    if !opts.clear_cache {
        return Ok(None);
    }
    let cache = ResponseCache::new(opts.cache_dir());
    let n = cache.clear()?;
    tracing::info!("Cleared {n} cached responses from {}", cache.dir().display());
    Ok(Some(n))
}

/// Everything after setup. Errors here end the run but are only logged.
fn execute(session: &Session, opts: &RunOptions) -> crate::error::Result<()> {
    clear_cache(opts)?;

    let mut bar = BarProgress::default();
    let report = runner::run(session, opts, Some(&mut bar))?;
    report.log_diagnostics();

    if let Some(data) = &report.data {
        if data.is_empty() {
            tracing::warn!("No rows collected");
        } else {
            tracing::info!("Collected {} rows", data.len());
        }
        control_output(data, opts)?;
    }
    Ok(())
}
