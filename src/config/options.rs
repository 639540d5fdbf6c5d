// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use super::consts::*;

/// Which page family to crawl.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    WhatsNew,
    LatestVersions,
    Download,
    Pep,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::WhatsNew => "whats-new",
            Mode::LatestVersions => "latest-versions",
            Mode::Download => "download",
            Mode::Pep => "pep",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where collected rows go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    #[default]
    #[value(skip)]
    Console,
    Pretty,
    File,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: Mode,
    pub output: OutputKind,
    pub format: ExportFormat,
    pub base_dir: PathBuf,
    pub clear_cache: bool,
    pub use_cache: bool,
}

impl RunOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            output: OutputKind::default(),
            format: ExportFormat::default(),
            base_dir: PathBuf::from("."),
            clear_cache: false,
            use_cache: true,
        }
    }

    pub fn with_base_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.base_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn cache_dir(&self) -> PathBuf { self.base_dir.join(CACHE_DIR) }
    pub fn downloads_dir(&self) -> PathBuf { self.base_dir.join(DOWNLOADS_DIR) }
    pub fn results_dir(&self) -> PathBuf { self.base_dir.join(RESULTS_DIR) }
    pub fn log_dir(&self) -> PathBuf { self.base_dir.join(LOG_DIR) }
}
