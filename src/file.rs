// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::config::{consts::DATETIME_FORMAT, Mode, RunOptions};
use crate::csv::write_rows;
use crate::data::DataSet;
use crate::error::Result;

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

/// Write raw bytes, creating the parent directory if needed. Overwrites.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// `<results_dir>/<mode>_<timestamp>.<ext>`
pub fn results_file_name(mode: Mode, stamp: &str, ext: &str) -> String {
    join!(mode.name(), "_", stamp, ".", ext)
}

/// Write header + rows to a fresh, timestamped file under the results dir.
/// Returns the final path written to.
pub fn write_results(opts: &RunOptions, data: &DataSet) -> Result<PathBuf> {
    let stamp = Local::now().format(DATETIME_FORMAT).to_string();
    let path = opts
        .results_dir()
        .join(results_file_name(opts.mode, &stamp, opts.format.ext()));
    write_table(&path, data, opts.format.delim())?;
    Ok(path)
}

/// Create/truncate `path` and write the whole table.
pub fn write_table(path: &Path, data: &DataSet, sep: char) -> Result<()> {
    ensure_parent(path)?;
    let mut out = BufWriter::new(File::create(path)?);
    write_rows(&mut out, data.table(), sep)?;
    out.flush()?;
    Ok(())
}
