// src/scrape/download.rs
use std::{io, path::{Path, PathBuf}};

use url::Url;

use crate::{
    config::consts::{DOWNLOAD_PAGE, MAIN_DOC_URL},
    core::{sanitize::last_segment, Fetch},
    error::Result,
    file::write_bytes,
    specs::downloads::archive_href,
};

use super::soup;

/// Fetch the A4 PDF docs archive into `downloads_dir` (created if missing).
/// Returns the written path; produces no rows.
pub fn collect(fetch: &dyn Fetch, downloads_dir: &Path) -> Result<PathBuf> {
    let downloads_url = Url::parse(MAIN_DOC_URL)?.join(DOWNLOAD_PAGE)?;
    let href = archive_href(&soup(fetch, &downloads_url)?)?;
    let archive_url = downloads_url.join(&href)?;

    let name = last_segment(archive_url.as_str());
    if name.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("archive URL has no file name: {archive_url}"),
        ).into());
    }

    let body = fetch.get(&archive_url)?;
    let path = downloads_dir.join(name);
    write_bytes(&path, &body)?;

    tracing::info!("Archive downloaded and saved: {}", path.display());
    Ok(path)
}
