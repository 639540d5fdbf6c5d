// src/runner.rs
use crate::{
    config::{Mode, RunOptions},
    core::Fetch,
    data::Report,
    error::Result,
    progress::Progress,
    scrape,
};

/// Top-level runner: dispatch on mode and run it.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    fetch: &dyn Fetch,
    opts: &RunOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Report> {
    match opts.mode {
        Mode::WhatsNew => scrape::whats_new::collect(fetch, progress),
        Mode::LatestVersions => scrape::latest_versions::collect(fetch).map(Report::with_data),
        Mode::Download => {
            let saved = scrape::download::collect(fetch, &opts.downloads_dir())?;
            Ok(Report { saved: Some(saved), ..Report::default() })
        }
        Mode::Pep => {
            let pep = scrape::pep::collect(fetch, progress)?;
            Ok(Report {
                data: Some(pep.to_dataset()),
                diagnostics: pep.diagnostics,
                saved: None,
            })
        }
    }
}
