// src/scrape/mod.rs
// Mode handlers: fetch pages, hand them to `specs`, collect rows.

pub mod download;
pub mod latest_versions;
pub mod pep;
pub mod whats_new;

use scraper::Html;
use url::Url;

use crate::core::{html, Fetch};
use crate::error::Result;

pub use pep::PepReport;

/// GET + parse in one step.
pub(crate) fn soup(fetch: &dyn Fetch, url: &Url) -> Result<Html> {
    Ok(html::parse(&fetch.get_text(url)?))
}
