//! Scraping *spec* for `download.html`: the A4 PDF archive link.
//!
//! Prefers a table-cell link ending in `pdf-a4.zip`; if the page has none,
//! any cell link ending in `a4.zip` is accepted.

use scraper::Html;

use crate::config::consts::{ARCHIVE_FALLBACK_SELECTOR, ARCHIVE_SELECTOR};
use crate::core::html::{attr, select_one};
use crate::error::{Result, ScrapeError};

/// Raw `href` of the archive link (unresolved).
pub fn archive_href(doc: &Html) -> Result<String> {
    let root = doc.root_element();
    let a = match select_one(root, ARCHIVE_SELECTOR)? {
        Some(a) => a,
        None => select_one(root, ARCHIVE_FALLBACK_SELECTOR)?
            .ok_or_else(|| ScrapeError::tag_not_found("a", &[("href$", "pdf-a4.zip")]))?,
    };
    Ok(s!(attr(a, "href")?))
}
