//! Scraping *spec* for the "What's New" pages.
//!
//! - Hub (`whatsnew/`): one toctree entry per release article; we want the
//!   first link of each `li.toctree-l1` under `#what-s-new-in-python`.
//! - Article: title from the first `<h1>`, editors/authors from the first
//!   `<dl>` with newlines flattened to spaces.
//!
//! No fetching here; callers pass parsed documents.

use scraper::Html;
use url::Url;

use crate::config::consts::WHATS_NEW_SELECTOR;
use crate::core::html::{attr, find_tag, select_all, text};
use crate::core::sanitize::flatten_newlines;
use crate::error::Result;

/// Absolute article links from the hub, in page order.
pub fn article_links(doc: &Html, base: &Url) -> Result<Vec<Url>> {
    let mut out = Vec::new();
    for section in select_all(doc.root_element(), WHATS_NEW_SELECTOR)? {
        let a = find_tag(section, "a", &[])?;
        out.push(base.join(attr(a, "href")?)?);
    }
    Ok(out)
}

/// One release article.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub editors: String,
}

pub fn parse_article(doc: &Html) -> Result<Article> {
    let root = doc.root_element();
    let title = text(find_tag(root, "h1", &[])?);
    let editors = flatten_newlines(&text(find_tag(root, "dl", &[])?));
    Ok(Article { title, editors })
}
