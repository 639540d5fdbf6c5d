//! Scraping *spec* for the versions sidebar on the docs hub.
//!
//! The sidebar holds several `<ul>`s; the one we want is the first whose
//! text contains "All versions". Each anchor in it reads like
//! `Python 3.12 (stable)`; anything that does not fit that shape is kept
//! whole as the version with an empty status.

use regex::Regex;
use scraper::Html;

use crate::config::consts::{ALL_VERSIONS_MARKER, SIDEBAR_LISTS_SELECTOR, VERSION_PATTERN};
use crate::core::html::{attr, find_all, select_all, text};
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionLink {
    pub link: String,
    pub version: String,
    pub status: String,
}

/// Splits anchor text into `(version, status)`.
pub struct VersionPattern {
    re: Regex,
}

impl VersionPattern {
    pub fn new() -> Result<Self> {
        Ok(Self { re: Regex::new(VERSION_PATTERN)? })
    }

    pub fn split(&self, anchor_text: &str) -> (String, String) {
        match self.re.captures(anchor_text) {
            Some(caps) => (s!(&caps["version"]), s!(&caps["status"])),
            None => (s!(anchor_text), s!()),
        }
    }
}

pub fn parse_doc(doc: &Html, pattern: &VersionPattern) -> Result<Vec<VersionLink>> {
    let list = select_all(doc.root_element(), SIDEBAR_LISTS_SELECTOR)?
        .into_iter()
        .find(|ul| text(*ul).contains(ALL_VERSIONS_MARKER))
        .ok_or(ScrapeError::ListVersionsNotFound)?;

    find_all(list, "a")
        .into_iter()
        .map(|a| -> Result<VersionLink> {
            let (version, status) = pattern.split(&text(a));
            Ok(VersionLink { link: s!(attr(a, "href")?), version, status })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::html::parse;

    #[test]
    fn split_with_and_without_status() {
        let p = VersionPattern::new().unwrap();
        assert_eq!(p.split("3.11 (stable)"), (s!("3.11"), s!("stable")));
        assert_eq!(p.split("Python 3.13 (in development)"), (s!("3.13"), s!("in development")));
        assert_eq!(p.split("3.5"), (s!("3.5"), s!()));
        assert_eq!(p.split("All versions"), (s!("All versions"), s!()));
    }

    #[test]
    fn picks_the_all_versions_list() {
        let doc = parse(r#"
            <div class="sphinxsidebarwrapper">
              <ul><li><a href="/3/index.html">Docs by version</a></li></ul>
              <ul>
                <li><a href="https://docs.python.org/3.13/">Python 3.13 (in development)</a></li>
                <li><a href="https://docs.python.org/3.12/">Python 3.12 (stable)</a></li>
                <li><a href="https://docs.python.org/2.7/">Python 2.7 (EOL)</a></li>
                <li><a href="https://www.python.org/doc/versions/">All versions</a></li>
              </ul>
            </div>
        "#);
        let rows = parse_doc(&doc, &VersionPattern::new().unwrap()).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].link, "https://docs.python.org/3.13/");
        assert_eq!(rows[1].version, "3.12");
        assert_eq!(rows[1].status, "stable");
        assert_eq!(rows[3].version, "All versions");
        assert_eq!(rows[3].status, "");
    }

    #[test]
    fn missing_list_is_fatal() {
        let doc = parse(r#"<div class="sphinxsidebarwrapper"><ul><li>Nothing</li></ul></div>"#);
        let err = parse_doc(&doc, &VersionPattern::new().unwrap()).unwrap_err();
        assert!(matches!(err, ScrapeError::ListVersionsNotFound));
    }
}
