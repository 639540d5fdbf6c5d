//! Scraping *spec* for the PEP index and PEP detail pages.
//!
//! Index (`peps.python.org/`): the `#numerical-index` table, one `<tr>` per
//! PEP. The first cell is the abbreviation, e.g. `SF`: first letter is the
//! PEP type, the remainder is the status code (possibly empty).
//!
//! Detail page: the header `dl.rfc2822.field-list.simple` carries a
//! `Status` term followed by a `<dd>` with the status text.
//!
//! Expected statuses per status code come from `config::consts::EXPECTED_STATUS`.

use scraper::Html;
use url::Url;

use crate::config::consts::{EXPECTED_STATUS, PEP_FIELDS_CLASS, PEP_ROWS_SELECTOR, PEP_STATUS_LABEL};
use crate::core::html::{attr, find_tag, next_element_sibling, select_all, text};
use crate::core::sanitize::normalize_ws;
use crate::error::{Result, ScrapeError};

/// One row of the numerical index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    /// Abbreviation cell text, e.g. `SF`, `IA`, `S`.
    pub abbr: String,
    pub link: Url,
}

impl IndexEntry {
    /// Abbreviation minus its leading type letter.
    pub fn status_code(&self) -> &str {
        let mut chars = self.abbr.chars();
        chars.next();
        chars.as_str()
    }
}

pub fn index_entries(doc: &Html, base: &Url) -> Result<Vec<IndexEntry>> {
    let mut out = Vec::new();
    for tr in select_all(doc.root_element(), PEP_ROWS_SELECTOR)? {
        let href = attr(find_tag(tr, "a", &[])?, "href")?;
        let abbr = text(find_tag(tr, "td", &[])?);
        out.push(IndexEntry { abbr: s!(abbr.trim()), link: base.join(href)? });
    }
    Ok(out)
}

/// Status text from a PEP detail page.
pub fn detail_status(doc: &Html) -> Result<String> {
    let dl = find_tag(doc.root_element(), "dl", &[("class", PEP_FIELDS_CLASS)])?;
    dl.descendants()
        .skip(1)
        .filter_map(scraper::ElementRef::wrap)
        .filter(|el| text(*el).contains(PEP_STATUS_LABEL))
        .find_map(|el| next_element_sibling(el).filter(|sib| sib.value().name() == "dd"))
        .map(|dd| normalize_ws(&text(dd)))
        .ok_or_else(|| ScrapeError::tag_not_found("dd", &[("after", PEP_STATUS_LABEL)]))
}

/// Acceptable statuses for a status code; `None` for codes not in the table.
pub fn expected_statuses(code: &str) -> Option<&'static [&'static str]> {
    EXPECTED_STATUS
        .iter()
        .find(|(k, _)| *k == code)
        .map(|(_, v)| *v)
}
