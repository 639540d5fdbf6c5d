// tests/common/mod.rs
//
// In-memory `Fetch` for driving the mode handlers without a network.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use pydoc_scrape::core::Fetch;
use pydoc_scrape::{Result, ScrapeError};
use url::Url;

#[derive(Default)]
pub struct StubFetch {
    pages: HashMap<String, Vec<u8>>,
    down: Vec<String>,
    pub hits: RefCell<Vec<String>>,
}

impl StubFetch {
    pub fn new() -> Self { Self::default() }

    pub fn page(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }

    /// Make `url` fail like an unreachable host.
    pub fn down(mut self, url: &str) -> Self {
        self.down.push(url.to_string());
        self
    }
}

impl Fetch for StubFetch {
    fn get(&self, url: &Url) -> Result<Vec<u8>> {
        self.hits.borrow_mut().push(url.to_string());
        if self.down.iter().any(|d| d == url.as_str()) {
            return Err(ScrapeError::connection(url.as_str(), "connection refused"));
        }
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| ScrapeError::connection(url.as_str(), "HTTP 404 Not Found"))
    }
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pydoc_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn pep_detail(status: &str) -> String {
    format!(r#"
        <section id="pep-content">
          <h1 class="page-title">PEP</h1>
          <dl class="rfc2822 field-list simple">
            <dt class="field-odd">Author<span class="colon">:</span></dt>
            <dd class="field-odd">Someone</dd>
            <dt class="field-even">Status<span class="colon">:</span></dt>
            <dd class="field-even"><abbr title="">{status}</abbr></dd>
          </dl>
        </section>
    "#)
}

/// `rows`: (abbreviation, pep number)
pub fn pep_index(rows: &[(&str, u32)]) -> String {
    let body: String = rows
        .iter()
        .map(|(abbr, n)| format!(
            r#"<tr><td><abbr>{abbr}</abbr></td><td><a href="pep-{n:04}/">{n}</a></td><td>Title {n}</td></tr>"#
        ))
        .collect();
    format!(r#"<section id="numerical-index"><table><tbody>{body}</tbody></table></section>"#)
}
