// src/scrape/whats_new.rs
use url::Url;

use crate::{
    config::consts::{WHATS_NEW_HEADERS, WHATS_NEW_URL},
    core::Fetch,
    data::{DataSet, Diagnostic, Report},
    error::{Result, ScrapeError},
    progress::Progress,
    specs::whats_new::{article_links, parse_article},
};

use super::soup;

/// One row per reachable release article: link, title, editors.
/// Unreachable articles are skipped and reported; any other failure aborts.
pub fn collect(fetch: &dyn Fetch, mut progress: Option<&mut dyn Progress>) -> Result<Report> {
    let hub = Url::parse(WHATS_NEW_URL)?;
    let links = article_links(&soup(fetch, &hub)?, &hub)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(links.len());
    }
    let result = crawl(fetch, links, progress.as_deref_mut());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn crawl(
    fetch: &dyn Fetch,
    links: Vec<Url>,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Report> {
    let mut data = DataSet::new(&WHATS_NEW_HEADERS);
    let mut diagnostics = Vec::new();

    for link in links {
        match soup(fetch, &link) {
            Ok(doc) => {
                let article = parse_article(&doc)?;
                data.push([s!(link.as_str()), article.title, article.editors]);
            }
            Err(ScrapeError::ConnectionFailure { reason, .. }) => {
                diagnostics.push(Diagnostic::Unreachable { url: s!(link.as_str()), reason });
            }
            Err(e) => return Err(e),
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done();
        }
    }

    Ok(Report { data: Some(data), diagnostics, saved: None })
}
