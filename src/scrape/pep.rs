// src/scrape/pep.rs
use std::collections::BTreeMap;

use url::Url;

use crate::{
    config::consts::{PEP_HEADERS, PEP_TOTAL_LABEL, PEPS_URL},
    core::Fetch,
    data::{DataSet, Diagnostic},
    error::{Result, ScrapeError},
    progress::Progress,
    specs::peps::{detail_status, expected_statuses, index_entries, IndexEntry},
};

use super::soup;

/// Status tally over every reachable PEP, plus everything worth reporting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PepReport {
    /// Keyed by the status shown on the PEP page; iterates sorted.
    pub tally: BTreeMap<String, usize>,
    /// Mismatches, unknown codes and unreachable pages, in index order.
    pub diagnostics: Vec<Diagnostic>,
}

impl PepReport {
    pub fn total(&self) -> usize {
        self.tally.values().sum()
    }

    /// Header, one row per status (ascending), then the total.
    pub fn to_dataset(&self) -> DataSet {
        let mut data = DataSet::new(&PEP_HEADERS);
        for (status, count) in &self.tally {
            data.push([status.clone(), count.to_string()]);
        }
        data.push([s!(PEP_TOTAL_LABEL), self.total().to_string()]);
        data
    }

    /// Compare one observed status against the index entry and count it.
    /// The count goes up whether or not the status matched.
    pub fn record(&mut self, entry: &IndexEntry, status: String) {
        let link = s!(entry.link.as_str());
        match expected_statuses(entry.status_code()) {
            Some(expected) => {
                if !expected.contains(&status.as_str()) {
                    self.diagnostics.push(Diagnostic::StatusMismatch {
                        link,
                        status: status.clone(),
                        expected: s!(expected[0]),
                    });
                }
            }
            None => self.diagnostics.push(Diagnostic::UnknownStatusCode {
                link,
                code: s!(entry.status_code()),
                status: status.clone(),
            }),
        }
        *self.tally.entry(status).or_insert(0) += 1;
    }
}

pub fn collect(fetch: &dyn Fetch, mut progress: Option<&mut dyn Progress>) -> Result<PepReport> {
    let base = Url::parse(PEPS_URL)?;
    let entries = index_entries(&soup(fetch, &base)?, &base)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(entries.len());
    }
    let result = crawl(fetch, &entries, progress.as_deref_mut());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

fn crawl(
    fetch: &dyn Fetch,
    entries: &[IndexEntry],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<PepReport> {
    let mut report = PepReport::default();
    for entry in entries {
        match soup(fetch, &entry.link) {
            Ok(doc) => {
                let status = detail_status(&doc)?;
                report.record(entry, status);
            }
            Err(ScrapeError::ConnectionFailure { reason, .. }) => {
                report.diagnostics.push(Diagnostic::Unreachable {
                    url: s!(entry.link.as_str()),
                    reason,
                });
            }
            Err(e) => return Err(e),
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done();
        }
    }
    Ok(report)
}
