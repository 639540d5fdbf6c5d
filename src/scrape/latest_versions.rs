// src/scrape/latest_versions.rs
use url::Url;

use crate::{
    config::consts::{MAIN_DOC_URL, VERSIONS_HEADERS},
    core::Fetch,
    data::DataSet,
    error::Result,
    specs::versions::{parse_doc, VersionPattern},
};

use super::soup;

/// Link, version and status for every entry of the "All versions" sidebar list.
/// All or nothing: a missing list is `ListVersionsNotFound`.
pub fn collect(fetch: &dyn Fetch) -> Result<DataSet> {
    let pattern = VersionPattern::new()?;
    let doc = soup(fetch, &Url::parse(MAIN_DOC_URL)?)?;

    let mut data = DataSet::new(&VERSIONS_HEADERS);
    for v in parse_doc(&doc, &pattern)? {
        data.push([v.link, v.version, v.status]);
    }
    Ok(data)
}
