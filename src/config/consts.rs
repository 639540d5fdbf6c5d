// src/config/consts.rs

// Net config
pub const MAIN_DOC_URL: &str = "https://docs.python.org/3/";
pub const WHATS_NEW_URL: &str = "https://docs.python.org/3/whatsnew/";
pub const PEPS_URL: &str = "https://peps.python.org/";
pub const DOWNLOAD_PAGE: &str = "download.html";
pub const USER_AGENT: &str = concat!("pydoc_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Local dirs, relative to the base dir
pub const CACHE_DIR: &str = ".cache/http";
pub const DOWNLOADS_DIR: &str = "downloads";
pub const RESULTS_DIR: &str = "results";
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "parser.log";

// Export
pub const DATETIME_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";
pub const LOG_DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

// whats-new
pub const WHATS_NEW_HEADERS: [&str; 3] = ["Article link", "Title", "Editor, author"];
pub const WHATS_NEW_SELECTOR: &str = "#what-s-new-in-python div.toctree-wrapper li.toctree-l1";

// latest-versions
pub const VERSIONS_HEADERS: [&str; 3] = ["Documentation link", "Version", "Status"];
pub const SIDEBAR_LISTS_SELECTOR: &str = "div.sphinxsidebarwrapper ul";
pub const ALL_VERSIONS_MARKER: &str = "All versions";
pub const VERSION_PATTERN: &str = r"(?:Python )?(?P<version>\d\.\d+) \((?P<status>.*)\)";

// download
pub const ARCHIVE_SELECTOR: &str = r#"table.docutils td > a[href$="pdf-a4.zip"]"#;
pub const ARCHIVE_FALLBACK_SELECTOR: &str = r#"table.docutils td > a[href$="a4.zip"]"#;

// pep
pub const PEP_HEADERS: [&str; 2] = ["Status", "Count"];
pub const PEP_TOTAL_LABEL: &str = "Total";
pub const PEP_ROWS_SELECTOR: &str = "#numerical-index tbody tr";
pub const PEP_FIELDS_CLASS: &str = "rfc2822 field-list simple";
pub const PEP_STATUS_LABEL: &str = "Status";

/// Status code (abbreviation minus its leading type letter) -> acceptable statuses.
/// The first entry is the one reported on a mismatch.
pub const EXPECTED_STATUS: &[(&str, &[&str])] = &[
    ("A", &["Active", "Accepted"]),
    ("D", &["Deferred"]),
    ("F", &["Final"]),
    ("P", &["Provisional"]),
    ("R", &["Rejected"]),
    ("S", &["Superseded"]),
    ("W", &["Withdrawn"]),
    ("", &["Draft", "Active"]),
];
