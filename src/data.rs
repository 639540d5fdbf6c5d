// src/data.rs
//
// Table data handed from the mode handlers to the output sink, plus the
// per-item diagnostics collected along the way.

use std::fmt;
use std::path::PathBuf;

pub type Row = Vec<String>;

/// Header row + data rows for one mode run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Row,
    pub rows: Vec<Row>,
}

impl DataSet {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| s!(h.as_ref())).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push<S: Into<String>, I: IntoIterator<Item = S>>(&mut self, row: I) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Header first, then rows: the shape every output writes.
    pub fn table(&self) -> impl Iterator<Item = &Row> {
        std::iter::once(&self.headers).chain(self.rows.iter())
    }
}

/// Something worth telling the user that did not stop the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A per-item fetch failed; the item was skipped.
    Unreachable { url: String, reason: String },
    /// A PEP page reports a status its index entry does not allow.
    StatusMismatch { link: String, status: String, expected: String },
    /// The index abbreviation carries a status code with no expected set.
    UnknownStatusCode { link: String, code: String, status: String },
}

impl Diagnostic {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Diagnostic::Unreachable { .. })
    }

    /// Unreachable items are informational; the rest are warnings.
    pub fn log(&self) {
        match self {
            Diagnostic::Unreachable { .. } => tracing::info!("{self}"),
            _ => tracing::warn!("{self}"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Unreachable { url, reason } => {
                write!(f, "Could not connect: {url} ({reason})")
            }
            Diagnostic::StatusMismatch { link, status, expected } => write!(
                f,
                "Mismatched status: {link}\nStatus on page: {status}\nExpected status: {expected}."
            ),
            Diagnostic::UnknownStatusCode { link, code, status } => write!(
                f,
                "Unknown status code {code:?} in index for {link} (page says {status})"
            ),
        }
    }
}

/// What a mode run hands back to the caller.
#[derive(Debug, Default)]
pub struct Report {
    /// Rows to output; `None` means nothing to output (not an error).
    pub data: Option<DataSet>,
    pub diagnostics: Vec<Diagnostic>,
    /// File the mode itself wrote, if any.
    pub saved: Option<PathBuf>,
}

impl Report {
    pub fn with_data(data: DataSet) -> Self {
        Self { data: Some(data), ..Self::default() }
    }

    pub fn log_diagnostics(&self) {
        for d in &self.diagnostics {
            d.log();
        }
    }
}
