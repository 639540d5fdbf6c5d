// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Connection failed: {url} ({reason})")]
    ConnectionFailure { url: String, reason: String },

    #[error("Tag not found: <{tag}> {attrs}")]
    TagNotFound { tag: String, attrs: String },

    #[error("Attribute `{attr}` missing on <{tag}>")]
    MissingAttribute { tag: String, attr: String },

    #[error("Python versions list not found")]
    ListVersionsNotFound,

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub fn connection(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::ConnectionFailure { url: url.into(), reason: reason.to_string() }
    }

    pub fn tag_not_found(tag: &str, attrs: &[(&str, &str)]) -> Self {
        let attrs = attrs
            .iter()
            .map(|(k, v)| format!(r#"{k}="{v}""#))
            .collect::<Vec<_>>()
            .join(" ");
        Self::TagNotFound { tag: s!(tag), attrs }
    }

    /// Failures a crawl loop may skip past, one item at a time.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, Self::ConnectionFailure { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
