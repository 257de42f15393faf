// src/error.rs
use thiserror::Error;

/// Error type handed back by the fetch and save collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Anything that stops the scrape of the current chamber/session.
/// Nothing here is retried; bills saved before the failure stay saved.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("{what} not found on {url}")]
    MissingElement { what: &'static str, url: String },

    #[error("{field} does not match the expected pattern: {text:?}")]
    PatternMismatch { field: &'static str, text: String },

    #[error("bad {field} date {text:?}: {source}")]
    BadDate {
        field: &'static str,
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("bad {field} tally: {text:?}")]
    BadTally { field: &'static str, text: String },

    #[error("cannot resolve link {href:?} against {base}: {source}")]
    BadUrl {
        base: String,
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error("no data for session {0:?}")]
    NoDataForPeriod(String),

    #[error("saving {identifier} failed: {source}")]
    Save {
        identifier: String,
        #[source]
        source: BoxError,
    },
}

impl ScrapeError {
    pub(crate) fn missing(what: &'static str, url: impl Into<String>) -> Self {
        ScrapeError::MissingElement { what, url: url.into() }
    }

    pub(crate) fn mismatch(field: &'static str, text: impl Into<String>) -> Self {
        ScrapeError::PatternMismatch { field, text: text.into() }
    }
}
