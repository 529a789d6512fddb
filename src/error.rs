//! Error types for episode-transcripts
//!
//! Two families of errors live here:
//! - [`Error`] covers everything that can abort a run (configuration, the
//!   listing call, filesystem writes).
//! - [`CaptionError`] covers caption-fetch outcomes, which never abort a run
//!   and are absorbed by the retry policy into "transcript present or absent".

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;
use thiserror::Error;

/// Result type alias for episode-transcripts operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for episode-transcripts
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "youtube.api_key")
        key: Option<String>,
    },

    /// The channel listing call failed; nothing can be rendered
    #[error("listing failed: {0}")]
    Listing(String),

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A rendered page could not be written to disk
    #[error("failed to write {path}: {source}")]
    Write {
        /// Target path of the page
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a configuration error tied to a specific key
    pub fn config(key: &str, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }
}

/// Outcome of a failed caption fetch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptionError {
    /// The uploader disabled captions for this video
    #[error("captions are disabled")]
    Disabled,

    /// No caption track exists (yet) in any requested language
    #[error("no captions found")]
    NotFound,

    /// The platform answered 429 / Too Many Requests
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Any other failure (network hiccup, unexpected response, ...)
    #[error("caption fetch failed: {0}")]
    Transient(String),
}

static RATE_LIMIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"(?i)\b429\b|too many requests").unwrap()
});

impl CaptionError {
    /// Classify a raw client failure by inspecting its message
    ///
    /// Caption clients report failures as free-form text, so the kind is
    /// recovered from well-known phrases. Rate limiting is checked first
    /// since a blocked request can also mention "not found" pages.
    pub fn classify(message: &str) -> Self {
        if is_rate_limit_message(message) {
            return CaptionError::RateLimited(message.to_string());
        }

        let lower = message.to_lowercase();
        if lower.contains("disabled") {
            CaptionError::Disabled
        } else if lower.contains("no transcript")
            || lower.contains("transcript not found")
            || lower.contains("not found")
        {
            CaptionError::NotFound
        } else {
            CaptionError::Transient(message.to_string())
        }
    }

    /// True for the two outcomes that retrying cannot change
    pub fn is_terminal(&self) -> bool {
        matches!(self, CaptionError::Disabled | CaptionError::NotFound)
    }
}

/// Detect a 429 / "Too Many Requests" signature in an error message
pub fn is_rate_limit_message(message: &str) -> bool {
    RATE_LIMIT_PATTERN.is_match(message)
}
