//! Error types for the Amazon jobs scraper.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! None of these reach the HTTP caller: pagination stops on a [`ClientError`] and
//! enrichment folds an [`EnrichError`] into an empty description.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Non-success HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create an unexpected status error.
    #[must_use]
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus { status, message: message.into() }
    }

    /// HTTP status code, if the upstream answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Why a job's description could not be extracted.
#[derive(thiserror::Error, Debug)]
pub enum EnrichError {
    /// The detail page could not be fetched
    #[error("Failed to fetch detail page: {0}")]
    Fetch(#[from] ClientError),

    /// The page has no description element
    #[error("No description element on {url}")]
    MissingDescription {
        /// Detail page URL
        url: String,
    },
}

impl EnrichError {
    /// Create a missing description error.
    #[must_use]
    pub fn missing_description(url: impl Into<String>) -> Self {
        Self::MissingDescription { url: url.into() }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for enrichment.
pub type EnrichResult<T> = Result<T, EnrichError>;
