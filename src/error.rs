//! Crate-level error types.
//!
//! [`RestockError`] unifies every error source (normalization,
//! pagination, configuration, transport, feed ingestion) behind a
//! single enum so callers can match on the variant they care about
//! while still using the `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RestockError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum RestockError {
    /// A canonical record's quantity or price token could not be
    /// normalized.
    #[error("format error: {0}")]
    Format(String),

    /// A catalog page fetch failed or returned an unusable page.
    #[error("pagination error: {0}")]
    Pagination(String),

    /// Invalid configuration (env-var pairing, zero chunk size).
    #[error("configuration error: {0}")]
    Config(String),

    /// A transport operation exceeded its deadline.
    #[error("transport timeout: {0}")]
    Timeout(String),

    /// A transport-level connectivity failure.
    #[error("connection error: {0}")]
    Connection(String),

    /// Any other HTTP failure, including non-success status codes.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    /// The canonical feed could not be downloaded or parsed.
    #[error("feed error: {0}")]
    Feed(String),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O operation on the feed body failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV row in the feed could not be read.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Classifies reqwest failures so timeouts and connectivity problems
/// keep a distinct, human-readable category. Control flow treats them
/// identically: abort the channel, no retry, no rollback.
impl From<reqwest::Error> for RestockError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RestockError::Timeout(err.to_string())
        } else if err.is_connect() {
            RestockError::Connection(err.to_string())
        } else {
            RestockError::Transport(err)
        }
    }
}
