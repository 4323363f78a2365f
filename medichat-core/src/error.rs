//! Typed failures of data fetches.

use reqwest::StatusCode;

/// Failures of a query against the Remote Data Service.
///
/// Callers branch on the variant: a missing row is not a transport problem,
/// and neither is a body that failed to decode.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The query matched no row.
    #[error("no {table} row matched the query")]
    NotFound { table: String },

    /// Transport failure: connect, timeout, TLS, or reading the body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("request to {table} failed with status {status}: {message}")]
    Status {
        table: String,
        status: StatusCode,
        message: String,
    },

    /// The body did not decode into the expected rows.
    #[error("malformed response from {table}: {reason}")]
    MalformedResponse { table: String, reason: String },

    /// The query was rejected before anything was sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl FetchError {
    /// The query matched no row.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }

    /// Connection, timeout and other transport failures; worth a retry.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_))
    }
}

/// Result alias for data fetches.
pub type Result<T> = std::result::Result<T, FetchError>;
