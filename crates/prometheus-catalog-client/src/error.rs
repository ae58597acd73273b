//! Error types for the Prometheus catalog client.

use std::sync::Arc;

/// Errors that can occur when configuring or using the client.
///
/// Every variant is `Clone`: a metadata refresh is shared by all callers
/// that observed the stale cache, and each of them receives the same
/// failure. The transport error is held behind an `Arc` for that reason.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// Invalid configuration: malformed duration or base URI, or a maximum
    /// query range smaller than the chunk size. Fatal to construction.
    #[error("configuration error: {0}")]
    Config(String),

    /// Degenerate required argument to a public operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The configured bearer-token file could not be read.
    #[error("not found: {0}")]
    NotFound(String),

    /// The remote service answered with a non-success HTTP status.
    ///
    /// The display format concatenates code and reason with no separator.
    #[error("Bad response {status}{message}")]
    BadResponse {
        /// HTTP status code
        status: u16,
        /// HTTP reason phrase
        message: String,
    },

    /// HTTP transport failure (connection refused, DNS, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] Arc<reqwest::Error>),

    /// The response body could not be decoded into a metadata snapshot.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(Arc::new(err))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

// DataFusion error conversion (when the feature is enabled)
#[cfg(feature = "datafusion")]
impl From<ClientError> for datafusion::error::DataFusionError {
    fn from(err: ClientError) -> Self {
        datafusion::error::DataFusionError::External(Box::new(err))
    }
}
