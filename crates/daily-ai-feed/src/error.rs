//! Error types for the Daily AI Research Feed.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! None of these reach the page handlers: the client and the service log them and
//! degrade to empty or cached data.

use std::time::Duration;

/// Errors from the arXiv client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected non-success HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// Atom feed could not be parsed
    #[error("Failed to parse response: {0}")]
    Parse(#[from] quick_xml::DeError),
}

impl ClientError {
    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Map a failed transport call, keeping timeouts distinguishable.
    #[must_use]
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() { Self::Timeout(timeout) } else { Self::Http(err) }
    }

    /// Returns true if a later refresh has a reasonable chance of succeeding.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout(_) | Self::Server { .. })
    }
}

/// Unexpected failure inside a [`PaperSource`](crate::client::PaperSource).
///
/// The arXiv client never produces one; it exists so the service has a path for
/// faults that are not a normal "no data" outcome.
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    /// Any other internal fault
    #[error("Internal source error: {0}")]
    Internal(String),
}

impl SourceError {
    /// Create an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_transient() {
        assert!(ClientError::Timeout(Duration::from_secs(30)).is_transient());
        assert!(ClientError::server(503, "unavailable").is_transient());

        let not_found = ClientError::UnexpectedStatus { status: 404, message: String::new() };
        assert!(!not_found.is_transient());
    }

    #[test]
    fn test_client_error_display() {
        let err = ClientError::server(500, "boom");
        assert_eq!(err.to_string(), "Server error (500): boom");

        let err = ClientError::Timeout(Duration::from_secs(30));
        assert!(err.to_string().contains("30s"));
    }

    #[test]
    fn test_source_error_display() {
        let err = SourceError::internal("stage exploded");
        assert_eq!(err.to_string(), "Internal source error: stage exploded");
        assert!(matches!(err, SourceError::Internal(_)));
    }
}
