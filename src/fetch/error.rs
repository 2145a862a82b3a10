//! Error types for the fetch module.
//!
//! Every failure a fetch can hit is a [`FetchError`]. Callers that only care
//! about how to present a failure use [`FetchError::kind`], which groups the
//! variants into transport, validation and unexpected failures.

use std::path::PathBuf;

use thiserror::Error;

use super::validation::ValidationError;

/// Errors that can occur while fetching and storing an image.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, body read).
    #[error("network error fetching {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request did not complete within the client timeout.
    #[error("timeout fetching {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// Server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The URL that returned the status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Response metadata failed the image safety checks.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// File system error while creating, listing or writing the collection.
    #[error("IO error at {path}: {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of a [`FetchError`] for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure, timeout or non-success status.
    Transport,
    /// Content type or declared size rejected.
    Validation,
    /// Anything else, such as filesystem failures.
    Unexpected,
}

impl FetchError {
    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the reporting category for this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } | Self::Timeout { .. } | Self::HttpStatus { .. } => {
                ErrorKind::Transport
            }
            Self::Validation(_) => ErrorKind::Validation,
            Self::Io { .. } => ErrorKind::Unexpected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_timeout_display() {
        let error = FetchError::timeout("https://example.com/cat.png");
        let msg = error.to_string();
        assert!(msg.contains("timeout"), "Expected 'timeout' in: {msg}");
        assert!(msg.contains("https://example.com/cat.png"));
        assert_eq!(error.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_fetch_error_http_status_display() {
        let error = FetchError::http_status("https://example.com/missing.png", 404);
        let msg = error.to_string();
        assert!(msg.contains("404"), "Expected '404' in: {msg}");
        assert!(msg.contains("https://example.com/missing.png"));
        assert_eq!(error.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_fetch_error_io_display_and_kind() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error = FetchError::io("/tmp/Fetched_Images", io_error);
        let msg = error.to_string();
        assert!(msg.contains("/tmp/Fetched_Images"), "Expected path in: {msg}");
        assert_eq!(error.kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn test_fetch_error_validation_is_transparent() {
        let error = FetchError::from(ValidationError::NotAnImage {
            content_type: "text/html".to_string(),
        });
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert_eq!(error.to_string(), "URL does not point to an image resource");
    }
}
