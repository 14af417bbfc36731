//! Error types for the ecocash library

use thiserror::Error;

/// Result type alias for ecocash operations
pub type Result<T> = std::result::Result<T, EcocashError>;

/// Main error type for ecocash operations
#[derive(Error, Debug)]
pub enum EcocashError {
    /// Precondition failure detected before any network I/O.
    /// Recoverable by the caller correcting the input.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The transport layer could not complete the request
    /// (DNS, connect, TLS, timeout). Callers may retry.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server responded, but with an error status or an
    /// unparseable/unexpected body. Carries the HTTP status code.
    #[error("Protocol error (status {status}): {message}")]
    Protocol { status: u16, message: String },

    /// Failure encoding the outgoing payload. Indicates a programming
    /// or data error rather than a network or validation issue.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EcocashError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a protocol error carrying the originating HTTP status
    pub fn protocol(status: u16, message: impl Into<String>) -> Self {
        Self::Protocol {
            status,
            message: message.into(),
        }
    }

    /// HTTP status code for protocol errors, `None` for the other kinds
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a caller can reasonably retry the failed call as-is
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
