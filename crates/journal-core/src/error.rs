//! Error types for journal core operations.
//!
//! This module defines the error hierarchy shared by every storage backend.
//! Errors are descriptive at the core level; the service and CLI layers map
//! them to HTTP statuses and exit codes respectively.

use thiserror::Error;

/// Result type alias for journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for journal operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Entry failed field validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid caller input (bad identifier, missing identity)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Identity collision on insert
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// Persisted state could not be encoded or decoded
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    /// Remote service call failed
    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        JournalError::Storage(err.to_string())
    }
}

/// Why a remote store call failed.
///
/// The remote client never panics or hides a failure; callers that want the
/// old "log and return nothing" behavior use `LenientClient`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Connection failure, or the response could not be read
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("{}", status_message(.status, .message))]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// The response body was not the expected JSON shape
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Status code for `Status` failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the service reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

fn status_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => format!("service responded {}: {}", status, message),
        None => format!("service responded {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display_includes_message() {
        let err = RemoteError::Status {
            status: 400,
            message: Some("entryId must be a number".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "service responded 400: entryId must be a number"
        );
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = RemoteError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: JournalError = io.into();
        assert!(matches!(err, JournalError::Storage(_)));
    }
}
