//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use journal_core::JournalError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Entry not found
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// Remote service unreachable or failing
    RemoteFailed { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::RemoteFailed { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::RemoteFailed { .. } => exit_codes::REMOTE_FAILED,
        }
    }

    /// Print error message to stderr and exit with appropriate code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        std::process::exit(self.exit_code())
    }
}

impl CliError {
    /// Classify a core error, or `None` for failures without a dedicated exit code.
    pub fn from_journal(err: &JournalError) -> Option<Self> {
        match err {
            JournalError::NotFound(message) => Some(CliError::not_found(
                message.clone(),
                "Hint: Run `journal list` to find entry IDs.",
            )),
            JournalError::Validation(message) | JournalError::InvalidInput(message) => {
                Some(CliError::invalid_input(message.clone()))
            }
            JournalError::Remote(remote) => Some(CliError::RemoteFailed {
                message: remote.to_string(),
                hint: "Hint: Check that `journal serve` is running and --remote points at it."
                    .to_string(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;
    use journal_core::RemoteError;

    #[test]
    fn test_journal_errors_map_to_exit_codes() {
        let not_found =
            CliError::from_journal(&JournalError::NotFound("Entry 3 not found.".into())).unwrap();
        assert_eq!(not_found.exit_code(), exit_codes::NOT_FOUND);
        assert!(not_found.to_string().contains("journal list"));

        let invalid =
            CliError::from_journal(&JournalError::Validation("Entry requires all inputs".into()))
                .unwrap();
        assert_eq!(invalid.exit_code(), exit_codes::INVALID_INPUT);

        let remote =
            CliError::from_journal(&JournalError::Remote(RemoteError::Transport("refused".into())))
                .unwrap();
        assert_eq!(remote.exit_code(), exit_codes::REMOTE_FAILED);

        assert!(CliError::from_journal(&JournalError::Storage("disk".into())).is_none());
    }
}
