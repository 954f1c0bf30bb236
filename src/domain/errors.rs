//! Domain error types
//!
//! This module defines the error hierarchy for the pseudonymizer.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main pseudonymizer error type
///
/// This is the primary error type used throughout the library. The CLI layer
/// converts it into `anyhow::Error` and maps variants to exit codes.
#[derive(Debug, Error)]
pub enum PseudonymError {
    /// A required checkbox-style choice set has no checked entry
    #[error("No selection: {0}")]
    NoSelection(String),

    /// A referenced column does not exist in the current dataset
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// The source file could not be read or parsed as tabular data
    #[error("Failed to load data: {0}")]
    DataLoad(String),

    /// A configured source or destination directory is invalid
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    /// A pseudonym has no entry in the mapping table
    #[error("Pseudonym not found in mapping: {0}")]
    PseudonymNotFound(String),

    /// Attempt to edit a selection after it was validated
    #[error("Selection is locked: {0}")]
    SelectionLocked(String),

    /// Session action not allowed in the current state
    #[error("Cannot {action} while session is {state}")]
    InvalidState { action: String, state: String },

    /// Validation errors (malformed dataset, invalid options)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl PseudonymError {
    /// Creates an invalid-state error for a session action
    pub fn invalid_state(action: impl Into<String>, state: impl std::fmt::Display) -> Self {
        PseudonymError::InvalidState {
            action: action.into(),
            state: state.to_string(),
        }
    }

    /// Whether the user can recover by changing their choices and retrying
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PseudonymError::NoSelection(_)
                | PseudonymError::ColumnNotFound(_)
                | PseudonymError::SelectionLocked(_)
        )
    }

    /// Process exit code used by the CLI for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PseudonymError::NoSelection(_)
            | PseudonymError::ColumnNotFound(_)
            | PseudonymError::SelectionLocked(_)
            | PseudonymError::InvalidState { .. }
            | PseudonymError::Validation(_)
            | PseudonymError::Configuration(_) => 2,
            PseudonymError::DataLoad(_)
            | PseudonymError::DirectoryNotFound(_)
            | PseudonymError::PseudonymNotFound(_) => 3,
            PseudonymError::Io(_) | PseudonymError::Serialization(_) | PseudonymError::Other(_) => {
                5
            }
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for PseudonymError {
    fn from(err: std::io::Error) -> Self {
        PseudonymError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PseudonymError {
    fn from(err: serde_json::Error) -> Self {
        PseudonymError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PseudonymError {
    fn from(err: toml::de::Error) -> Self {
        PseudonymError::Configuration(format!("TOML parse error: {err}"))
    }
}

// CSV errors surfacing outside the reader are write-side failures
impl From<csv::Error> for PseudonymError {
    fn from(err: csv::Error) -> Self {
        PseudonymError::Io(err.to_string())
    }
}
