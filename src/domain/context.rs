//! Error context extension trait
//!
//! Adds `.context()` / `.with_context()` to any `Result` whose error converts
//! into [`PseudonymError`], so library code can annotate failures (which file,
//! which column) without switching to `anyhow`.
//!
//! ```rust
//! use pseudonymizer::domain::Result;
//! use pseudonymizer::domain::context::ResultExt;
//!
//! fn read_header(path: &str) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_context(|| format!("Failed to read header of {path}"))
//! }
//! ```

use crate::domain::errors::PseudonymError;
use crate::domain::result::Result;

/// Extension trait for adding context to `Result` types
pub trait ResultExt<T> {
    /// Add context to an error (evaluated eagerly)
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static;

    /// Add context to an error, computing it only on failure
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<PseudonymError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| wrap(e.into(), context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: std::fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| wrap(e.into(), f()))
    }
}

/// Prefix the message while keeping the error kind.
///
/// Kinds the caller branches on (exit codes, recoverability) survive the
/// wrapping; anything else collapses into `Other`.
fn wrap(base: PseudonymError, context: impl std::fmt::Display) -> PseudonymError {
    match base {
        PseudonymError::DataLoad(msg) => PseudonymError::DataLoad(format!("{context}: {msg}")),
        PseudonymError::DirectoryNotFound(msg) => {
            PseudonymError::DirectoryNotFound(format!("{context}: {msg}"))
        }
        PseudonymError::Io(msg) => PseudonymError::Io(format!("{context}: {msg}")),
        PseudonymError::Configuration(msg) => {
            PseudonymError::Configuration(format!("{context}: {msg}"))
        }
        other => PseudonymError::Other(format!("{context}: {other}")),
    }
}
