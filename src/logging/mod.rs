//! Logging and observability
//!
//! Structured logging with `tracing`:
//! - human-readable console output on stderr
//! - configurable log levels (`--log-level`, `RUST_LOG`)
//! - optional JSON log files with rotation
//!
//! Identifier values and tokens are never logged; run events carry counts
//! and column names only.
//!
//! # Example
//!
//! ```no_run
//! use pseudonymizer::logging::init_logging;
//! use pseudonymizer::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a pseudonymization run
///
/// # Example
///
/// ```no_run
/// use pseudonymizer::log_run_start;
///
/// log_run_start!("people.csv", "Name");
/// ```
#[macro_export]
macro_rules! log_run_start {
    ($source:expr, $identifier:expr) => {
        tracing::info!(
            source = %$source,
            identifier_column = %$identifier,
            "Starting pseudonymization"
        );
    };
}

/// Log the completion of a pseudonymization run
///
/// # Example
///
/// ```no_run
/// use pseudonymizer::log_run_complete;
/// use std::time::Duration;
///
/// log_run_complete!(120, 87, Duration::from_millis(15));
/// ```
#[macro_export]
macro_rules! log_run_complete {
    ($rows:expr, $distinct:expr, $duration:expr) => {
        tracing::info!(
            rows = $rows,
            distinct_identifiers = $distinct,
            duration_ms = $duration.as_millis() as u64,
            "Pseudonymization completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use pseudonymizer::log_error_with_context;
/// use pseudonymizer::domain::PseudonymError;
///
/// let error = PseudonymError::ColumnNotFound("Email".to_string());
/// log_error_with_context!(&error, "Failed to remove columns");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
