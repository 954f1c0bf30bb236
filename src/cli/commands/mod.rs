//! CLI command implementations
//!
//! Each command returns the process exit code: 0 success, 2 configuration or
//! selection error, 3 data or directory error, 5 fatal error.

pub mod columns;
pub mod init;
pub mod list;
pub mod pseudonymize;
pub mod restore;
pub mod validate;

use crate::config::{load_config_or_default, PseudonymizerConfig};
use crate::domain::PseudonymError;
use std::path::Path;

/// Loads the configuration, printing the failure and returning its exit code
pub(crate) fn load_configuration(
    config_path: Option<&Path>,
) -> std::result::Result<PseudonymizerConfig, i32> {
    match load_config_or_default(config_path) {
        Ok((config, source)) => {
            tracing::debug!(source = %source, "Configuration loaded");
            Ok(config)
        }
        Err(e) => {
            eprintln!("❌ Failed to load configuration");
            eprintln!("   Error: {e}");
            Err(e.exit_code())
        }
    }
}

/// Prints a failed step and returns the error's exit code
pub(crate) fn report_failure(step: &str, error: &PseudonymError) -> i32 {
    crate::log_error_with_context!(error, step);
    eprintln!("❌ {step}");
    eprintln!("   Error: {error}");
    if error.is_recoverable() {
        eprintln!("   Adjust the column selection and run the command again.");
    }
    error.exit_code()
}
