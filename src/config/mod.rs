//! Configuration management for the pseudonymizer.
//!
//! # Overview
//!
//! Configuration lives in a TOML file (`pseudonymizer.toml` by default) with
//! support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `PSEUDONYMIZER_<SECTION>_<KEY>` environment overrides
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - log level
//! - [`PathsConfig`] - source/destination directories, file extension
//! - [`PseudonymizationConfig`] - identifier label, token length, output names
//! - [`AuditConfig`] - audit log location and format
//! - [`LoggingConfig`] - optional rotating log files
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [paths]
//! source_dir = "./data"
//! destination_dir = "${PSEUDONYMIZER_OUTPUT_DIR}"
//!
//! [pseudonymization]
//! identifier_label = "ID"
//! token_length = 8
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/pseudonymization.log"
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use pseudonymizer::config::load_config;
//!
//! # fn example() {
//! match load_config("pseudonymizer.toml") {
//!     Ok(config) => println!("Destination: {}", config.paths.destination_dir.display()),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use crate::pseudonymization::{AuditConfig, PseudonymizationConfig};
pub use loader::{load_config, load_config_or_default, ConfigSource, DEFAULT_CONFIG_FILE};
pub use schema::{ApplicationConfig, LoggingConfig, PathsConfig, PseudonymizerConfig};
