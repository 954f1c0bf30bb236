//! Configuration schema types
//!
//! Maps the sections of `pseudonymizer.toml` onto typed structs. Every key has
//! a default, so an empty file (or no file) is a valid configuration.

use crate::adapters::DEFAULT_EXTENSION;
use crate::pseudonymization::{AuditConfig, PseudonymizationConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main pseudonymizer configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PseudonymizerConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Source and destination directories
    #[serde(default)]
    pub paths: PathsConfig,

    /// Tokenization and output file settings
    #[serde(default)]
    pub pseudonymization: PseudonymizationConfig,

    /// Audit log settings
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PseudonymizerConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.paths.validate()?;
        self.pseudonymization
            .validate()
            .map_err(|e| e.to_string())?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory scanned for input files
    #[serde(default = "default_dir")]
    pub source_dir: PathBuf,

    /// Directory receiving the pseudonymized dataset and mapping table;
    /// must exist, it is never created
    #[serde(default = "default_dir")]
    pub destination_dir: PathBuf,

    /// Extension of tabular input files, including the dot
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
}

impl PathsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.source_dir.as_os_str().is_empty() {
            return Err("paths.source_dir cannot be empty".to_string());
        }
        if self.destination_dir.as_os_str().is_empty() {
            return Err("paths.destination_dir cannot be empty".to_string());
        }
        if !self.file_extension.starts_with('.') || self.file_extension.len() < 2 {
            return Err(format!(
                "Invalid paths.file_extension '{}'. Must start with '.', e.g. '.csv'",
                self.file_extension
            ));
        }
        Ok(())
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_dir: default_dir(),
            destination_dir: default_dir(),
            file_extension: default_file_extension(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_file_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
