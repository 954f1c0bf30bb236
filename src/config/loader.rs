//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::PseudonymizerConfig;
use crate::domain::errors::PseudonymError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up when no configuration path is given
pub const DEFAULT_CONFIG_FILE: &str = "pseudonymizer.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into PseudonymizerConfig
/// 4. Applies environment variable overrides (PSEUDONYMIZER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns a `Configuration` error if the file is missing or unreadable, a
/// referenced variable is unset, the TOML is malformed, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use pseudonymizer::config::loader::load_config;
///
/// let config = load_config("pseudonymizer.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<PseudonymizerConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PseudonymError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PseudonymError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: PseudonymizerConfig = toml::from_str(&contents)
        .map_err(|e| PseudonymError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(config)
}

/// Loads the configuration named on the command line, or the default file
///
/// An explicitly given path must exist. Without one, `pseudonymizer.toml` in
/// the working directory is used when present and built-in defaults
/// otherwise; environment overrides apply in both cases.
pub fn load_config_or_default(path: Option<&Path>) -> Result<(PseudonymizerConfig, ConfigSource)> {
    if let Some(path) = path {
        return Ok((load_config(path)?, ConfigSource::File(path.to_path_buf())));
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        return Ok((
            load_config(default_path)?,
            ConfigSource::File(default_path.to_path_buf()),
        ));
    }

    tracing::debug!("No {DEFAULT_CONFIG_FILE} found, using built-in defaults");
    Ok((finish(PseudonymizerConfig::default())?, ConfigSource::Defaults))
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file
    File(PathBuf),
    /// No file; built-in defaults plus environment overrides
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

fn finish(mut config: PseudonymizerConfig) -> Result<PseudonymizerConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        PseudonymError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| PseudonymError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = re.replace_all(line, |cap: &regex::Captures<'_>| {
            let var_name = &cap[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                if !missing_vars.iter().any(|v| v == var_name) {
                    missing_vars.push(var_name.to_string());
                }
                String::new()
            })
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PseudonymError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using PSEUDONYMIZER_* prefix
///
/// Environment variables follow the pattern: PSEUDONYMIZER_<SECTION>_<KEY>
/// For example: PSEUDONYMIZER_PATHS_DESTINATION_DIR
fn apply_env_overrides(config: &mut PseudonymizerConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("PSEUDONYMIZER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Paths overrides
    if let Ok(val) = std::env::var("PSEUDONYMIZER_PATHS_SOURCE_DIR") {
        config.paths.source_dir = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("PSEUDONYMIZER_PATHS_DESTINATION_DIR") {
        config.paths.destination_dir = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("PSEUDONYMIZER_PATHS_FILE_EXTENSION") {
        config.paths.file_extension = val;
    }

    config.pseudonymization.apply_env_overrides()?;
    config.audit.apply_env_overrides()?;

    // Logging overrides
    if let Ok(val) = std::env::var("PSEUDONYMIZER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("PSEUDONYMIZER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("PSEUDONYMIZER_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
