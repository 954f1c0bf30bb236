//! Pseudonymization configuration

use super::generator::UuidTokenGenerator;
use super::tokenizer::DEFAULT_ID_LABEL;
use crate::domain::{PseudonymError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for a pseudonymization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PseudonymizationConfig {
    /// Name given to the tokenized identifier column
    #[serde(default = "default_identifier_label")]
    pub identifier_label: String,

    /// Number of characters per token (1-32)
    #[serde(default = "default_token_length")]
    pub token_length: usize,

    /// Seed for reproducible tokens; leave unset for real runs
    #[serde(default)]
    pub seed: Option<u64>,

    /// File name of the pseudonymized dataset in the destination directory
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// File name of the mapping table in the destination directory
    #[serde(default = "default_mapping_file")]
    pub mapping_file: String,

    /// Rows shown in the console preview
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,

    /// Compute and preview without writing any file
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for PseudonymizationConfig {
    fn default() -> Self {
        Self {
            identifier_label: default_identifier_label(),
            token_length: default_token_length(),
            seed: None,
            output_file: default_output_file(),
            mapping_file: default_mapping_file(),
            preview_rows: default_preview_rows(),
            dry_run: false,
        }
    }
}

impl PseudonymizationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.identifier_label.trim().is_empty() {
            return Err(PseudonymError::Configuration(
                "pseudonymization.identifier_label cannot be empty".to_string(),
            ));
        }

        if self.token_length == 0 || self.token_length > UuidTokenGenerator::MAX_LENGTH {
            return Err(PseudonymError::Configuration(format!(
                "pseudonymization.token_length must be between 1 and {}, got {}",
                UuidTokenGenerator::MAX_LENGTH,
                self.token_length
            )));
        }

        for (key, name) in [
            ("output_file", &self.output_file),
            ("mapping_file", &self.mapping_file),
        ] {
            if name.trim().is_empty() || name.contains('/') || name.contains('\\') {
                return Err(PseudonymError::Configuration(format!(
                    "pseudonymization.{key} must be a plain file name, got '{name}'"
                )));
            }
        }

        if self.output_file == self.mapping_file {
            return Err(PseudonymError::Configuration(
                "pseudonymization.output_file and mapping_file must differ".to_string(),
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PSEUDONYMIZER_PSEUDONYMIZATION_IDENTIFIER_LABEL") {
            self.identifier_label = val;
        }

        if let Ok(val) = std::env::var("PSEUDONYMIZER_PSEUDONYMIZATION_TOKEN_LENGTH") {
            self.token_length = val.parse().map_err(|_| {
                PseudonymError::Configuration(format!(
                    "Invalid PSEUDONYMIZER_PSEUDONYMIZATION_TOKEN_LENGTH: {val}"
                ))
            })?;
        }

        if let Ok(val) = std::env::var("PSEUDONYMIZER_PSEUDONYMIZATION_SEED") {
            self.seed = Some(val.parse().map_err(|_| {
                PseudonymError::Configuration(format!(
                    "Invalid PSEUDONYMIZER_PSEUDONYMIZATION_SEED: {val}"
                ))
            })?);
        }

        if let Ok(val) = std::env::var("PSEUDONYMIZER_PSEUDONYMIZATION_OUTPUT_FILE") {
            self.output_file = val;
        }

        if let Ok(val) = std::env::var("PSEUDONYMIZER_PSEUDONYMIZATION_MAPPING_FILE") {
            self.mapping_file = val;
        }

        if let Ok(val) = std::env::var("PSEUDONYMIZER_PSEUDONYMIZATION_DRY_RUN") {
            self.dry_run = val.parse().unwrap_or(false);
        }

        Ok(())
    }

    /// Build the token generator these settings describe
    pub fn token_generator(&self) -> Result<UuidTokenGenerator> {
        match self.seed {
            Some(seed) => UuidTokenGenerator::seeded(self.token_length, seed),
            None => UuidTokenGenerator::new(self.token_length),
        }
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default = "default_audit_enabled")]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: default_audit_enabled(),
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("PSEUDONYMIZER_AUDIT_ENABLED") {
            self.enabled = val.parse().map_err(|_| {
                PseudonymError::Configuration(format!("Invalid PSEUDONYMIZER_AUDIT_ENABLED: {val}"))
            })?;
        }

        if let Ok(val) = std::env::var("PSEUDONYMIZER_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("PSEUDONYMIZER_AUDIT_JSON_FORMAT") {
            self.json_format = val.parse().map_err(|_| {
                PseudonymError::Configuration(format!(
                    "Invalid PSEUDONYMIZER_AUDIT_JSON_FORMAT: {val}"
                ))
            })?;
        }

        Ok(())
    }
}

fn default_identifier_label() -> String {
    DEFAULT_ID_LABEL.to_string()
}

fn default_token_length() -> usize {
    UuidTokenGenerator::DEFAULT_LENGTH
}

fn default_output_file() -> String {
    "pseudonymized_data.csv".to_string()
}

fn default_mapping_file() -> String {
    "name_mapping.csv".to_string()
}

fn default_preview_rows() -> usize {
    4
}

fn default_audit_enabled() -> bool {
    true
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/pseudonymization.log")
}

fn default_audit_json_format() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PseudonymizationConfig::default();
        assert_eq!(config.identifier_label, "ID");
        assert_eq!(config.token_length, 8);
        assert_eq!(config.output_file, "pseudonymized_data.csv");
        assert_eq!(config.mapping_file, "name_mapping.csv");
        assert_eq!(config.preview_rows, 4);
        assert!(config.seed.is_none());
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());

        let audit = AuditConfig::default();
        assert!(audit.enabled);
        assert!(audit.json_format);
    }

    #[test]
    fn test_invalid_token_length() {
        let config = PseudonymizationConfig {
            token_length: 40,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PseudonymError::Configuration(_))
        ));
    }

    #[test]
    fn test_file_names_must_be_plain_and_distinct() {
        let config = PseudonymizationConfig {
            output_file: "../out.csv".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = PseudonymizationConfig {
            mapping_file: "pseudonymized_data.csv".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seeded_generator_from_config() {
        use crate::pseudonymization::generator::TokenGenerator;

        let config = PseudonymizationConfig {
            seed: Some(7),
            token_length: 12,
            ..Default::default()
        };
        let mut a = config.token_generator().unwrap();
        let mut b = config.token_generator().unwrap();
        let token = a.next_token();
        assert_eq!(token.len(), 12);
        assert_eq!(token, b.next_token());
    }
}
