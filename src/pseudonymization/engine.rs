//! Pseudonymization engine
//!
//! [`PseudonymizationEngine`] ties the steps of a run together: column
//! removal, tokenization of the identifier column, writing both output files
//! and recording the run in the audit log.
//!
//! # Examples
//!
//! ```
//! use pseudonymizer::domain::Dataset;
//! use pseudonymizer::pseudonymization::{
//!     AuditConfig, PseudonymizationConfig, PseudonymizationEngine,
//! };
//!
//! # fn example() -> pseudonymizer::domain::Result<()> {
//! let audit = AuditConfig { enabled: false, ..Default::default() };
//! let engine = PseudonymizationEngine::new(PseudonymizationConfig::default(), &audit)?;
//!
//! let dataset = Dataset::builder()
//!     .column("Name", ["Alice", "Bob", "Alice"])
//!     .column("Age", ["30", "40", "30"])
//!     .column("City", ["X", "Y", "X"])
//!     .build()?;
//!
//! let output = engine.run(&dataset, &["City"], "Name")?;
//! assert_eq!(output.dataset.column_names(), vec!["ID", "Age"]);
//! assert_eq!(output.mapping.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use super::audit::AuditLogger;
use super::config::{AuditConfig, PseudonymizationConfig};
use super::remover::remove_columns;
use super::report::{PersistedOutputs, RunSummary};
use super::tokenizer::{tokenize_with, TokenizationOutput};
use crate::adapters::{checksum, ensure_directory, write_dataset};
use crate::domain::{Dataset, Result};
use std::path::Path;
use std::time::Duration;

/// Orchestrates pseudonymization runs
pub struct PseudonymizationEngine {
    config: PseudonymizationConfig,
    audit_logger: Option<AuditLogger>,
}

impl PseudonymizationEngine {
    /// Create a new engine
    ///
    /// # Errors
    ///
    /// `Configuration` if the settings are invalid. The audit log directory
    /// is only created when the first run is persisted.
    pub fn new(config: PseudonymizationConfig, audit: &AuditConfig) -> Result<Self> {
        config.validate()?;

        let audit_logger = audit
            .enabled
            .then(|| AuditLogger::new(audit.log_path.clone(), audit.json_format));

        Ok(Self {
            config,
            audit_logger,
        })
    }

    /// Active settings
    pub fn config(&self) -> &PseudonymizationConfig {
        &self.config
    }

    /// Whether runs should skip writing files
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }

    /// Removes the drop set from `dataset`
    pub fn remove<S: AsRef<str>>(&self, dataset: &Dataset, drop_set: &[S]) -> Result<Dataset> {
        remove_columns(dataset, drop_set)
    }

    /// Tokenizes `identifier_column` with a fresh generator built from the settings
    ///
    /// Every call builds a new mapping; nothing is shared between runs.
    pub fn tokenize(
        &self,
        dataset: &Dataset,
        identifier_column: &str,
    ) -> Result<TokenizationOutput> {
        let mut generator = self.config.token_generator()?;
        tokenize_with(
            dataset,
            identifier_column,
            &self.config.identifier_label,
            &mut generator,
        )
    }

    /// Removes the drop set, then tokenizes the identifier column
    pub fn run<S: AsRef<str>>(
        &self,
        dataset: &Dataset,
        drop_set: &[S],
        identifier_column: &str,
    ) -> Result<TokenizationOutput> {
        let reduced = self.remove(dataset, drop_set)?;
        self.tokenize(&reduced, identifier_column)
    }

    /// Describes a finished tokenization
    pub fn summarize(
        &self,
        source: impl Into<String>,
        dropped_columns: Vec<String>,
        output: &TokenizationOutput,
        duration: Duration,
    ) -> RunSummary {
        RunSummary {
            source: source.into(),
            dropped_columns,
            identifier_column: output.identifier_column.clone(),
            identifier_label: self.config.identifier_label.clone(),
            rows: output.dataset.row_count(),
            columns_kept: output
                .dataset
                .column_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
            distinct_identifiers: output.mapping.len(),
            collisions: output.collisions,
            token_length: self.config.token_length,
            outputs: None,
            duration,
            dry_run: self.config.dry_run,
        }
    }

    /// Writes the output dataset and mapping table into `dest_dir` and
    /// appends an audit record for the run described by `summary`.
    ///
    /// Existing files are overwritten. `dest_dir` must already exist.
    ///
    /// # Errors
    ///
    /// - `DirectoryNotFound` if `dest_dir` is missing (nothing is written)
    /// - `Io` if a file cannot be written
    pub fn persist(
        &self,
        output: &TokenizationOutput,
        dest_dir: impl AsRef<Path>,
        summary: &RunSummary,
    ) -> Result<PersistedOutputs> {
        let dest_dir = dest_dir.as_ref();
        ensure_directory(dest_dir)?;

        let data_path = dest_dir.join(&self.config.output_file);
        let mapping_path = dest_dir.join(&self.config.mapping_file);

        write_dataset(&output.dataset, &data_path)?;
        write_dataset(&output.mapping_table(), &mapping_path)?;

        let outputs = PersistedOutputs {
            data_checksum: checksum::checksum_file(&data_path)?,
            mapping_checksum: checksum::checksum_file(&mapping_path)?,
            data_path,
            mapping_path,
        };

        if let Some(logger) = &self.audit_logger {
            let mut record = summary.clone();
            record.outputs = Some(outputs.clone());
            logger.log_run(&record, &output.mapping.digest())?;
        }

        tracing::info!(
            data = %outputs.data_path.display(),
            mapping = %outputs.mapping_path.display(),
            rows = output.dataset.row_count(),
            "Persisted pseudonymized dataset and mapping table"
        );

        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PseudonymError;
    use tempfile::tempdir;

    fn people() -> Dataset {
        Dataset::builder()
            .column("Name", ["Alice", "Bob", "Alice"])
            .column("Age", ["30", "40", "30"])
            .column("City", ["X", "Y", "X"])
            .build()
            .unwrap()
    }

    fn engine_without_audit(config: PseudonymizationConfig) -> PseudonymizationEngine {
        let audit = AuditConfig {
            enabled: false,
            ..Default::default()
        };
        PseudonymizationEngine::new(config, &audit).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PseudonymizationConfig {
            token_length: 0,
            ..Default::default()
        };
        let result = PseudonymizationEngine::new(config, &AuditConfig::default());
        assert!(matches!(result, Err(PseudonymError::Configuration(_))));
    }

    #[test]
    fn test_run_drops_then_tokenizes() {
        let engine = engine_without_audit(PseudonymizationConfig::default());
        let output = engine.run(&people(), &["City"], "Name").unwrap();

        assert_eq!(output.dataset.column_names(), vec!["ID", "Age"]);
        let ids = output.dataset.column("ID").unwrap().values();
        assert_eq!(ids[0], ids[2]);
        assert_ne!(ids[0], ids[1]);
        assert!(ids.iter().all(|t| t.len() == 8));
    }

    #[test]
    fn test_run_with_dropped_identifier_fails() {
        let engine = engine_without_audit(PseudonymizationConfig::default());
        let err = engine.run(&people(), &["Name"], "Name").unwrap_err();
        assert!(matches!(err, PseudonymError::ColumnNotFound(name) if name == "Name"));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = PseudonymizationConfig {
            seed: Some(42),
            ..Default::default()
        };
        let engine = engine_without_audit(config);
        let a = engine.run(&people(), &["City"], "Name").unwrap();
        let b = engine.run(&people(), &["City"], "Name").unwrap();
        assert_eq!(a.dataset, b.dataset);
    }

    #[test]
    fn test_custom_label() {
        let config = PseudonymizationConfig {
            identifier_label: "PatientKey".to_string(),
            ..Default::default()
        };
        let engine = engine_without_audit(config);
        let output = engine.run(&people(), &[] as &[&str], "Name").unwrap();
        assert_eq!(output.dataset.column_names(), vec!["PatientKey", "Age", "City"]);
    }

    #[test]
    fn test_persist_writes_both_files_and_audit() {
        let dir = tempdir().unwrap();
        let audit = AuditConfig {
            enabled: true,
            log_path: dir.path().join("audit").join("audit.log"),
            json_format: true,
        };
        let engine =
            PseudonymizationEngine::new(PseudonymizationConfig::default(), &audit).unwrap();

        let output = engine.run(&people(), &["City"], "Name").unwrap();
        let summary =
            engine.summarize("people.csv", vec!["City".into()], &output, Duration::ZERO);
        let persisted = engine.persist(&output, dir.path(), &summary).unwrap();

        let data = std::fs::read_to_string(&persisted.data_path).unwrap();
        assert!(data.starts_with("ID,Age\n"));
        let mapping = std::fs::read_to_string(&persisted.mapping_path).unwrap();
        assert!(mapping.starts_with("Original Name,Pseudonym\nAlice,"));
        assert_eq!(persisted.data_checksum, checksum::checksum_bytes(data.as_bytes()));

        let audit_log = std::fs::read_to_string(&audit.log_path).unwrap();
        assert!(audit_log.contains(&persisted.mapping_checksum));
        assert!(!audit_log.contains("Alice"));
    }

    #[test]
    fn test_persist_into_missing_directory() {
        let engine = engine_without_audit(PseudonymizationConfig::default());
        let output = engine.run(&people(), &["City"], "Name").unwrap();
        let summary = engine.summarize("people.csv", vec![], &output, Duration::ZERO);

        let err = engine
            .persist(&output, "/nonexistent/destination", &summary)
            .unwrap_err();
        assert!(matches!(err, PseudonymError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_tokenize_without_persist_leaves_audit_directory_alone() {
        let dir = tempdir().unwrap();
        let audit = AuditConfig {
            enabled: true,
            log_path: dir.path().join("audit").join("audit.log"),
            json_format: true,
        };
        let config = PseudonymizationConfig {
            dry_run: true,
            ..Default::default()
        };
        let engine = PseudonymizationEngine::new(config, &audit).unwrap();
        assert!(engine.is_dry_run());

        let output = engine.run(&people(), &["City"], "Name").unwrap();
        let summary =
            engine.summarize("people.csv", vec!["City".into()], &output, Duration::ZERO);
        assert!(summary.dry_run);

        assert!(!dir.path().join("audit").exists());
    }
}
