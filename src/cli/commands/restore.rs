//! Restore command implementation
//!
//! Reverses a pseudonymization using its mapping table.

use super::{load_configuration, report_failure};
use crate::adapters::{read_dataset, write_dataset};
use crate::domain::Result;
use crate::pseudonymization::{restore_identifiers, PseudonymMapping, ORIGINAL_HEADER};
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the restore command
#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Pseudonymized dataset
    #[arg(short, long)]
    pub data: PathBuf,

    /// Mapping table written with the dataset
    #[arg(short, long)]
    pub mapping: PathBuf,

    /// File receiving the restored dataset
    #[arg(short, long)]
    pub output: PathBuf,

    /// Name for the restored identifier column
    #[arg(long, default_value = ORIGINAL_HEADER)]
    pub column_name: String,

    /// Tokenized column name (default: pseudonymization.identifier_label)
    #[arg(long)]
    pub id_label: Option<String>,
}

impl RestoreArgs {
    /// Execute the restore command
    pub fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        let config = match load_configuration(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };
        let id_label = self
            .id_label
            .clone()
            .unwrap_or(config.pseudonymization.identifier_label);

        match self.restore(&id_label) {
            Ok(rows) => {
                println!("✅ Restored {} rows into {}", rows, self.output.display());
                Ok(0)
            }
            Err(e) => Ok(report_failure("Restore failed", &e)),
        }
    }

    fn restore(&self, id_label: &str) -> Result<usize> {
        let dataset = read_dataset(&self.data)?;
        let mapping = PseudonymMapping::from_table(&read_dataset(&self.mapping)?)?;

        let restored = restore_identifiers(&dataset, &mapping, id_label, &self.column_name)?;
        write_dataset(&restored, &self.output)?;

        tracing::info!(
            data = %self.data.display(),
            output = %self.output.display(),
            rows = restored.row_count(),
            "Restored pseudonymized dataset"
        );
        Ok(restored.row_count())
    }
}
