//! Audit logger for pseudonymization runs

use crate::domain::{Result, ResultExt};
use crate::pseudonymization::report::RunSummary;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
///
/// Never holds identifier values or tokens, only counts, file checksums and
/// a digest of the mapping.
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    source: String,
    dropped_columns: Vec<String>,
    identifier_column: String,
    rows: usize,
    distinct_identifiers: usize,
    token_length: usize,
    collisions: usize,
    mapping_digest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data_checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mapping_checksum: Option<String>,
}

/// Audit logger for pseudonymization runs
///
/// Nothing touches the filesystem until the first entry is written.
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool) -> Self {
        Self {
            log_path,
            json_format,
        }
    }

    /// Record one run
    pub fn log_run(&self, summary: &RunSummary, mapping_digest: &str) -> Result<()> {
        let entry = AuditLogEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            source: summary.source.clone(),
            dropped_columns: summary.dropped_columns.clone(),
            identifier_column: summary.identifier_column.clone(),
            rows: summary.rows,
            distinct_identifiers: summary.distinct_identifiers,
            token_length: summary.token_length,
            collisions: summary.collisions,
            mapping_digest: mapping_digest.to_string(),
            data_checksum: summary.outputs.as_ref().map(|o| o.data_checksum.clone()),
            mapping_checksum: summary.outputs.as_ref().map(|o| o.mapping_checksum.clone()),
        };

        self.write_entry(&entry)
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        if let Some(parent) = self.log_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create audit log directory: {}", parent.display())
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line = serde_json::to_string(entry)?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] Source: {} | Dropped: {} | Identifier: {} | \
                 Rows: {} | Distinct: {} | Collisions: {}",
                entry.timestamp,
                entry.source,
                entry.dropped_columns.join(","),
                entry.identifier_column,
                entry.rows,
                entry.distinct_identifiers,
                entry.collisions
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}
