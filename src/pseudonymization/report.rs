//! Run summaries
//!
//! A [`RunSummary`] describes one pseudonymization run for the console and
//! the audit log. It carries counts and checksums, never identifier values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Files written by a persisted run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedOutputs {
    /// Path of the pseudonymized dataset
    pub data_path: PathBuf,

    /// Path of the mapping table
    pub mapping_path: PathBuf,

    /// SHA-256 of the pseudonymized dataset file
    pub data_checksum: String,

    /// SHA-256 of the mapping table file
    pub mapping_checksum: String,
}

/// Summary of a pseudonymization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Label of the source dataset, usually its file name
    pub source: String,

    /// Columns removed before tokenization
    pub dropped_columns: Vec<String>,

    /// Column that was tokenized
    pub identifier_column: String,

    /// Name the tokenized column received
    pub identifier_label: String,

    /// Rows in the output dataset
    pub rows: usize,

    /// Output column names in order
    pub columns_kept: Vec<String>,

    /// Distinct identifier values, one mapping entry each
    pub distinct_identifiers: usize,

    /// Tokens that were handed out twice
    pub collisions: usize,

    /// Characters per token
    pub token_length: usize,

    /// Written files, absent for dry runs
    pub outputs: Option<PersistedOutputs>,

    /// Wall-clock time of the run
    #[serde(with = "duration_millis")]
    pub duration: Duration,

    /// Whether writing was skipped
    pub dry_run: bool,
}

impl RunSummary {
    /// Whether every distinct value received its own token
    pub fn is_collision_free(&self) -> bool {
        self.collisions == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Source:               {}", self.source)?;
        writeln!(
            f,
            "Dropped columns:      {}",
            if self.dropped_columns.is_empty() {
                "(none)".to_string()
            } else {
                self.dropped_columns.join(", ")
            }
        )?;
        writeln!(
            f,
            "Identifier column:    {} -> {}",
            self.identifier_column, self.identifier_label
        )?;
        writeln!(f, "Output columns:       {}", self.columns_kept.join(", "))?;
        writeln!(f, "Rows:                 {}", self.rows)?;
        writeln!(f, "Distinct identifiers: {}", self.distinct_identifiers)?;
        if !self.is_collision_free() {
            writeln!(f, "Token collisions:     {}", self.collisions)?;
        }
        writeln!(f, "Duration:             {} ms", self.duration.as_millis())?;

        match &self.outputs {
            Some(outputs) => {
                writeln!(f, "Data file:            {}", outputs.data_path.display())?;
                writeln!(f, "  sha256:             {}", outputs.data_checksum)?;
                writeln!(f, "Mapping file:         {}", outputs.mapping_path.display())?;
                write!(f, "  sha256:             {}", outputs.mapping_checksum)
            }
            None if self.dry_run => write!(f, "Dry run: no files written"),
            None => write!(f, "Not persisted"),
        }
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> RunSummary {
        RunSummary {
            source: "people.csv".to_string(),
            dropped_columns: vec![],
            identifier_column: "Name".to_string(),
            identifier_label: "ID".to_string(),
            rows: 3,
            columns_kept: vec!["ID".to_string(), "Age".to_string()],
            distinct_identifiers: 2,
            collisions: 0,
            token_length: 8,
            outputs: None,
            duration: Duration::from_millis(12),
            dry_run: true,
        }
    }

    #[test]
    fn test_display_dry_run() {
        let text = summary().to_string();
        assert!(text.contains("Dropped columns:      (none)"));
        assert!(text.contains("Name -> ID"));
        assert!(text.contains("Dry run: no files written"));
        assert!(!text.contains("collisions"));
    }

    #[test]
    fn test_serializes_duration_as_millis() {
        let json = serde_json::to_value(summary()).unwrap();
        assert_eq!(json["duration"], 12);
        assert_eq!(json["outputs"], serde_json::Value::Null);
    }
}
