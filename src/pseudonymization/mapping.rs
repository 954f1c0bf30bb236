//! Pseudonym mapping and its tabular form
//!
//! The mapping links each distinct original identifier value to its token,
//! in the order the values were first seen. Its table form, the mapping
//! table, is the only way to reverse a tokenization and must be kept secret.

use crate::domain::{Column, Dataset, PseudonymError, Result};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Header of the original-value column of a mapping table
pub const ORIGINAL_HEADER: &str = "Original Name";

/// Header of the token column of a mapping table
pub const PSEUDONYM_HEADER: &str = "Pseudonym";

/// Ordered original-value → token mapping for one tokenization run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PseudonymMapping {
    entries: Vec<(String, String)>,
    by_original: HashMap<String, usize>,
    by_token: HashMap<String, usize>,
}

impl PseudonymMapping {
    /// Creates an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry for a value not yet mapped.
    ///
    /// Returns `false` when the token was already assigned to another value
    /// (a collision). The entry is still recorded; reverse lookups keep
    /// resolving the token to the first value that received it.
    pub(crate) fn insert(&mut self, original: String, token: String) -> bool {
        let index = self.entries.len();
        let fresh_token = !self.by_token.contains_key(&token);
        if fresh_token {
            self.by_token.insert(token.clone(), index);
        }
        self.by_original.insert(original.clone(), index);
        self.entries.push((original, token));
        fresh_token
    }

    /// Token assigned to an original value
    pub fn token_for(&self, original: &str) -> Option<&str> {
        self.by_original
            .get(original)
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Original value behind a token
    pub fn original_for(&self, token: &str) -> Option<&str> {
        self.by_token
            .get(token)
            .map(|&i| self.entries[i].0.as_str())
    }

    /// Whether an original value is mapped
    pub fn contains_original(&self, original: &str) -> bool {
        self.by_original.contains_key(original)
    }

    /// Number of entries (distinct original values)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as `(original, token)` in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(o, t)| (o.as_str(), t.as_str()))
    }

    /// Builds the two-column mapping table
    pub fn to_table(&self) -> Dataset {
        let originals = Column::new(ORIGINAL_HEADER, self.entries.iter().map(|(o, _)| o.clone()));
        let tokens = Column::new(PSEUDONYM_HEADER, self.entries.iter().map(|(_, t)| t.clone()));
        Dataset::from_valid_columns(vec![originals, tokens])
    }

    /// Rebuilds a mapping from a mapping table (e.g. a loaded `name_mapping.csv`)
    ///
    /// # Errors
    ///
    /// `ColumnNotFound` if either header is missing; `Validation` if an
    /// original value appears twice.
    pub fn from_table(table: &Dataset) -> Result<Self> {
        let originals = table.require_column(ORIGINAL_HEADER)?;
        let tokens = table.require_column(PSEUDONYM_HEADER)?;

        let mut mapping = Self::new();
        for (original, token) in originals.values().iter().zip(tokens.values()) {
            if mapping.contains_original(original) {
                return Err(PseudonymError::Validation(format!(
                    "Mapping table lists '{original}' more than once"
                )));
            }
            if !mapping.insert(original.clone(), token.clone()) {
                tracing::warn!("Mapping table reuses a pseudonym for different values");
            }
        }
        Ok(mapping)
    }

    /// SHA-256 digest over all entries, for audit records that must not
    /// contain the mapping itself
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for (original, token) in &self.entries {
            hasher.update(original.as_bytes());
            hasher.update([0u8]);
            hasher.update(token.as_bytes());
            hasher.update([b'\n']);
        }
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PseudonymMapping {
        let mut mapping = PseudonymMapping::new();
        assert!(mapping.insert("Alice".to_string(), "a1b2c3d4".to_string()));
        assert!(mapping.insert("Bob".to_string(), "e5f6a7b8".to_string()));
        mapping
    }

    #[test]
    fn test_lookups() {
        let mapping = sample();
        assert_eq!(mapping.token_for("Alice"), Some("a1b2c3d4"));
        assert_eq!(mapping.original_for("e5f6a7b8"), Some("Bob"));
        assert_eq!(mapping.token_for("Carol"), None);
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn test_collision_is_reported() {
        let mut mapping = sample();
        assert!(!mapping.insert("Carol".to_string(), "a1b2c3d4".to_string()));
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.original_for("a1b2c3d4"), Some("Alice"));
    }

    #[test]
    fn test_to_table_headers_and_order() {
        let table = sample().to_table();
        assert_eq!(table.column_names(), vec![ORIGINAL_HEADER, PSEUDONYM_HEADER]);
        assert_eq!(table.row(0), Some(vec!["Alice", "a1b2c3d4"]));
        assert_eq!(table.row(1), Some(vec!["Bob", "e5f6a7b8"]));
    }

    #[test]
    fn test_from_table_roundtrip() {
        let mapping = sample();
        let rebuilt = PseudonymMapping::from_table(&mapping.to_table()).unwrap();
        assert_eq!(rebuilt, mapping);
    }

    #[test]
    fn test_from_table_missing_header() {
        let table = Dataset::builder()
            .column("Original", ["Alice"])
            .column(PSEUDONYM_HEADER, ["x"])
            .build()
            .unwrap();
        assert!(matches!(
            PseudonymMapping::from_table(&table),
            Err(PseudonymError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_from_table_duplicate_original() {
        let table = Dataset::builder()
            .column(ORIGINAL_HEADER, ["Alice", "Alice"])
            .column(PSEUDONYM_HEADER, ["x", "y"])
            .build()
            .unwrap();
        assert!(PseudonymMapping::from_table(&table).is_err());
    }

    #[test]
    fn test_digest_is_stable_and_hides_values() {
        let a = sample().digest();
        let b = sample().digest();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(!a.contains("Alice"));
    }
}
