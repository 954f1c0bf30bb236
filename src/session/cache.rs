//! Per-session dataset cache
//!
//! Loads are always fresh reads from disk. A loaded dataset is kept only
//! under the session key that loaded it, so one session never sees another
//! session's copy and a new session always rereads the file.

use crate::adapters::read_dataset;
use crate::domain::{Dataset, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Datasets cached by `(session key, path)`
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<(String, PathBuf), Dataset>,
}

impl DatasetCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dataset at `path` for `session_key`, reading it from disk
    /// the first time this session asks for it.
    pub fn get_or_load(&mut self, session_key: &str, path: &Path) -> Result<Dataset> {
        let key = (session_key.to_string(), path.to_path_buf());
        if let Some(dataset) = self.entries.get(&key) {
            tracing::debug!(session = %session_key, path = %path.display(), "Dataset cache hit");
            return Ok(dataset.clone());
        }

        let dataset = read_dataset(path)?;
        self.entries.insert(key, dataset.clone());
        Ok(dataset)
    }

    /// Whether `session_key` has `path` cached
    pub fn contains(&self, session_key: &str, path: &Path) -> bool {
        self.entries
            .contains_key(&(session_key.to_string(), path.to_path_buf()))
    }

    /// Drops every entry of `session_key`, returning how many were removed
    pub fn invalidate(&mut self, session_key: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(key, _), _| key != session_key);
        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::debug!(session = %session_key, removed, "Invalidated cached datasets");
        }
        removed
    }

    /// Number of cached datasets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_same_session_hits_cache() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people.csv");
        std::fs::write(&path, "Name\nAlice\n").unwrap();

        let mut cache = DatasetCache::new();
        let first = cache.get_or_load("s1", &path).unwrap();

        std::fs::write(&path, "Name\nBob\n").unwrap();
        let second = cache.get_or_load("s1", &path).unwrap();
        assert_eq!(first, second);
        assert!(cache.contains("s1", &path));
    }

    #[test]
    fn test_other_session_reads_fresh() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people.csv");
        std::fs::write(&path, "Name\nAlice\n").unwrap();

        let mut cache = DatasetCache::new();
        cache.get_or_load("s1", &path).unwrap();

        std::fs::write(&path, "Name\nBob\n").unwrap();
        let other = cache.get_or_load("s2", &path).unwrap();
        assert_eq!(other.row(0), Some(vec!["Bob"]));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_invalidate_forces_reread() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("people.csv");
        std::fs::write(&path, "Name\nAlice\n").unwrap();

        let mut cache = DatasetCache::new();
        cache.get_or_load("s1", &path).unwrap();
        assert_eq!(cache.invalidate("s1"), 1);
        assert!(cache.is_empty());

        std::fs::write(&path, "Name\nBob\n").unwrap();
        let reread = cache.get_or_load("s1", &path).unwrap();
        assert_eq!(reread.row(0), Some(vec!["Bob"]));
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let mut cache = DatasetCache::new();
        assert!(cache.get_or_load("s1", Path::new("/nonexistent/x.csv")).is_err());
        assert!(cache.is_empty());
    }
}
