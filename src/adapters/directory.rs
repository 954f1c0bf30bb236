//! Source and destination directory handling

use crate::domain::{PseudonymError, Result};
use std::path::{Path, PathBuf};

/// Extension recognized as tabular input
pub const DEFAULT_EXTENSION: &str = ".csv";

/// Fails with `DirectoryNotFound` unless `dir` is an existing directory.
///
/// Destination directories are never created on the user's behalf.
pub fn ensure_directory(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() || !dir.is_dir() {
        return Err(PseudonymError::DirectoryNotFound(dir.display().to_string()));
    }
    Ok(())
}

/// Lists the names of files in `dir` ending with `extension`, sorted.
///
/// Only regular files directly inside `dir` are listed.
///
/// # Errors
///
/// `DirectoryNotFound` if `dir` is not a directory; `Io` if it cannot be read.
pub fn list_tabular_files(dir: impl AsRef<Path>, extension: &str) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    ensure_directory(dir)?;

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(extension) {
                files.push(name.to_string());
            }
        }
    }
    files.sort();

    tracing::debug!(dir = %dir.display(), count = files.len(), "Scanned source directory");
    Ok(files)
}

/// Resolves a file argument against the source directory.
///
/// A path that exists as given wins; otherwise it is joined onto `source_dir`.
pub fn resolve_source_file(file: impl AsRef<Path>, source_dir: Option<&Path>) -> PathBuf {
    let file = file.as_ref();
    match source_dir {
        Some(dir) if !file.exists() && file.is_relative() => dir.join(file),
        _ => file.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_tabular_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("b.csv"), "A\n1\n").unwrap();
        std::fs::write(dir.path().join("a.csv"), "A\n1\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        std::fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let files = list_tabular_files(dir.path(), DEFAULT_EXTENSION).unwrap();
        assert_eq!(files, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_list_missing_directory() {
        let err = list_tabular_files("/nonexistent/source", DEFAULT_EXTENSION).unwrap_err();
        assert!(matches!(err, PseudonymError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_ensure_directory_rejects_files_and_empty_paths() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("x.csv");
        std::fs::write(&file, "A\n").unwrap();

        assert!(ensure_directory(dir.path()).is_ok());
        assert!(matches!(
            ensure_directory(&file),
            Err(PseudonymError::DirectoryNotFound(_))
        ));
        assert!(ensure_directory("").is_err());
    }

    #[test]
    fn test_resolve_source_file() {
        let dir = tempdir().unwrap();
        let resolved = resolve_source_file("people.csv", Some(dir.path()));
        assert_eq!(resolved, dir.path().join("people.csv"));

        let absolute = dir.path().join("other.csv");
        assert_eq!(resolve_source_file(&absolute, Some(Path::new("/srv"))), absolute);
        assert_eq!(resolve_source_file("people.csv", None), PathBuf::from("people.csv"));
    }
}
