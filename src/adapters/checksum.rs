//! SHA-256 checksums of written artifacts
//!
//! Checksums let a user confirm later that an output file or mapping table
//! is the one recorded in the audit log.

use crate::domain::{Result, ResultExt};
use sha2::{Digest, Sha256};
use std::path::Path;

/// Calculate SHA-256 checksum of raw bytes
///
/// Returns a hex-encoded string (64 characters).
pub fn checksum_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Calculate SHA-256 checksum of a file's content
pub fn checksum_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read {} for checksum", path.display()))?;
    Ok(checksum_bytes(&data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            checksum_bytes(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_file_checksum_matches_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "ID\nabc\n").unwrap();
        assert_eq!(checksum_file(&path).unwrap(), checksum_bytes(b"ID\nabc\n"));
    }

    #[test]
    fn test_missing_file() {
        assert!(checksum_file("/nonexistent/file.csv").is_err());
    }
}
