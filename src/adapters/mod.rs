//! Storage adapters
//!
//! Local filesystem access for the pseudonymizer:
//! - [`tabular`] - CSV reading and writing of datasets
//! - [`directory`] - source directory scanning and destination checks
//! - [`checksum`] - SHA-256 digests of written files

pub mod checksum;
pub mod directory;
pub mod tabular;

pub use directory::{ensure_directory, list_tabular_files, resolve_source_file, DEFAULT_EXTENSION};
pub use tabular::{read_dataset, write_dataset};
