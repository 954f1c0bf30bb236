// Pseudonymizer - CSV column removal and pseudonymization tool
// Copyright (c) 2025 Pseudonymizer Contributors
// Licensed under the MIT License

//! # Pseudonymizer
//!
//! Removes unwanted columns from a CSV dataset and replaces the values of one
//! identifier column with short random tokens. Two files come out of a run:
//! the pseudonymized dataset, whose identifier column is renamed `ID`, and a
//! mapping table (`Original Name`, `Pseudonym`) that reverses the substitution.
//!
//! ## Architecture
//!
//! - [`domain`] - datasets, selections, error types
//! - [`pseudonymization`] - column removal, tokenization, restore, audit log
//! - [`session`] - the per-user workflow state machine and dataset cache
//! - [`adapters`] - CSV files, directories, checksums
//! - [`config`] - configuration management
//! - [`logging`] - structured logging
//! - [`cli`] - command-line interface
//!
//! ## Quick Start
//!
//! ```rust
//! use pseudonymizer::domain::Dataset;
//! use pseudonymizer::pseudonymization::{remove_columns, tokenize};
//!
//! # fn main() -> pseudonymizer::domain::Result<()> {
//! let dataset = Dataset::builder()
//!     .column("Name", ["Alice", "Bob", "Alice"])
//!     .column("Age", ["30", "40", "30"])
//!     .column("City", ["X", "Y", "X"])
//!     .build()?;
//!
//! let reduced = remove_columns(&dataset, &["City"])?;
//! let output = tokenize(&reduced, "Name")?;
//!
//! assert_eq!(output.dataset.column_names(), vec!["ID", "Age"]);
//! assert_eq!(output.mapping_table().column_names(), vec!["Original Name", "Pseudonym"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Sessions
//!
//! Interactive callers drive a [`session::SessionContext`] through discrete
//! actions instead of sharing global state:
//!
//! ```rust,no_run
//! use pseudonymizer::pseudonymization::{
//!     AuditConfig, PseudonymizationConfig, PseudonymizationEngine,
//! };
//! use pseudonymizer::session::{DatasetCache, SessionContext};
//!
//! # fn example() -> pseudonymizer::domain::Result<()> {
//! let engine =
//!     PseudonymizationEngine::new(PseudonymizationConfig::default(), &AuditConfig::default())?;
//! let mut cache = DatasetCache::new();
//! let mut session = SessionContext::new("user-1");
//!
//! session.load("data/people.csv", &mut cache)?;
//! session.select_drop("City", true)?;
//! session.validate()?;
//! session.choose_identifier("Name")?;
//! session.tokenize(&engine)?;
//! session.persist("output", &engine)?;
//! # Ok(())
//! # }
//! ```
//!
//! Tokens are not cryptographic anonymization. The mapping table reverses
//! them and the remaining columns may still identify people.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod pseudonymization;
pub mod session;
