//! Pseudonymization engine
//!
//! Removes unwanted columns from a dataset and replaces the values of one
//! identifier column by short random tokens, producing a mapping table that
//! reverses the substitution.
//!
//! # Components
//!
//! - [`remover`] - strict column removal
//! - [`generator`] - token sources (random UUID prefix, optionally seeded)
//! - [`tokenizer`] - identifier tokenization and the pseudonym mapping
//! - [`restore`] - reverse tokenization from a mapping table
//! - [`audit`] - append-only run log with hashed content only
//! - [`engine`] - [`PseudonymizationEngine`] tying the steps together
//!
//! Tokens are not a cryptographic anonymization: anyone holding the mapping
//! table can reverse them, and remaining columns may still identify people.

pub mod audit;
pub mod config;
pub mod engine;
pub mod generator;
pub mod mapping;
pub mod remover;
pub mod report;
pub mod restore;
pub mod tokenizer;

pub use config::{AuditConfig, PseudonymizationConfig};
pub use engine::PseudonymizationEngine;
pub use generator::{TokenGenerator, UuidTokenGenerator};
pub use mapping::{PseudonymMapping, ORIGINAL_HEADER, PSEUDONYM_HEADER};
pub use remover::{drop_set_from_keep, remove_columns};
pub use report::{PersistedOutputs, RunSummary};
pub use restore::restore_identifiers;
pub use tokenizer::{tokenize, tokenize_with, TokenizationOutput, DEFAULT_ID_LABEL};
