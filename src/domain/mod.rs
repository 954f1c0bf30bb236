//! Domain models and types for the pseudonymizer.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Tabular data** ([`Dataset`], [`Column`], [`DatasetBuilder`])
//! - **User choices** ([`SelectionSet`], [`validate_selection`])
//! - **Error types** ([`PseudonymError`])
//! - **Result type alias** ([`Result`]) and the [`ResultExt`] context trait
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, PseudonymError>`]:
//!
//! ```rust
//! use pseudonymizer::domain::{Dataset, Result};
//!
//! fn columns_of(dataset: &Dataset, wanted: &str) -> Result<usize> {
//!     Ok(dataset.require_column(wanted)?.len())
//! }
//! ```

pub mod context;
pub mod dataset;
pub mod errors;
pub mod result;
pub mod selection;

// Re-export commonly used types for convenience
pub use context::ResultExt;
pub use dataset::{Column, Dataset, DatasetBuilder};
pub use errors::PseudonymError;
pub use result::Result;
pub use selection::{validate_selection, SelectionSet};
