//! Result type alias for the pseudonymizer
//!
//! This module provides a convenient Result type alias that uses
//! [`PseudonymError`] as the error type.

use super::errors::PseudonymError;

/// Result type alias for pseudonymizer operations
///
/// # Examples
///
/// ```
/// use pseudonymizer::domain::result::Result;
/// use pseudonymizer::domain::errors::PseudonymError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PseudonymError::NoSelection("no column selected".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PseudonymError>;
