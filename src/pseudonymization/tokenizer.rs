//! Identifier column tokenization
//!
//! Replaces every value of the identifier column by a short random token,
//! one token per distinct value, and renames the column to a fixed label.

use super::generator::{TokenGenerator, UuidTokenGenerator};
use super::mapping::PseudonymMapping;
use crate::domain::{Column, Dataset, PseudonymError, Result};

/// Label given to the tokenized identifier column
pub const DEFAULT_ID_LABEL: &str = "ID";

/// Result of one tokenization run
#[derive(Debug, Clone)]
pub struct TokenizationOutput {
    /// Dataset with the identifier column tokenized and renamed
    pub dataset: Dataset,

    /// Original value → token, in first-occurrence order
    pub mapping: PseudonymMapping,

    /// Name of the column that was tokenized
    pub identifier_column: String,

    /// Number of generated tokens already assigned to another value
    pub collisions: usize,
}

impl TokenizationOutput {
    /// The mapping in table form (`Original Name`, `Pseudonym`)
    pub fn mapping_table(&self) -> Dataset {
        self.mapping.to_table()
    }
}

/// Tokenizes `identifier_column` with default settings (8-character random
/// tokens, output label `"ID"`).
///
/// # Examples
///
/// ```
/// use pseudonymizer::domain::Dataset;
/// use pseudonymizer::pseudonymization::tokenize;
///
/// let dataset = Dataset::builder()
///     .column("Name", ["Alice", "Bob", "Alice"])
///     .column("Age", ["30", "40", "30"])
///     .build()
///     .unwrap();
///
/// let output = tokenize(&dataset, "Name").unwrap();
/// assert_eq!(output.dataset.column_names(), vec!["ID", "Age"]);
/// assert_eq!(output.mapping.len(), 2);
/// ```
pub fn tokenize(dataset: &Dataset, identifier_column: &str) -> Result<TokenizationOutput> {
    let mut generator = UuidTokenGenerator::default();
    tokenize_with(dataset, identifier_column, DEFAULT_ID_LABEL, &mut generator)
}

/// Tokenizes `identifier_column` using `generator`, renaming it to `output_label`.
///
/// Distinct values are discovered in first-occurrence order and each gets one
/// token. A token handed out twice is counted in
/// [`TokenizationOutput::collisions`] and logged; it is not regenerated.
///
/// # Errors
///
/// - `ColumnNotFound` if `identifier_column` is absent
/// - `Validation` if `output_label` already names another column
pub fn tokenize_with(
    dataset: &Dataset,
    identifier_column: &str,
    output_label: &str,
    generator: &mut dyn TokenGenerator,
) -> Result<TokenizationOutput> {
    let position = dataset
        .position(identifier_column)
        .ok_or_else(|| PseudonymError::ColumnNotFound(identifier_column.to_string()))?;

    if output_label != identifier_column && dataset.contains_column(output_label) {
        return Err(PseudonymError::Validation(format!(
            "Cannot rename '{identifier_column}' to '{output_label}': column already exists"
        )));
    }

    let mut columns = dataset.clone().into_columns();
    let identifier = columns.remove(position);

    let mut mapping = PseudonymMapping::new();
    let mut tokens = Vec::with_capacity(identifier.len());
    let mut collisions = 0usize;
    for value in identifier.values() {
        if let Some(token) = mapping.token_for(value) {
            tokens.push(token.to_string());
            continue;
        }
        let token = generator.next_token();
        tokens.push(token.clone());
        if !mapping.insert(value.clone(), token) {
            collisions += 1;
            tracing::warn!(
                column = %identifier_column,
                distinct_so_far = mapping.len(),
                "Generated pseudonym collides with an earlier one"
            );
        }
    }

    columns.insert(position, Column::new(output_label, tokens));

    tracing::debug!(
        column = %identifier_column,
        rows = dataset.row_count(),
        distinct = mapping.len(),
        collisions,
        "Tokenized identifier column"
    );

    Ok(TokenizationOutput {
        dataset: Dataset::from_valid_columns(columns),
        mapping,
        identifier_column: identifier_column.to_string(),
        collisions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn people() -> Dataset {
        Dataset::builder()
            .column("Name", ["Alice", "Bob", "Alice"])
            .column("Age", ["30", "40", "30"])
            .build()
            .unwrap()
    }

    fn counter() -> impl FnMut() -> String {
        let mut n = 0;
        move || {
            n += 1;
            format!("tok{n}")
        }
    }

    #[test]
    fn test_tokenize_replaces_and_renames_in_place() {
        let mut generator = counter();
        let output = tokenize_with(&people(), "Name", "ID", &mut generator).unwrap();

        assert_eq!(output.dataset.column_names(), vec!["ID", "Age"]);
        assert_eq!(
            output.dataset.column("ID").unwrap().values(),
            &["tok1", "tok2", "tok1"]
        );
        assert_eq!(output.dataset.column("Age").unwrap().values(), &["30", "40", "30"]);
        assert_eq!(output.collisions, 0);
    }

    #[test]
    fn test_mapping_is_first_occurrence_order() {
        let dataset = Dataset::builder()
            .column("Name", ["Carol", "Alice", "Carol", "Bob", "Alice"])
            .build()
            .unwrap();
        let mut generator = counter();
        let output = tokenize_with(&dataset, "Name", "ID", &mut generator).unwrap();

        let entries: Vec<(&str, &str)> = output.mapping.iter().collect();
        assert_eq!(
            entries,
            vec![("Carol", "tok1"), ("Alice", "tok2"), ("Bob", "tok3")]
        );
    }

    #[test]
    fn test_missing_identifier_column() {
        let err = tokenize(&people(), "Email").unwrap_err();
        assert!(matches!(err, PseudonymError::ColumnNotFound(name) if name == "Email"));
    }

    #[test]
    fn test_label_clash_rejected() {
        let mut generator = counter();
        let result = tokenize_with(&people(), "Name", "Age", &mut generator);
        assert!(matches!(result, Err(PseudonymError::Validation(_))));
    }

    #[test]
    fn test_identifier_already_named_like_label() {
        let dataset = Dataset::builder()
            .column("ID", ["7", "8"])
            .build()
            .unwrap();
        let output = tokenize(&dataset, "ID").unwrap();
        assert_eq!(output.dataset.column_names(), vec!["ID"]);
        assert_ne!(output.dataset.column("ID").unwrap().values()[0], "7");
    }

    #[test]
    fn test_collisions_are_counted_not_fixed() {
        let mut generator = || "same".to_string();
        let output = tokenize_with(&people(), "Name", "ID", &mut generator).unwrap();
        assert_eq!(output.collisions, 1);
        assert_eq!(output.mapping.len(), 2);
        let ids: HashSet<&String> = output.dataset.column("ID").unwrap().values().iter().collect();
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn test_empty_dataset_column() {
        let dataset = Dataset::builder()
            .column("Name", Vec::<String>::new())
            .build()
            .unwrap();
        let output = tokenize(&dataset, "Name").unwrap();
        assert_eq!(output.dataset.row_count(), 0);
        assert!(output.mapping.is_empty());
        assert_eq!(output.mapping_table().row_count(), 0);
    }
}
