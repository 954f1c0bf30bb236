//! Reverse tokenization
//!
//! Uses a mapping table to put the original identifier values back into a
//! pseudonymized dataset.

use super::mapping::PseudonymMapping;
use crate::domain::{Column, Dataset, PseudonymError, Result};

/// Replaces the tokens in `id_label` by their original values and renames
/// the column to `restored_name`, keeping its position.
///
/// # Errors
///
/// - `ColumnNotFound` if `id_label` is not a column
/// - `PseudonymNotFound` if a token has no entry in `mapping`
/// - `Validation` if `restored_name` already names another column
pub fn restore_identifiers(
    dataset: &Dataset,
    mapping: &PseudonymMapping,
    id_label: &str,
    restored_name: &str,
) -> Result<Dataset> {
    let position = dataset
        .position(id_label)
        .ok_or_else(|| PseudonymError::ColumnNotFound(id_label.to_string()))?;

    if restored_name != id_label && dataset.contains_column(restored_name) {
        return Err(PseudonymError::Validation(format!(
            "Cannot rename '{id_label}' to '{restored_name}': column already exists"
        )));
    }

    let mut columns = dataset.clone().into_columns();
    let tokens = columns.remove(position);

    let originals = tokens
        .values()
        .iter()
        .map(|token| {
            mapping
                .original_for(token)
                .map(str::to_string)
                .ok_or_else(|| PseudonymError::PseudonymNotFound(token.clone()))
        })
        .collect::<Result<Vec<String>>>()?;

    columns.insert(position, Column::new(restored_name, originals));

    tracing::debug!(
        column = %restored_name,
        rows = dataset.row_count(),
        "Restored identifier column"
    );

    Ok(Dataset::from_valid_columns(columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pseudonymization::tokenizer::tokenize;

    #[test]
    fn test_roundtrip_recovers_original_values() {
        let dataset = Dataset::builder()
            .column("Age", ["30", "40", "30"])
            .column("Name", ["Alice", "Bob", "Alice"])
            .build()
            .unwrap();

        let output = tokenize(&dataset, "Name").unwrap();
        let restored = restore_identifiers(&output.dataset, &output.mapping, "ID", "Name").unwrap();

        assert_eq!(restored, dataset);
    }

    #[test]
    fn test_unknown_token() {
        let dataset = Dataset::builder()
            .column("ID", ["deadbeef"])
            .build()
            .unwrap();
        let err =
            restore_identifiers(&dataset, &PseudonymMapping::new(), "ID", "Name").unwrap_err();
        assert!(matches!(err, PseudonymError::PseudonymNotFound(token) if token == "deadbeef"));
    }

    #[test]
    fn test_missing_id_column() {
        let dataset = Dataset::builder().column("Age", ["1"]).build().unwrap();
        assert!(matches!(
            restore_identifiers(&dataset, &PseudonymMapping::new(), "ID", "Name"),
            Err(PseudonymError::ColumnNotFound(_))
        ));
    }
}
