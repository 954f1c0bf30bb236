//! Column removal
//!
//! Removing columns is the first step of every run: the user's drop set is
//! applied before the identifier column is tokenized.

use crate::domain::{Dataset, PseudonymError, Result};
use std::collections::HashSet;

/// Returns a copy of `dataset` without the columns named in `drop_set`.
///
/// Retained columns keep their order and values. An empty drop set returns
/// the dataset unchanged. Every name must exist: the first unknown name
/// fails with [`PseudonymError::ColumnNotFound`] and nothing is removed.
///
/// # Examples
///
/// ```
/// use pseudonymizer::domain::Dataset;
/// use pseudonymizer::pseudonymization::remove_columns;
///
/// let dataset = Dataset::builder()
///     .column("Name", ["Alice"])
///     .column("City", ["X"])
///     .build()
///     .unwrap();
///
/// let reduced = remove_columns(&dataset, &["City"]).unwrap();
/// assert_eq!(reduced.column_names(), vec!["Name"]);
/// ```
pub fn remove_columns<S: AsRef<str>>(dataset: &Dataset, drop_set: &[S]) -> Result<Dataset> {
    if let Some(missing) = drop_set
        .iter()
        .map(AsRef::as_ref)
        .find(|name| !dataset.contains_column(name))
    {
        return Err(PseudonymError::ColumnNotFound(missing.to_string()));
    }

    let dropped: HashSet<&str> = drop_set.iter().map(AsRef::as_ref).collect();
    let kept = dataset
        .columns()
        .iter()
        .filter(|column| !dropped.contains(column.name()))
        .cloned()
        .collect();

    Ok(Dataset::from_valid_columns(kept))
}

/// Computes the drop set as the complement of the columns to keep.
///
/// The result follows the dataset's column order.
///
/// # Errors
///
/// `ColumnNotFound` if a name in `keep` is not a column of the dataset.
pub fn drop_set_from_keep<S: AsRef<str>>(dataset: &Dataset, keep: &[S]) -> Result<Vec<String>> {
    if let Some(missing) = keep
        .iter()
        .map(AsRef::as_ref)
        .find(|name| !dataset.contains_column(name))
    {
        return Err(PseudonymError::ColumnNotFound(missing.to_string()));
    }

    let kept: HashSet<&str> = keep.iter().map(AsRef::as_ref).collect();
    Ok(dataset
        .column_names()
        .into_iter()
        .filter(|name| !kept.contains(name))
        .map(str::to_string)
        .collect())
}
