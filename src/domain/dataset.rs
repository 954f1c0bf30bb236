//! Dataset domain model
//!
//! A [`Dataset`] is an ordered, in-memory table of named columns. Every column
//! holds the same number of rows and row order is never changed by any
//! transformation in this crate.
//!
//! Cell values are kept as the text read from the source file. An empty cell
//! is an ordinary value (the empty string).

use super::errors::PseudonymError;
use super::result::Result;
use std::collections::HashSet;

/// A single named column of a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    values: Vec<String>,
}

impl Column {
    /// Creates a new column from a name and its values
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column values in row order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of values (rows)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no rows
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An ordered collection of equally long, uniquely named columns
///
/// # Examples
///
/// ```
/// use pseudonymizer::domain::Dataset;
///
/// let dataset = Dataset::builder()
///     .column("Name", ["Alice", "Bob", "Alice"])
///     .column("Age", ["30", "40", "30"])
///     .build()
///     .unwrap();
///
/// assert_eq!(dataset.column_names(), vec!["Name", "Age"]);
/// assert_eq!(dataset.row_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Creates a dataset from columns
    ///
    /// # Errors
    ///
    /// Returns [`PseudonymError::Validation`] if two columns share a name or
    /// the columns differ in length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(PseudonymError::Validation(format!(
                    "Duplicate column name: {}",
                    column.name
                )));
            }
        }

        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != expected) {
                return Err(PseudonymError::Validation(format!(
                    "Column '{}' has {} rows, expected {}",
                    bad.name,
                    bad.len(),
                    expected
                )));
            }
        }

        Ok(Self { columns })
    }

    /// Creates a new builder for constructing a Dataset
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    /// Creates a dataset from a header row and row-major records
    ///
    /// # Errors
    ///
    /// Returns [`PseudonymError::Validation`] if a record's width does not
    /// match the header, or if header names repeat.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let width = headers.len();
        let mut values: Vec<Vec<String>> = (0..width)
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(PseudonymError::Validation(format!(
                    "Row {} has {} fields, expected {}",
                    index + 1,
                    row.len(),
                    width
                )));
            }
            for (slot, value) in values.iter_mut().zip(row) {
                slot.push(value);
            }
        }

        let columns = headers
            .into_iter()
            .zip(values)
            .map(|(name, values)| Column { name, values })
            .collect();

        Self::new(columns)
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// All columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by exact (case-sensitive) name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Looks up a column, failing with `ColumnNotFound` if absent
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| PseudonymError::ColumnNotFound(name.to_string()))
    }

    /// Position of a column by name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Whether a column with this name exists
    pub fn contains_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of rows shared by all columns
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the dataset has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Values of one row, in column order
    pub fn row(&self, index: usize) -> Option<Vec<&str>> {
        if index >= self.row_count() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| c.values[index].as_str())
                .collect(),
        )
    }

    /// Iterates rows in order
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.row_count()).filter_map(move |i| self.row(i))
    }

    /// Returns a dataset holding only the first `n` rows
    pub fn head(&self, n: usize) -> Dataset {
        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                values: c.values.iter().take(n).cloned().collect(),
            })
            .collect();
        Dataset { columns }
    }

    pub(crate) fn into_columns(self) -> Vec<Column> {
        self.columns
    }

    /// Rebuilds a dataset from columns taken out of an already valid one.
    ///
    /// Callers must preserve unique names and equal lengths.
    pub(crate) fn from_valid_columns(columns: Vec<Column>) -> Dataset {
        Dataset { columns }
    }
}

/// Builder for constructing Dataset instances
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    columns: Vec<Column>,
}

impl DatasetBuilder {
    /// Creates a new DatasetBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column
    pub fn column<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.columns.push(Column::new(name, values));
        self
    }

    /// Builds the Dataset
    ///
    /// # Errors
    ///
    /// Same as [`Dataset::new`].
    pub fn build(self) -> Result<Dataset> {
        Dataset::new(self.columns)
    }
}
