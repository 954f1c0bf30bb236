//! CSV storage for datasets
//!
//! Files are comma-separated with a header row. Reading loads the whole file
//! into memory; writing overwrites the target file completely and never adds
//! an index column.

use crate::domain::{Dataset, PseudonymError, Result, ResultExt};
use std::io::{Read, Write};
use std::path::Path;

/// Reads a CSV file into a [`Dataset`]
///
/// # Errors
///
/// Returns [`PseudonymError::DataLoad`] with the underlying cause when the
/// file is missing or unreadable, a record has the wrong number of fields,
/// a field is not valid UTF-8, or two headers share a name.
pub fn read_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| {
        PseudonymError::DataLoad(format!("Cannot open {}: {}", path.display(), e))
    })?;

    let dataset = read_dataset_from(file).with_context(|| path.display().to_string())?;

    tracing::info!(
        path = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "Loaded dataset"
    );

    Ok(dataset)
}

/// Reads CSV data from any reader
pub fn read_dataset_from<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(load_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(load_error)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Dataset::from_rows(headers, rows).map_err(|e| match e {
        PseudonymError::Validation(msg) => PseudonymError::DataLoad(msg),
        other => other,
    })
}

/// Writes a dataset as CSV, replacing any existing file
///
/// # Errors
///
/// Returns [`PseudonymError::Io`] if the file cannot be created or written.
pub fn write_dataset(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    write_dataset_to(dataset, file).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        rows = dataset.row_count(),
        "Wrote dataset"
    );

    Ok(())
}

/// Writes CSV data to any writer
pub fn write_dataset_to<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut writer = ::csv::WriterBuilder::new().from_writer(writer);

    writer.write_record(dataset.column_names())?;
    for row in dataset.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn load_error(err: ::csv::Error) -> PseudonymError {
    PseudonymError::DataLoad(err.to_string())
}
