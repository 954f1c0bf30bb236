//! Columns command implementation
//!
//! Shows the columns of a dataset so the user can pick what to drop and
//! which column holds the identifier.

use super::{load_configuration, report_failure};
use crate::adapters::{read_dataset, resolve_source_file};
use clap::Args;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Arguments for the columns command
#[derive(Args, Debug)]
pub struct ColumnsArgs {
    /// Dataset to inspect (relative names are also looked up in paths.source_dir)
    #[arg(short, long)]
    pub file: PathBuf,
}

impl ColumnsArgs {
    /// Execute the columns command
    pub fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        let config = match load_configuration(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let path = resolve_source_file(&self.file, Some(&config.paths.source_dir));
        let dataset = match read_dataset(&path) {
            Ok(d) => d,
            Err(e) => return Ok(report_failure("Failed to load dataset", &e)),
        };

        println!(
            "📋 {} ({} rows, {} columns)",
            path.display(),
            dataset.row_count(),
            dataset.column_count()
        );
        println!();
        for (index, column) in dataset.columns().iter().enumerate() {
            let distinct: HashSet<&str> = column.values().iter().map(String::as_str).collect();
            println!(
                "  {:>3}. {}  ({} distinct values)",
                index + 1,
                column.name(),
                distinct.len()
            );
        }
        Ok(0)
    }
}
