//! List command implementation
//!
//! Lists the tabular files available in the source directory.

use super::{load_configuration, report_failure};
use crate::adapters::list_tabular_files;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to scan instead of paths.source_dir
    #[arg(short, long)]
    pub source_dir: Option<PathBuf>,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        let config = match load_configuration(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let dir = self
            .source_dir
            .clone()
            .unwrap_or_else(|| config.paths.source_dir.clone());

        let files = match list_tabular_files(&dir, &config.paths.file_extension) {
            Ok(files) => files,
            Err(e) => return Ok(report_failure("Cannot list source directory", &e)),
        };

        if files.is_empty() {
            println!(
                "No {} files found in {}",
                config.paths.file_extension,
                dir.display()
            );
            return Ok(0);
        }

        println!("📂 {} ({} files)", dir.display(), files.len());
        for file in &files {
            println!("  {file}");
        }
        Ok(0)
    }
}
