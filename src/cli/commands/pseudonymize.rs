//! Pseudonymize command implementation
//!
//! Drives one session from start to finish: load the dataset, drop the chosen
//! columns, tokenize the identifier column, preview the result and write the
//! pseudonymized dataset plus its mapping table.

use super::{load_configuration, report_failure};
use crate::adapters::resolve_source_file;
use crate::cli::preview::render_table;
use crate::domain::PseudonymError;
use crate::pseudonymization::{drop_set_from_keep, PseudonymizationEngine};
use crate::session::{DatasetCache, SessionContext};
use crate::{log_run_complete, log_run_start};
use clap::{ArgGroup, Args};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Arguments for the pseudonymize command
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("selection").required(true).args(["drop", "keep"])))]
pub struct PseudonymizeArgs {
    /// Dataset to pseudonymize (relative names are also looked up in paths.source_dir)
    #[arg(short, long)]
    pub file: PathBuf,

    /// Columns to remove (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub drop: Vec<String>,

    /// Columns to keep; every other column is removed (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub keep: Vec<String>,

    /// Column whose values are replaced by tokens
    #[arg(long)]
    pub id_column: String,

    /// Override paths.destination_dir
    #[arg(short, long)]
    pub dest_dir: Option<PathBuf>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Preview only, write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Seed for reproducible tokens (not for real data)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl PseudonymizeArgs {
    /// Execute the pseudonymize command
    pub fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        tracing::info!("Starting pseudonymize command");

        let mut config = match load_configuration(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        if let Some(seed) = self.seed {
            tracing::warn!("Using a fixed seed; tokens are reproducible");
            config.pseudonymization.seed = Some(seed);
        }
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.pseudonymization.dry_run = true;
        }
        let preview_rows = config.pseudonymization.preview_rows;

        let engine =
            match PseudonymizationEngine::new(config.pseudonymization.clone(), &config.audit) {
                Ok(e) => e,
                Err(e) => return Ok(report_failure("Failed to initialize pseudonymization", &e)),
            };

        let source = resolve_source_file(&self.file, Some(&config.paths.source_dir));
        let dest_dir = self
            .dest_dir
            .clone()
            .unwrap_or_else(|| config.paths.destination_dir.clone());

        let mut cache = DatasetCache::new();
        let mut session = SessionContext::new(uuid::Uuid::new_v4().to_string());

        let dataset = match session.load(&source, &mut cache) {
            Ok(d) => d,
            Err(e) => return Ok(report_failure("Failed to load dataset", &e)),
        };

        let drop_set = if self.keep.is_empty() {
            self.drop.clone()
        } else {
            match drop_set_from_keep(dataset, &self.keep) {
                Ok(set) => set,
                Err(e) => return Ok(report_failure("Invalid --keep selection", &e)),
            }
        };

        if let Err(e) = self.apply_selection(&mut session, &drop_set) {
            return Ok(report_failure("Invalid column selection", &e));
        }

        log_run_start!(source.display(), self.id_column);

        let output = match session.tokenize(&engine) {
            Ok(output) => output,
            Err(e) => return Ok(report_failure("Tokenization failed", &e)),
        };
        let preview = output.dataset.head(preview_rows);
        let collisions = output.collisions;

        println!("🔍 Preview (first {} rows):", preview.row_count());
        println!();
        print!("{}", render_table(&preview));
        println!();

        if collisions > 0 {
            println!("⚠️  {collisions} generated token(s) collided; rerun to get fresh tokens");
            println!();
        }

        if engine.is_dry_run() {
            tracing::info!("Dry run mode enabled - no files will be written");
            if let Some(summary) = session.summary() {
                println!("📊 Summary:");
                println!("{summary}");
            }
            return Ok(0);
        }

        if !self.yes && !confirm(&dest_dir, &config.pseudonymization.output_file)? {
            println!("Pseudonymization cancelled.");
            return Ok(0);
        }

        if let Err(e) = session.persist(&dest_dir, &engine) {
            return Ok(report_failure("Failed to write outputs", &e));
        }

        if let Some(summary) = session.summary() {
            log_run_complete!(summary.rows, summary.distinct_identifiers, summary.duration);
            println!("📊 Summary:");
            println!("{summary}");
            println!();
            println!("🔒 Keep the mapping table secret: it reverses the pseudonymization.");
        }

        Ok(0)
    }

    /// Ticks the drop columns, validates the selection and picks the identifier
    fn apply_selection(
        &self,
        session: &mut SessionContext,
        drop_set: &[String],
    ) -> Result<(), PseudonymError> {
        for column in drop_set {
            session.select_drop(column, true)?;
        }
        session.validate()?;
        session.choose_identifier(&self.id_column)
    }
}

fn confirm(dest_dir: &Path, output_file: &str) -> anyhow::Result<bool> {
    print!(
        "Write {} and the mapping table to {}? [y/N]: ",
        output_file,
        dest_dir.display()
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
