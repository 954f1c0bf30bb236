//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the pseudonymizer using clap.

pub mod commands;
pub mod preview;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pseudonymizer - remove columns from CSV datasets and replace an identifier
/// column with short random tokens
#[derive(Parser, Debug)]
#[command(name = "pseudonymizer")]
#[command(version, about, long_about = None)]
#[command(author = "Pseudonymizer Contributors")]
pub struct Cli {
    /// Path to configuration file [default: pseudonymizer.toml if present]
    #[arg(short, long, env = "PSEUDONYMIZER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PSEUDONYMIZER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tabular files in the source directory
    List(commands::list::ListArgs),

    /// Show the columns of a dataset
    Columns(commands::columns::ColumnsArgs),

    /// Drop columns and tokenize the identifier column
    Pseudonymize(commands::pseudonymize::PseudonymizeArgs),

    /// Reverse a pseudonymization with its mapping table
    Restore(commands::restore::RestoreArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Runs the selected command and returns its exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        let config = self.config.as_deref();
        match &self.command {
            Commands::List(args) => args.execute(config),
            Commands::Columns(args) => args.execute(config),
            Commands::Pseudonymize(args) => args.execute(config),
            Commands::Restore(args) => args.execute(config),
            Commands::ValidateConfig(args) => args.execute(config),
            Commands::Init(args) => args.execute(),
        }
    }
}
