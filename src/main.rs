// Pseudonymizer - CSV column removal and pseudonymization tool
// Copyright (c) 2025 Pseudonymizer Contributors
// Licensed under the MIT License

use clap::Parser;
use pseudonymizer::cli::Cli;
use pseudonymizer::config::{load_config_or_default, LoggingConfig};
use pseudonymizer::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the configuration when it loads; commands
    // report configuration errors themselves.
    let (config_level, logging_config) = match load_config_or_default(cli.config.as_deref()) {
        Ok((config, _)) => (config.application.log_level, config.logging),
        Err(_) => ("info".to_string(), LoggingConfig::default()),
    };
    let log_level = cli.log_level.clone().unwrap_or(config_level);

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Pseudonymizer starting");

    let exit_code = match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    drop(guard);
    process::exit(exit_code);
}
