//! Validate config command implementation
//!
//! Loads and validates the configuration and prints a summary of it.

use crate::config::load_config_or_default;
use clap::Args;
use std::path::Path;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: Option<&Path>) -> anyhow::Result<i32> {
        tracing::info!("Validating configuration");

        let (config, source) = match load_config_or_default(config_path) {
            Ok(loaded) => loaded,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(e.exit_code());
            }
        };

        println!("✅ Configuration is valid ({source})");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Source Directory: {}", config.paths.source_dir.display());
        println!(
            "  Destination Directory: {}{}",
            config.paths.destination_dir.display(),
            if config.paths.destination_dir.is_dir() {
                ""
            } else {
                " (missing)"
            }
        );
        println!("  File Extension: {}", config.paths.file_extension);
        println!("  Identifier Label: {}", config.pseudonymization.identifier_label);
        println!("  Token Length: {}", config.pseudonymization.token_length);
        println!(
            "  Output Files: {}, {}",
            config.pseudonymization.output_file, config.pseudonymization.mapping_file
        );
        if config.pseudonymization.seed.is_some() {
            println!("  ⚠️  Seed is set: tokens are reproducible");
        }
        println!(
            "  Audit Log: {}",
            if config.audit.enabled {
                config.audit.log_path.display().to_string()
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_invalid_file_returns_config_exit_code() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[application]\nlog_level = \"loud\"\n").unwrap();
        file.flush().unwrap();

        let code = ValidateArgs {}.execute(Some(file.path())).unwrap();
        assert_eq!(code, 2);
    }

    #[test]
    fn test_missing_explicit_file() {
        let code = ValidateArgs {}
            .execute(Some(Path::new("/nonexistent/pseudonymizer.toml")))
            .unwrap();
        assert_eq!(code, 2);
    }
}
