//! Init command implementation
//!
//! Writes a sample `pseudonymizer.toml` with every setting and its default.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output.display(), "Initializing configuration file");

        if self.output.exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output.display());
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(()) => {
                println!("✅ Configuration file created: {}", self.output.display());
                println!();
                println!("Next steps:");
                println!("  1. Set paths.source_dir and paths.destination_dir");
                println!("  2. Validate configuration: pseudonymizer validate-config");
                println!("  3. Inspect a dataset: pseudonymizer columns --file <name>.csv");
                println!(
                    "  4. Run: pseudonymizer pseudonymize --file <name>.csv --drop <cols> --id-column <col>"
                );
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Sample configuration content
    pub fn sample_config() -> &'static str {
        r#"# Pseudonymizer configuration
# Values of the form ${VAR} are read from the environment.
# Any key can also be overridden with PSEUDONYMIZER_<SECTION>_<KEY>.

[application]
log_level = "info"

[paths]
source_dir = "./data"
destination_dir = "./output"   # must exist, it is never created
file_extension = ".csv"

[pseudonymization]
identifier_label = "ID"
token_length = 8               # 1-32 hex characters of a random UUID
output_file = "pseudonymized_data.csv"
mapping_file = "name_mapping.csv"
preview_rows = 4
dry_run = false
# seed = 42                    # reproducible tokens, never for real data

[audit]
enabled = true
log_path = "./audit/pseudonymization.log"
json_format = true

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"       # daily | hourly | never
"#
    }
}
