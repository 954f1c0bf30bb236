//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` so they do not
//! interfere with each other.

use pseudonymizer::config::{load_config, load_config_or_default, ConfigSource};
use pseudonymizer::domain::PseudonymError;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("PSEUDONYMIZER_APPLICATION_LOG_LEVEL");
    std::env::remove_var("PSEUDONYMIZER_PATHS_DESTINATION_DIR");
    std::env::remove_var("PSEUDONYMIZER_PSEUDONYMIZATION_TOKEN_LENGTH");
    std::env::remove_var("PSEUDONYMIZER_PSEUDONYMIZATION_SEED");
    std::env::remove_var("PSEUDONYMIZER_AUDIT_ENABLED");
    std::env::remove_var("TEST_PSEUDONYMIZER_SOURCE");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[paths]
source_dir = "/data/in"
destination_dir = "/data/out"
file_extension = ".csv"

[pseudonymization]
identifier_label = "PseudoID"
token_length = 12
output_file = "data.csv"
mapping_file = "mapping.csv"
preview_rows = 10
dry_run = true

[audit]
enabled = true
log_path = "/var/log/pseudonymizer/audit.log"
json_format = false

[logging]
local_enabled = true
local_path = "/var/log/pseudonymizer"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.paths.source_dir, PathBuf::from("/data/in"));
    assert_eq!(config.paths.destination_dir, PathBuf::from("/data/out"));
    assert_eq!(config.pseudonymization.identifier_label, "PseudoID");
    assert_eq!(config.pseudonymization.token_length, 12);
    assert_eq!(config.pseudonymization.output_file, "data.csv");
    assert_eq!(config.pseudonymization.preview_rows, 10);
    assert!(config.pseudonymization.dry_run);
    assert!(!config.audit.json_format);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_PSEUDONYMIZER_SOURCE", "/mnt/shared/incoming");

    let temp_file = write_config(
        r#"
[paths]
source_dir = "${TEST_PSEUDONYMIZER_SOURCE}"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.paths.source_dir, PathBuf::from("/mnt/shared/incoming"));

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[paths]
source_dir = "${TEST_PSEUDONYMIZER_SOURCE}"
"#,
    );

    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, PseudonymError::Configuration(_)));
    assert!(err.to_string().contains("TEST_PSEUDONYMIZER_SOURCE"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("PSEUDONYMIZER_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("PSEUDONYMIZER_PATHS_DESTINATION_DIR", "/override/out");
    std::env::set_var("PSEUDONYMIZER_PSEUDONYMIZATION_TOKEN_LENGTH", "16");
    std::env::set_var("PSEUDONYMIZER_AUDIT_ENABLED", "false");

    let temp_file = write_config(
        r#"
[application]
log_level = "info"

[paths]
destination_dir = "/from/file"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();
    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.paths.destination_dir, PathBuf::from("/override/out"));
    assert_eq!(config.pseudonymization.token_length, 16);
    assert!(!config.audit.enabled);

    cleanup_env_vars();
}

#[test]
fn test_invalid_override_is_configuration_error() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("PSEUDONYMIZER_PSEUDONYMIZATION_SEED", "not-a-number");

    let temp_file = write_config("");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(matches!(err, PseudonymError::Configuration(_)));
    assert_eq!(err.exit_code(), 2);

    cleanup_env_vars();
}

#[test]
fn test_malformed_toml() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[paths\nsource_dir = 1");
    let err = load_config(temp_file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse TOML"));
}

#[test]
fn test_explicit_path_reports_source() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[application]\nlog_level = \"error\"\n");
    let (config, source) = load_config_or_default(Some(temp_file.path())).unwrap();
    assert_eq!(config.application.log_level, "error");
    assert_eq!(source, ConfigSource::File(temp_file.path().to_path_buf()));
}
