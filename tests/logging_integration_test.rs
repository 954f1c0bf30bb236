//! Integration tests for logging functionality
//!
//! A global subscriber can be installed once per process, so this file holds
//! a single initialization test.

use pseudonymizer::config::LoggingConfig;
use pseudonymizer::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_init_logging_creates_log_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    assert!(!log_path.exists());
    let guard = init_logging("debug", &config).expect("Failed to initialize logging");
    assert!(log_path.is_dir());

    tracing::info!(rows = 3, "Logging from integration test");
    drop(guard);

    assert!(init_logging("debug", &LoggingConfig::default()).is_err());
}

#[test]
fn test_invalid_level_rejected_before_install() {
    let err = init_logging("loud", &LoggingConfig::default()).err().unwrap();
    assert!(err.to_string().contains("Invalid log level"));
}
