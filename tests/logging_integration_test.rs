//! Integration tests for logging functionality
//!
//! Only one test may install the global subscriber per test binary.

use registry_guard::config::LoggingConfig;
use registry_guard::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "./logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_init_logging_with_file_layer() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "hourly".to_string(),
    };

    assert!(!log_path.exists());

    let guard = init_logging("debug", &config).unwrap();
    tracing::info!(fixed = 1, "integration test event");
    drop(guard);

    assert!(log_path.is_dir());

    // A second global subscriber cannot be installed
    assert!(init_logging("info", &LoggingConfig::default()).is_err());
}
