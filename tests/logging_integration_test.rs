//! Integration tests for logging functionality

use tempfile::TempDir;
use yolo_export::config::LoggingConfig;
use yolo_export::logging::init_logging;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_init_logging_creates_log_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "hourly".to_string(),
    };

    // The global subscriber can only be installed once per process; this is
    // the only test in this binary that installs it.
    let guard = init_logging("debug", &config).expect("logging should initialize");
    assert!(log_path.is_dir());

    tracing::info!(checkpoint = "yolo26n-pose.pt", "Processing checkpoint");
    drop(guard);
}

#[test]
fn test_init_logging_invalid_level() {
    let result = init_logging("chatty", &LoggingConfig::default());
    assert!(result.is_err());
}
