//! Configuration schema types
//!
//! This module defines the configuration structure for yolo-export.
//! Every section has defaults, so an empty file (or no file at all)
//! reproduces the stock batch: ten YOLO26 pose/segmentation checkpoints
//! exported to `public/models/yolo26`.

use crate::domain::{CheckpointName, ExportSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Checkpoints exported when the configuration does not list any
pub const DEFAULT_CHECKPOINTS: [&str; 10] = [
    "yolo26n-pose.pt",
    "yolo26s-pose.pt",
    "yolo26m-pose.pt",
    "yolo26l-pose.pt",
    "yolo26x-pose.pt",
    "yolo26n-seg.pt",
    "yolo26s-seg.pt",
    "yolo26m-seg.pt",
    "yolo26l-seg.pt",
    "yolo26x-seg.pt",
];

/// Main yolo-export configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YoloExportConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Checkpoints to export
    #[serde(default)]
    pub checkpoints: CheckpointsConfig,

    /// Export settings applied to every checkpoint
    #[serde(default)]
    pub export: ExportSettings,

    /// External exporter program
    #[serde(default)]
    pub exporter: ExporterConfig,

    /// Artifact placement
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl YoloExportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.checkpoints.validate()?;
        self.export.validate()?;
        self.exporter.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (report what would be exported, never run the exporter)
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Checkpoint list configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointsConfig {
    /// Directory the checkpoint names are resolved against
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Checkpoint file names, processed in this order
    #[serde(default = "default_checkpoint_names")]
    pub names: Vec<CheckpointName>,
}

impl Default for CheckpointsConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            names: default_checkpoint_names(),
        }
    }
}

impl CheckpointsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.names.is_empty() {
            return Err("checkpoints.names cannot be empty".to_string());
        }
        if self.source_dir.as_os_str().is_empty() {
            return Err("checkpoints.source_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

/// External exporter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Program invoked as `<program> export model=... key=value...`
    #[serde(default = "default_exporter_program")]
    pub program: String,

    /// Additional `key=value` arguments appended after the export settings
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            program: default_exporter_program(),
            extra_args: Vec::new(),
        }
    }
}

impl ExporterConfig {
    fn validate(&self) -> Result<(), String> {
        if self.program.trim().is_empty() {
            return Err("exporter.program cannot be empty".to_string());
        }
        if let Some(arg) = self.extra_args.iter().find(|a| !a.contains('=')) {
            return Err(format!(
                "exporter.extra_args entries must be key=value, got '{arg}'"
            ));
        }
        Ok(())
    }
}

/// Artifact placement configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the exported artifacts are moved into
    #[serde(default = "default_target_dir")]
    pub target_dir: PathBuf,

    /// Write `manifest.json` with sizes and SHA-256 checksums after the run
    #[serde(default)]
    pub write_manifest: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            target_dir: default_target_dir(),
            write_manifest: false,
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.target_dir.as_os_str().is_empty() {
            return Err("output.target_dir cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err(
                "logging.local_path is required when local logging is enabled".to_string(),
            );
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_checkpoint_names() -> Vec<CheckpointName> {
    DEFAULT_CHECKPOINTS
        .iter()
        .filter_map(|name| CheckpointName::new(*name).ok())
        .collect()
}

fn default_exporter_program() -> String {
    "yolo".to_string()
}

fn default_target_dir() -> PathBuf {
    PathBuf::from("public").join("models").join("yolo26")
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = YoloExportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.checkpoints.names.len(), 10);
        assert_eq!(config.checkpoints.names[0].as_str(), "yolo26n-pose.pt");
        assert_eq!(config.checkpoints.names[9].as_str(), "yolo26x-seg.pt");
        assert_eq!(
            config.output.target_dir,
            PathBuf::from("public/models/yolo26")
        );
        assert_eq!(config.exporter.program, "yolo");
    }

    #[test]
    fn test_empty_toml_matches_defaults() {
        let config: YoloExportConfig = toml::from_str("").unwrap();
        assert_eq!(config.checkpoints.names.len(), DEFAULT_CHECKPOINTS.len());
        assert_eq!(config.export, ExportSettings::default());
        assert!(!config.application.dry_run);
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig::default();
        assert!(config.validate().is_ok());

        config.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_checkpoints_config_validation() {
        let mut config = CheckpointsConfig::default();
        assert!(config.validate().is_ok());

        config.names.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_exporter_config_validation() {
        let mut config = ExporterConfig::default();
        assert!(config.validate().is_ok());

        config.extra_args = vec!["device=cpu".to_string()];
        assert!(config.validate().is_ok());

        config.extra_args = vec!["--verbose".to_string()];
        assert!(config.validate().is_err());

        config.extra_args.clear();
        config.program = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "weekly".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        config.local_enabled = true;
        config.local_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_export_settings_fail_validation() {
        let mut config = YoloExportConfig::default();
        config.export.opset = 3;
        assert!(config.validate().is_err());
    }
}
