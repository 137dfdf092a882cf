//! Configuration management for yolo-export.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! yolo-export reads an optional `yolo-export.toml` with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `YOLO_EXPORT_<SECTION>_<KEY>` environment overrides
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run switch
//! - [`CheckpointsConfig`] - Source directory and ordered checkpoint list
//! - [`ExportSettings`](crate::domain::ExportSettings) - Format, image size, precision, opset
//! - [`ExporterConfig`] - External exporter program
//! - [`OutputConfig`] - Target directory and manifest switch
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [checkpoints]
//! source_dir = "."
//! names = ["yolo26n-pose.pt", "yolo26n-seg.pt"]
//!
//! [export]
//! imgsz = 640
//! half = true
//! opset = 17
//!
//! [output]
//! target_dir = "${WEB_APP_ROOT}/public/models/yolo26"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use yolo_export::config::resolve_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = resolve_config(None)?;
//! println!("Target: {}", config.output.target_dir.display());
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_checkpoint_list, resolve_config, DEFAULT_CONFIG_FILE};
pub use schema::{
    ApplicationConfig, CheckpointsConfig, ExporterConfig, LoggingConfig, OutputConfig,
    YoloExportConfig, DEFAULT_CHECKPOINTS,
};
