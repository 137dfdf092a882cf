//! Domain error types
//!
//! This module defines the error hierarchy for yolo-export.
//! Errors from the external exporter are wrapped so callers never see
//! process or I/O details directly.

use thiserror::Error;

/// Main yolo-export error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Errors raised by the external model exporter
    #[error("Exporter error: {0}")]
    Exporter(#[from] ExporterError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors that occur while driving the external model exporter
#[derive(Debug, Error)]
pub enum ExporterError {
    /// The exporter program could not be started
    #[error("Failed to launch '{program}': {reason}")]
    LaunchFailed { program: String, reason: String },

    /// The exporter ran but reported a failure (load or conversion)
    #[error("Export failed ({status}): {detail}")]
    ExportFailed { status: String, detail: String },

    /// The checkpoint path cannot be handed to the exporter
    #[error("Invalid checkpoint path: {0}")]
    InvalidCheckpoint(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ExportError {
    fn from(err: toml::de::Error) -> Self {
        ExportError::Configuration(format!("TOML parse error: {err}"))
    }
}
