//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Human-readable console output
//! - Configurable log levels (`--log-level`, `RUST_LOG`)
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use yolo_export::logging::init_logging;
//! use yolo_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(checkpoint = "yolo26n-pose.pt", "Processing checkpoint");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
