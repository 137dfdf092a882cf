// yolo-export - YOLO checkpoint to ONNX batch exporter
// Copyright (c) 2025 yolo-export Contributors
// Licensed under the MIT License

//! # yolo-export
//!
//! Batch-converts pretrained YOLO pose/segmentation checkpoints to ONNX for
//! WebGPU inference in the browser, then moves the artifacts into a web
//! application's static model directory.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - The batch loop, artifact placement and verification
//! - [`adapters`] - The external model exporter (ultralytics `yolo` CLI)
//! - [`domain`] - Checkpoint names, export settings and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yolo_export::adapters::exporter::create_exporter;
//! use yolo_export::config::resolve_config;
//! use yolo_export::core::export::BatchExporter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = resolve_config(None)?;
//!     let exporter = create_exporter(&config.exporter)?;
//!
//!     let summary = BatchExporter::from_config(&config, exporter)
//!         .run_export_batch(&config.checkpoints.names, &config.output.target_dir)
//!         .await?;
//!
//!     println!("Exported {} models", summary.exported_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`]. Inside a batch, each
//! checkpoint ends in a [`core::export::CheckpointOutcome`] instead of an
//! error, so one broken checkpoint never stops the rest.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
