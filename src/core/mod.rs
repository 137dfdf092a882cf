//! Core business logic for yolo-export.
//!
//! # Modules
//!
//! - [`export`] - The batch loop, artifact placement and summary
//! - [`verification`] - Artifact checksums and manifest
//!
//! # Export Workflow
//!
//! 1. **Prepare**: Create the target directory
//! 2. **Export**: For each checkpoint present on disk, run the exporter
//! 3. **Place**: Move the artifact to `<target_dir>/<stem>.onnx`
//! 4. **Verify**: Record size and SHA-256, optionally write `manifest.json`
//! 5. **Report**: Log the summary
//!
//! # Example
//!
//! ```rust,no_run
//! use yolo_export::adapters::exporter::create_exporter;
//! use yolo_export::config::resolve_config;
//! use yolo_export::core::export::BatchExporter;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = resolve_config(None)?;
//! let exporter = create_exporter(&config.exporter)?;
//!
//! let batch = BatchExporter::from_config(&config, exporter);
//! let summary = batch
//!     .run_export_batch(&config.checkpoints.names, &config.output.target_dir)
//!     .await?;
//!
//! println!("Exported: {}", summary.exported_count());
//! println!("Failed: {}", summary.failed_count());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod verification;
