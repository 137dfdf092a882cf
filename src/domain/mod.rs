//! Domain models and types for yolo-export.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed checkpoint names** ([`CheckpointName`])
//! - **Export settings** ([`ExportSettings`], [`ExportFormat`])
//! - **Error types** ([`ExportError`], [`ExporterError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use yolo_export::domain::{CheckpointName, ExportSettings};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let name = CheckpointName::new("yolo26m-seg.pt")?;
//! let settings = ExportSettings::default();
//!
//! let file_name = name.artifact_file_name(settings.format.extension());
//! assert_eq!(file_name, "yolo26m-seg.onnx");
//! # Ok(())
//! # }
//! ```

pub mod checkpoint;
pub mod errors;
pub mod result;
pub mod settings;

pub use checkpoint::CheckpointName;
pub use errors::{ExportError, ExporterError};
pub use result::Result;
pub use settings::{ExportFormat, ExportSettings};
