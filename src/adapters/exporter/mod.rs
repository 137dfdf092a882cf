//! Model exporter integration
//!
//! - [`traits`] - The [`ModelExporter`] seam used by the batch loop
//! - [`ultralytics`] - Implementation driving the ultralytics `yolo` CLI

pub mod traits;
pub mod ultralytics;

pub use traits::ModelExporter;
pub use ultralytics::UltralyticsCliExporter;

use crate::config::ExporterConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Create the exporter described by the configuration
///
/// # Errors
///
/// Returns an error if the exporter cannot be constructed
pub fn create_exporter(config: &ExporterConfig) -> Result<Arc<dyn ModelExporter>> {
    tracing::debug!(program = %config.program, "Creating ultralytics CLI exporter");
    let exporter = UltralyticsCliExporter::new(config)?;
    Ok(Arc::new(exporter) as Arc<dyn ModelExporter>)
}
