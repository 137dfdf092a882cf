//! Model exporter abstraction
//!
//! The batch loop only depends on this trait, so the external conversion
//! tool can be swapped (or faked in tests) without touching the loop.

use crate::domain::{ExportSettings, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// External capability that loads a checkpoint and converts it
#[async_trait]
pub trait ModelExporter: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Load `checkpoint` and export it with `settings`
    ///
    /// Returns the path the exporter reports for the produced artifact.
    /// The path is not guaranteed to exist; callers must check.
    ///
    /// # Errors
    ///
    /// Returns an error if the checkpoint cannot be loaded or converted.
    async fn export(&self, checkpoint: &Path, settings: &ExportSettings) -> Result<PathBuf>;
}
