//! Artifact manifest written next to the exported models
//!
//! The web app can read `manifest.json` to discover which models are
//! available and to check integrity after download.

use crate::core::export::summary::{CheckpointOutcome, ExportSummary};
use crate::domain::{ExportSettings, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the manifest inside the target directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// One exported artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Artifact file name inside the target directory
    pub file: String,

    /// Checkpoint the artifact was exported from
    pub source_checkpoint: String,

    /// Artifact size in bytes
    pub size_bytes: u64,

    /// Hex SHA-256 of the artifact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

/// Manifest of the artifacts exported in one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactManifest {
    /// When the manifest was generated
    pub generated_at: DateTime<Utc>,

    /// Settings every artifact was exported with
    pub settings: ExportSettings,

    /// Exported artifacts, in processing order
    pub artifacts: Vec<ManifestEntry>,
}

impl ArtifactManifest {
    /// Build a manifest from the exported checkpoints of a summary
    pub fn from_summary(summary: &ExportSummary, settings: &ExportSettings) -> Self {
        let artifacts = summary
            .exported()
            .filter_map(|report| match &report.outcome {
                CheckpointOutcome::Exported {
                    destination,
                    size_bytes,
                    checksum,
                } => Some(ManifestEntry {
                    file: destination
                        .file_name()
                        .map(|f| f.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    source_checkpoint: report.checkpoint.to_string(),
                    size_bytes: *size_bytes,
                    sha256: checksum.clone(),
                }),
                _ => None,
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            settings: settings.clone(),
            artifacts,
        }
    }

    /// Write the manifest into `target_dir`, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub async fn write(&self, target_dir: &Path) -> Result<PathBuf> {
        let path = target_dir.join(MANIFEST_FILE);
        let tmp_path = target_dir.join(format!("{MANIFEST_FILE}.tmp"));

        let json = serde_json::to_vec_pretty(self)?;
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        tracing::info!(
            path = %path.display(),
            artifacts = self.artifacts.len(),
            "Wrote artifact manifest"
        );
        Ok(path)
    }
}
