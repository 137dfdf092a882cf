//! Batch exporter - main orchestrator for the export process
//!
//! Processes checkpoints strictly in the order given, one at a time. Every
//! checkpoint ends in exactly one [`CheckpointOutcome`]; only a failure to
//! create the target directory aborts the batch.

use crate::adapters::exporter::ModelExporter;
use crate::config::YoloExportConfig;
use crate::core::export::placement::{is_file, move_artifact};
use crate::core::export::summary::{CheckpointOutcome, ExportSummary};
use crate::core::verification::checksum::checksum_file;
use crate::core::verification::manifest::ArtifactManifest;
use crate::domain::errors::ExportError;
use crate::domain::{CheckpointName, ExportSettings, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Batch exporter
pub struct BatchExporter {
    exporter: Arc<dyn ModelExporter>,
    settings: ExportSettings,
    source_dir: PathBuf,
    dry_run: bool,
    write_manifest: bool,
}

impl BatchExporter {
    /// Create a batch exporter resolving checkpoints in the working directory
    pub fn new(exporter: Arc<dyn ModelExporter>, settings: ExportSettings) -> Self {
        Self {
            exporter,
            settings,
            source_dir: PathBuf::from("."),
            dry_run: false,
            write_manifest: false,
        }
    }

    /// Create a batch exporter from configuration
    pub fn from_config(config: &YoloExportConfig, exporter: Arc<dyn ModelExporter>) -> Self {
        Self::new(exporter, config.export.clone())
            .with_source_dir(config.checkpoints.source_dir.clone())
            .with_dry_run(config.application.dry_run)
            .with_manifest(config.output.write_manifest)
    }

    /// Directory checkpoint names are resolved against
    pub fn with_source_dir(mut self, source_dir: impl Into<PathBuf>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    /// Report what would be exported without running the exporter
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Write `manifest.json` into the target directory after the batch
    pub fn with_manifest(mut self, write_manifest: bool) -> Self {
        self.write_manifest = write_manifest;
        self
    }

    /// Export settings applied to every checkpoint
    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Run the batch
    ///
    /// 1. Creates `target_dir` (and parents)
    /// 2. For each checkpoint, in order:
    ///    - skips it if the file does not exist
    ///    - exports it through the [`ModelExporter`]
    ///    - moves the reported artifact to `<target_dir>/<stem>.<ext>`
    /// 3. Writes the manifest if enabled
    ///
    /// # Errors
    ///
    /// Returns an error only if the target directory cannot be created.
    /// Per-checkpoint failures are recorded in the returned summary.
    pub async fn run_export_batch(
        &self,
        checkpoints: &[CheckpointName],
        target_dir: &Path,
    ) -> Result<ExportSummary> {
        let start_time = Instant::now();

        tokio::fs::create_dir_all(target_dir).await.map_err(|e| {
            ExportError::Io(format!(
                "Failed to create target directory {}: {}",
                target_dir.display(),
                e
            ))
        })?;

        let mut summary = ExportSummary::new(target_dir);
        summary.dry_run = self.dry_run;

        tracing::info!(
            target_dir = %target_dir.display(),
            checkpoints = checkpoints.len(),
            exporter = self.exporter.name(),
            dry_run = self.dry_run,
            "Exporting models"
        );

        for checkpoint in checkpoints {
            let outcome = self.process_checkpoint(checkpoint, target_dir).await;
            summary.record(checkpoint.clone(), outcome);
        }

        if self.write_manifest && !self.dry_run {
            let manifest = ArtifactManifest::from_summary(&summary, &self.settings);
            if let Err(e) = manifest.write(target_dir).await {
                tracing::error!(
                    target_dir = %target_dir.display(),
                    error = %e,
                    "Failed to write artifact manifest"
                );
            }
        }

        summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        Ok(summary)
    }

    /// Process a single checkpoint; never fails
    async fn process_checkpoint(
        &self,
        checkpoint: &CheckpointName,
        target_dir: &Path,
    ) -> CheckpointOutcome {
        tracing::info!(checkpoint = %checkpoint, "Processing checkpoint");

        let checkpoint_path = checkpoint.resolve(&self.source_dir);
        if !is_file(&checkpoint_path).await {
            tracing::info!(
                checkpoint = %checkpoint,
                path = %checkpoint_path.display(),
                "Skipping checkpoint: file not found"
            );
            return CheckpointOutcome::Skipped {
                reason: format!("file not found: {}", checkpoint_path.display()),
            };
        }

        let destination =
            target_dir.join(checkpoint.artifact_file_name(self.settings.format.extension()));

        if self.dry_run {
            tracing::info!(
                checkpoint = %checkpoint,
                destination = %destination.display(),
                "Dry run: would export checkpoint"
            );
            return CheckpointOutcome::Planned { destination };
        }

        match self
            .export_and_place(checkpoint, &checkpoint_path, &destination)
            .await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(
                    checkpoint = %checkpoint,
                    error = %e,
                    "Error exporting checkpoint"
                );
                CheckpointOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }

    async fn export_and_place(
        &self,
        checkpoint: &CheckpointName,
        checkpoint_path: &Path,
        destination: &Path,
    ) -> Result<CheckpointOutcome> {
        let reported = self
            .exporter
            .export(checkpoint_path, &self.settings)
            .await?;

        if !is_file(&reported).await {
            tracing::warn!(
                checkpoint = %checkpoint,
                reported = %reported.display(),
                "Expected exported file but not found"
            );
            return Ok(CheckpointOutcome::MissingOutput { reported });
        }

        move_artifact(&reported, destination).await?;

        let (checksum, size_bytes) = match checksum_file(destination).await {
            Ok((checksum, size)) => (Some(checksum), size),
            Err(e) => {
                tracing::warn!(
                    destination = %destination.display(),
                    error = %e,
                    "Could not checksum exported artifact"
                );
                let size = tokio::fs::metadata(destination)
                    .await
                    .map(|m| m.len())
                    .unwrap_or(0);
                (None, size)
            }
        };

        tracing::info!(
            checkpoint = %checkpoint,
            destination = %destination.display(),
            size_bytes,
            "Successfully exported checkpoint"
        );

        Ok(CheckpointOutcome::Exported {
            destination: destination.to_path_buf(),
            size_bytes,
            checksum,
        })
    }
}
