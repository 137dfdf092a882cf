//! Export command implementation
//!
//! This module implements the `export` command, which converts every
//! configured checkpoint to ONNX and moves the artifacts into the web app's
//! model directory.

use crate::adapters::exporter::create_exporter;
use crate::config::{parse_checkpoint_list, resolve_config, YoloExportConfig};
use crate::core::export::{BatchExporter, CheckpointOutcome, ExportSummary};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// Dry run mode - report what would be exported without running the exporter
    #[arg(long)]
    pub dry_run: bool,

    /// Override checkpoint file name(s) to export (comma-separated)
    #[arg(long)]
    pub checkpoint: Option<String>,

    /// Override the directory artifacts are moved into
    #[arg(long)]
    pub target_dir: Option<String>,

    /// Override the directory checkpoints are read from
    #[arg(long)]
    pub source_dir: Option<String>,

    /// Override the export image size
    #[arg(long)]
    pub imgsz: Option<u32>,

    /// Override the ONNX opset version
    #[arg(long)]
    pub opset: Option<u32>,

    /// Write manifest.json with sizes and checksums into the target directory
    #[arg(long)]
    pub manifest: bool,
}

impl ExportArgs {
    /// Execute the export command
    ///
    /// Returns `0` whenever the batch runs to the end, even if individual
    /// checkpoints failed.
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let mut stdout = std::io::stdout();
        self.run(config_path, &mut stdout).await
    }

    /// Run the export, writing progress and the summary to `out`
    ///
    /// Exit codes: `0` batch completed, `2` configuration error, `5` fatal
    /// error (exporter unavailable or target directory not creatable).
    pub async fn run<W: Write + Send>(
        &self,
        config_path: Option<&str>,
        out: &mut W,
    ) -> anyhow::Result<i32> {
        tracing::debug!("Starting export command");

        let mut config = match resolve_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        if let Err(e) = self.apply_overrides(&mut config) {
            tracing::error!(error = %e, "Invalid command line override");
            eprintln!("{e}");
            return Ok(2);
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        if config.application.dry_run {
            writeln!(out, "🔍 DRY RUN MODE - the exporter will not be run")?;
            writeln!(out)?;
        }

        let exporter = match create_exporter(&config.exporter) {
            Ok(exporter) => exporter,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create exporter");
                eprintln!("Failed to initialize exporter: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        let target_dir = config.output.target_dir.clone();
        writeln!(out, "🚀 Exporting models to {}...", target_dir.display())?;
        writeln!(out)?;

        let batch = BatchExporter::from_config(&config, exporter);
        let summary = match batch
            .run_export_batch(&config.checkpoints.names, &target_dir)
            .await
        {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(5);
            }
        };

        write_summary(out, &summary)?;
        writeln!(out, "✅ Export process complete.")?;

        Ok(0)
    }

    /// Apply command line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut YoloExportConfig) -> anyhow::Result<()> {
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        if let Some(checkpoints) = &self.checkpoint {
            let names = parse_checkpoint_list(checkpoints)?;
            tracing::info!(checkpoints = ?names, "Overriding checkpoints from CLI");
            config.checkpoints.names = names;
        }

        if let Some(target_dir) = &self.target_dir {
            tracing::info!(target_dir = %target_dir, "Overriding target directory from CLI");
            config.output.target_dir = PathBuf::from(target_dir);
        }

        if let Some(source_dir) = &self.source_dir {
            tracing::info!(source_dir = %source_dir, "Overriding source directory from CLI");
            config.checkpoints.source_dir = PathBuf::from(source_dir);
        }

        if let Some(imgsz) = self.imgsz {
            config.export.imgsz = imgsz;
        }

        if let Some(opset) = self.opset {
            config.export.opset = opset;
        }

        if self.manifest {
            config.output.write_manifest = true;
        }

        Ok(())
    }
}

fn write_summary<W: Write>(out: &mut W, summary: &ExportSummary) -> std::io::Result<()> {
    writeln!(out)?;
    for report in &summary.reports {
        match &report.outcome {
            CheckpointOutcome::Exported { destination, .. } => {
                writeln!(out, "  ✅ {} -> {}", report.checkpoint, destination.display())?;
            }
            CheckpointOutcome::Planned { destination } => {
                writeln!(
                    out,
                    "  🔍 {} would be exported to {}",
                    report.checkpoint,
                    destination.display()
                )?;
            }
            CheckpointOutcome::Skipped { reason } => {
                writeln!(out, "  ⏭️  Skipping {}: {}", report.checkpoint, reason)?;
            }
            CheckpointOutcome::MissingOutput { reported } => {
                writeln!(
                    out,
                    "  ⚠️  Warning: expected exported file for {} at {} but not found",
                    report.checkpoint,
                    reported.display()
                )?;
            }
            CheckpointOutcome::Failed { error } => {
                writeln!(out, "  ❌ Error exporting {}: {}", report.checkpoint, error)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "📊 Export Summary:")?;
    writeln!(out, "  Checkpoints: {}", summary.total())?;
    if summary.dry_run {
        writeln!(out, "  Planned: {}", summary.planned_count())?;
    } else {
        writeln!(out, "  Exported: {}", summary.exported_count())?;
    }
    writeln!(out, "  Skipped: {}", summary.skipped_count())?;
    writeln!(out, "  Missing output: {}", summary.missing_output_count())?;
    writeln!(out, "  Failed: {}", summary.failed_count())?;
    writeln!(out, "  Duration: {:.2}s", summary.duration.as_secs_f64())?;
    writeln!(out)?;
    Ok(())
}
