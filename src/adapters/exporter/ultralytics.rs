//! Ultralytics command line exporter
//!
//! Drives `yolo export model=<checkpoint> format=onnx ...` as a child
//! process. The `yolo` tool loads the checkpoint and writes the artifact
//! next to it, logging `saved as '<path>'` on success.

use super::traits::ModelExporter;
use crate::config::ExporterConfig;
use crate::domain::errors::{ExportError, ExporterError};
use crate::domain::{ExportSettings, Result};
use async_trait::async_trait;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Lines of exporter output kept in failure details
const DETAIL_TAIL_LINES: usize = 20;

/// Exporter backed by the ultralytics `yolo` CLI
#[derive(Debug, Clone)]
pub struct UltralyticsCliExporter {
    program: String,
    extra_args: Vec<String>,
    saved_as: Regex,
}

impl UltralyticsCliExporter {
    /// Create a new exporter from configuration
    pub fn new(config: &ExporterConfig) -> Result<Self> {
        // Greedy up to the closing quote that ends the line (optionally
        // followed by the size in parentheses) so quotes inside paths survive.
        let saved_as = Regex::new(r"(?m)saved as '(.+)'(?:\s+\([^()]*\))?\s*$")
            .map_err(|e| ExportError::Other(format!("Invalid output pattern: {e}")))?;

        Ok(Self {
            program: config.program.clone(),
            extra_args: config.extra_args.clone(),
            saved_as,
        })
    }

    /// Program invoked for each export
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument list passed to the program
    pub fn build_args(&self, checkpoint: &Path, settings: &ExportSettings) -> Result<Vec<String>> {
        let model = checkpoint.to_str().ok_or_else(|| {
            ExporterError::InvalidCheckpoint(format!(
                "{} is not valid UTF-8",
                checkpoint.display()
            ))
        })?;

        let mut args = vec!["export".to_string(), format!("model={model}")];
        args.extend(settings.to_cli_args());
        args.extend(self.extra_args.iter().cloned());
        Ok(args)
    }

    /// Extract the artifact path reported in the exporter output
    ///
    /// The last `saved as '...'` occurrence wins.
    pub fn parse_reported_path(&self, output: &str) -> Option<PathBuf> {
        self.saved_as
            .captures_iter(output)
            .last()
            .map(|cap| PathBuf::from(&cap[1]))
    }
}

#[async_trait]
impl ModelExporter for UltralyticsCliExporter {
    fn name(&self) -> &str {
        "ultralytics-cli"
    }

    async fn export(&self, checkpoint: &Path, settings: &ExportSettings) -> Result<PathBuf> {
        let args = self.build_args(checkpoint, settings)?;

        tracing::debug!(
            program = %self.program,
            args = ?args,
            "Launching exporter"
        );

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ExporterError::LaunchFailed {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let detail = if stderr.trim().is_empty() {
                tail_lines(&stdout, DETAIL_TAIL_LINES)
            } else {
                tail_lines(&stderr, DETAIL_TAIL_LINES)
            };
            return Err(ExporterError::ExportFailed {
                status: output.status.to_string(),
                detail,
            }
            .into());
        }

        let combined = format!("{stdout}\n{stderr}");
        let beside_checkpoint = checkpoint.with_extension(settings.format.extension());
        let reported = match self.parse_reported_path(&combined) {
            Some(path) if path_exists(&path).await => path,
            Some(path) if path_exists(&beside_checkpoint).await => {
                tracing::debug!(
                    reported = %path.display(),
                    fallback = %beside_checkpoint.display(),
                    "Reported output path does not exist, using the artifact next to the checkpoint"
                );
                beside_checkpoint
            }
            Some(path) => path,
            None => {
                tracing::debug!(
                    checkpoint = %checkpoint.display(),
                    "Exporter did not report an output path, assuming it sits next to the checkpoint"
                );
                beside_checkpoint
            }
        };

        Ok(reported)
    }
}

async fn path_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

fn tail_lines(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}
