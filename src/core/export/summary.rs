//! Export summary and reporting
//!
//! Each checkpoint yields exactly one [`CheckpointReport`]; the batch never
//! lets a per-checkpoint failure escape as an error.

use crate::domain::CheckpointName;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// Result of processing a single checkpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckpointOutcome {
    /// Artifact exported and moved into the target directory
    Exported {
        /// Final artifact location
        destination: PathBuf,
        /// Artifact size in bytes
        size_bytes: u64,
        /// Hex SHA-256 of the artifact, if it could be computed
        checksum: Option<String>,
    },

    /// Dry run: the checkpoint exists and would be exported here
    Planned {
        /// Where the artifact would be placed
        destination: PathBuf,
    },

    /// Checkpoint file not found; nothing was attempted
    Skipped {
        /// Why the checkpoint was skipped
        reason: String,
    },

    /// The exporter succeeded but its reported output does not exist
    MissingOutput {
        /// Path the exporter reported
        reported: PathBuf,
    },

    /// Load, export or placement failed
    Failed {
        /// Failure detail
        error: String,
    },
}

impl CheckpointOutcome {
    /// Short label used in console output
    pub fn label(&self) -> &'static str {
        match self {
            CheckpointOutcome::Exported { .. } => "exported",
            CheckpointOutcome::Planned { .. } => "planned",
            CheckpointOutcome::Skipped { .. } => "skipped",
            CheckpointOutcome::MissingOutput { .. } => "missing output",
            CheckpointOutcome::Failed { .. } => "failed",
        }
    }
}

/// Outcome for one checkpoint, in processing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckpointReport {
    /// Checkpoint that was processed
    pub checkpoint: CheckpointName,

    /// What happened to it
    pub outcome: CheckpointOutcome,
}

/// Summary of an export batch
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// When the batch started
    pub started_at: DateTime<Utc>,

    /// Directory artifacts were placed in
    pub target_dir: PathBuf,

    /// Per-checkpoint reports, in processing order
    pub reports: Vec<CheckpointReport>,

    /// Duration of the batch
    pub duration: Duration,

    /// Whether this was a dry run
    pub dry_run: bool,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            started_at: Utc::now(),
            target_dir: target_dir.into(),
            reports: Vec::new(),
            duration: Duration::from_secs(0),
            dry_run: false,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record the outcome for a checkpoint
    pub fn record(&mut self, checkpoint: CheckpointName, outcome: CheckpointOutcome) {
        self.reports.push(CheckpointReport {
            checkpoint,
            outcome,
        });
    }

    /// Number of checkpoints processed (including skipped)
    pub fn total(&self) -> usize {
        self.reports.len()
    }

    /// Number of artifacts placed in the target directory
    pub fn exported_count(&self) -> usize {
        self.count(|o| matches!(o, CheckpointOutcome::Exported { .. }))
    }

    /// Number of checkpoints a dry run would export
    pub fn planned_count(&self) -> usize {
        self.count(|o| matches!(o, CheckpointOutcome::Planned { .. }))
    }

    /// Number of checkpoints skipped because the file was missing
    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, CheckpointOutcome::Skipped { .. }))
    }

    /// Number of exports whose reported output was missing
    pub fn missing_output_count(&self) -> usize {
        self.count(|o| matches!(o, CheckpointOutcome::MissingOutput { .. }))
    }

    /// Number of failed checkpoints
    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, CheckpointOutcome::Failed { .. }))
    }

    /// Reports for checkpoints that were exported
    pub fn exported(&self) -> impl Iterator<Item = &CheckpointReport> {
        self.reports
            .iter()
            .filter(|r| matches!(r.outcome, CheckpointOutcome::Exported { .. }))
    }

    /// Check if no checkpoint failed or lost its output
    pub fn is_successful(&self) -> bool {
        self.failed_count() == 0 && self.missing_output_count() == 0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            total = self.total(),
            exported = self.exported_count(),
            planned = self.planned_count(),
            skipped = self.skipped_count(),
            missing_output = self.missing_output_count(),
            failed = self.failed_count(),
            dry_run = self.dry_run,
            duration_secs = self.duration.as_secs_f64(),
            target_dir = %self.target_dir.display(),
            "Export batch completed"
        );
    }

    fn count(&self, predicate: impl Fn(&CheckpointOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| predicate(&r.outcome)).count()
    }
}
