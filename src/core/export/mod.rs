//! Export orchestration
//!
//! This module provides the batch export logic, including:
//! - The sequential checkpoint loop ([`BatchExporter`])
//! - Artifact placement into the target directory
//! - Per-checkpoint outcomes and the batch summary

pub mod coordinator;
pub mod placement;
pub mod summary;

pub use coordinator::BatchExporter;
pub use summary::{CheckpointOutcome, CheckpointReport, ExportSummary};
