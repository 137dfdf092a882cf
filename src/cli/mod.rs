//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for yolo-export using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// yolo-export - YOLO checkpoint to ONNX batch exporter
#[derive(Parser, Debug)]
#[command(name = "yolo-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to ./yolo-export.toml if present)
    #[arg(short, long, env = "YOLO_EXPORT_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "YOLO_EXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export checkpoints to ONNX and move them into the target directory
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
