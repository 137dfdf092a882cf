//! Validate config command implementation
//!
//! This module implements the `validate-config` command, which loads the
//! configuration, validates it and reports which checkpoints are present.

use crate::config::{resolve_config, DEFAULT_CONFIG_FILE};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let shown_path = config_path.unwrap_or(DEFAULT_CONFIG_FILE);
        tracing::info!(config_path = %shown_path, "Validating configuration");

        println!("🔍 Validating configuration: {shown_path}");
        println!();

        let config = match resolve_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  Dry Run: {}", config.application.dry_run);
                println!("  Exporter: {}", config.exporter.program);
                println!("  Format: {}", config.export.format);
                println!("  Image Size: {}", config.export.imgsz);
                println!("  Simplify: {}", config.export.simplify);
                println!("  Dynamic Shapes: {}", config.export.dynamic);
                println!("  Half Precision: {}", config.export.half);
                println!("  Opset: {}", config.export.opset);
                println!("  Target Dir: {}", config.output.target_dir.display());
                println!("  Manifest: {}", config.output.write_manifest);
                println!(
                    "  Checkpoints ({} in {}):",
                    config.checkpoints.names.len(),
                    config.checkpoints.source_dir.display()
                );
                for name in &config.checkpoints.names {
                    let present = name.resolve(&config.checkpoints.source_dir).is_file();
                    println!(
                        "    {} {}",
                        if present { "✔" } else { "✘" },
                        name
                    );
                }
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2)
            }
        }
    }
}
