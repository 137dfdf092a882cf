//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::config::DEFAULT_CONFIG_FILE;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing yolo-export configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Install the exporter: pip install ultralytics");
                println!("  3. Validate configuration: yolo-export validate-config");
                println!("  4. Run export: yolo-export export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the sample configuration
    pub fn generate_config() -> String {
        r#"# yolo-export configuration
# Converts YOLO checkpoints to ONNX for WebGPU inference in the browser.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (report what would be exported, never run the exporter)
dry_run = false

[checkpoints]
# Directory the checkpoint names are resolved against
source_dir = "."

# Checkpoints to export, in order. Missing files are skipped.
names = [
    "yolo26n-pose.pt",
    "yolo26s-pose.pt",
    "yolo26m-pose.pt",
    "yolo26l-pose.pt",
    "yolo26x-pose.pt",
    "yolo26n-seg.pt",
    "yolo26s-seg.pt",
    "yolo26m-seg.pt",
    "yolo26l-seg.pt",
    "yolo26x-seg.pt",
]

[export]
format = "onnx"

# Input resolution (multiple of 32)
imgsz = 640

# Remove redundant nodes from the graph
simplify = true

# Keep false: WebGPU handles dynamic shapes poorly
dynamic = false

# FP16 weights
half = true

# Opset 17 carries the Resize revision supported by the web runtime
opset = 17

[exporter]
# Ultralytics CLI
program = "yolo"

# Extra key=value arguments, e.g. ["device=cpu"]
extra_args = []

[output]
# Web app static model directory, relative to the directory yolo-export
# runs from (run it from the web app root, or use an absolute path)
target_dir = "public/models/yolo26"

# Write manifest.json with sizes and SHA-256 checksums
write_manifest = false

[logging]
# JSON file logging
local_enabled = false
local_path = "logs"

# Rotation: daily or hourly
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::YoloExportConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_parses_and_validates() {
        let config: YoloExportConfig = toml::from_str(&InitArgs::generate_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.checkpoints.names.len(), 10);
        assert_eq!(config.export.opset, 17);
    }

    #[tokio::test]
    async fn test_init_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("yolo-export.toml");
        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(output.exists());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("yolo-export.toml");
        std::fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "existing");

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: true,
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert_ne!(std::fs::read_to_string(&output).unwrap(), "existing");
    }
}
