//! Export settings applied uniformly to every checkpoint in a batch

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target artifact format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// ONNX interchange format
    #[default]
    Onnx,
}

impl ExportFormat {
    /// Identifier understood by the exporter (`format=<id>`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Onnx => "onnx",
        }
    }

    /// File extension of produced artifacts
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Onnx => "onnx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Export configuration
///
/// Defaults target WebGPU inference in the browser: static 640x640 input,
/// FP16 weights and opset 17, which carries the Resize operator revision
/// the web runtime supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Target format
    #[serde(default)]
    pub format: ExportFormat,

    /// Square input resolution in pixels
    #[serde(default = "default_imgsz")]
    pub imgsz: u32,

    /// Simplify the exported graph
    #[serde(default = "default_true")]
    pub simplify: bool,

    /// Allow dynamic input shapes
    #[serde(default)]
    pub dynamic: bool,

    /// Export FP16 weights
    #[serde(default = "default_true")]
    pub half: bool,

    /// ONNX operator set version
    #[serde(default = "default_opset")]
    pub opset: u32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            imgsz: default_imgsz(),
            simplify: true,
            dynamic: false,
            half: true,
            opset: default_opset(),
        }
    }
}

impl ExportSettings {
    /// Validates the settings
    ///
    /// # Errors
    ///
    /// Returns an error if the image size is not a positive multiple of 32
    /// (max 4096) or the opset is outside 7..=22.
    pub fn validate(&self) -> Result<(), String> {
        if self.imgsz == 0 || self.imgsz % 32 != 0 || self.imgsz > 4096 {
            return Err(format!(
                "export.imgsz must be a positive multiple of 32 up to 4096, got {}",
                self.imgsz
            ));
        }
        if !(7..=22).contains(&self.opset) {
            return Err(format!(
                "export.opset must be between 7 and 22, got {}",
                self.opset
            ));
        }
        Ok(())
    }

    /// Renders the settings as `key=value` arguments for the `yolo` CLI
    pub fn to_cli_args(&self) -> Vec<String> {
        vec![
            format!("format={}", self.format.as_str()),
            format!("imgsz={}", self.imgsz),
            format!("simplify={}", py_bool(self.simplify)),
            format!("dynamic={}", py_bool(self.dynamic)),
            format!("half={}", py_bool(self.half)),
            format!("opset={}", self.opset),
        ]
    }
}

fn py_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn default_imgsz() -> u32 {
    640
}

fn default_opset() -> u32 {
    17
}

fn default_true() -> bool {
    true
}
