//! Checkpoint identifier type with validation
//!
//! A checkpoint is referenced by its bare file name (e.g. `yolo26n-pose.pt`)
//! and resolved against the configured source directory at run time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Checkpoint file name newtype wrapper
///
/// # Examples
///
/// ```
/// use yolo_export::domain::CheckpointName;
/// use std::str::FromStr;
///
/// let name = CheckpointName::from_str("yolo26n-pose.pt").unwrap();
/// assert_eq!(name.stem(), "yolo26n-pose");
/// assert_eq!(name.artifact_file_name("onnx"), "yolo26n-pose.onnx");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CheckpointName(String);

impl CheckpointName {
    /// Creates a new CheckpointName from a string
    ///
    /// The name must be non-empty and must not contain path separators or
    /// parent-directory components.
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err("Checkpoint name cannot be empty".to_string());
        }
        if trimmed.contains('/') || trimmed.contains('\\') {
            return Err(format!(
                "Checkpoint name '{trimmed}' must be a bare file name without directories"
            ));
        }
        if trimmed == "." || trimmed == ".." {
            return Err(format!("Checkpoint name '{trimmed}' is not a file name"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the checkpoint name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name without its extension
    pub fn stem(&self) -> &str {
        Path::new(&self.0)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.0)
    }

    /// Artifact file name: the checkpoint's extension replaced by `extension`
    pub fn artifact_file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.stem(), extension)
    }

    /// Location of the checkpoint inside `source_dir`
    pub fn resolve(&self, source_dir: &Path) -> PathBuf {
        source_dir.join(&self.0)
    }
}

impl fmt::Display for CheckpointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CheckpointName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CheckpointName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CheckpointName> for String {
    fn from(name: CheckpointName) -> Self {
        name.0
    }
}

impl AsRef<str> for CheckpointName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
