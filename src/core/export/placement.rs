//! Artifact placement into the target directory

use crate::domain::Result;
use std::path::{Path, PathBuf};

/// Move `source` to `destination`, replacing any existing file
///
/// A plain rename is attempted first. If it fails (for example when the
/// exporter wrote to a different filesystem) the file is copied to
/// `<destination>.tmp`, renamed into place, and the source removed.
///
/// # Errors
///
/// Returns the rename error if the copy fallback fails as well.
pub async fn move_artifact(source: &Path, destination: &Path) -> Result<()> {
    let rename_err = match tokio::fs::rename(source, destination).await {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };

    tracing::debug!(
        source = %source.display(),
        destination = %destination.display(),
        error = %rename_err,
        "Rename failed, falling back to copy"
    );

    // Copy beside the destination first so a partial copy never replaces
    // an existing artifact.
    let staging = staging_path(destination);
    if tokio::fs::copy(source, &staging).await.is_err() {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(rename_err.into());
    }
    if let Err(e) = tokio::fs::rename(&staging, destination).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(e.into());
    }

    if let Err(e) = tokio::fs::remove_file(source).await {
        tracing::warn!(
            source = %source.display(),
            error = %e,
            "Copied artifact but could not remove the original"
        );
    }

    Ok(())
}

/// Temporary sibling of `destination` used while copying
fn staging_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    destination.with_file_name(name)
}

/// Whether `path` points at an existing regular file
pub async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_move_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("a.onnx");
        let destination = temp_dir.path().join("out").join("a.onnx");
        std::fs::create_dir_all(destination.parent().unwrap()).unwrap();
        std::fs::write(&source, b"graph").unwrap();

        move_artifact(&source, &destination).await.unwrap();

        assert!(!source.exists());
        assert_eq!(std::fs::read(&destination).unwrap(), b"graph");
    }

    #[tokio::test]
    async fn test_move_artifact_overwrites_destination() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("new.onnx");
        let destination = temp_dir.path().join("a.onnx");
        std::fs::write(&source, b"new").unwrap();
        std::fs::write(&destination, b"old").unwrap();

        move_artifact(&source, &destination).await.unwrap();

        assert_eq!(std::fs::read(&destination).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_move_artifact_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let result = move_artifact(
            &temp_dir.path().join("missing.onnx"),
            &temp_dir.path().join("a.onnx"),
        )
        .await;
        assert!(result.is_err());
    }

    #[test]
    fn test_staging_path() {
        assert_eq!(
            staging_path(Path::new("public/models/a.onnx")),
            PathBuf::from("public/models/a.onnx.tmp")
        );
    }

    #[tokio::test]
    async fn test_failed_copy_keeps_existing_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source-dir.onnx");
        let destination = temp_dir.path().join("a.onnx");
        // A directory cannot be renamed over a file or copied, so both paths fail
        std::fs::create_dir(&source).unwrap();
        std::fs::write(&destination, b"previous").unwrap();

        assert!(move_artifact(&source, &destination).await.is_err());
        assert_eq!(std::fs::read(&destination).unwrap(), b"previous");
        assert!(!staging_path(&destination).exists());
    }

    #[tokio::test]
    async fn test_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.pt");
        std::fs::write(&file, b"weights").unwrap();

        assert!(is_file(&file).await);
        assert!(!is_file(temp_dir.path()).await);
        assert!(!is_file(&temp_dir.path().join("b.pt")).await);
    }
}
