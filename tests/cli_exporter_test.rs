//! End-to-end tests for the ultralytics CLI exporter
//!
//! A small shell script stands in for the `yolo` program: it writes the
//! artifact next to the checkpoint and prints the `saved as '...'` line the
//! real tool prints.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use yolo_export::adapters::exporter::{create_exporter, ModelExporter};
use yolo_export::cli::commands::export::ExportArgs;
use yolo_export::config::ExporterConfig;
use yolo_export::core::export::{BatchExporter, CheckpointOutcome};
use yolo_export::domain::{CheckpointName, ExportSettings};

const FAKE_YOLO: &str = r#"#!/bin/sh
model=""
for arg in "$@"; do
  case "$arg" in
    model=*) model="${arg#model=}" ;;
  esac
done
case "$model" in
  *broken*)
    echo "RuntimeError: failed to load $model" >&2
    exit 1
    ;;
esac
out="${model%.pt}.onnx"
printf 'onnx' > "$out"
echo "ONNX: export success 0.1s, saved as '$out' (0.0 MB)"
"#;

fn install_fake_yolo(dir: &Path) -> PathBuf {
    let path = dir.join("fake-yolo");
    std::fs::write(&path, FAKE_YOLO).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

#[tokio::test]
async fn test_cli_exporter_success_and_failure() {
    let tools = TempDir::new().unwrap();
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    let program = install_fake_yolo(tools.path());
    std::fs::write(source.path().join("yolo26n-pose.pt"), b"weights").unwrap();
    std::fs::write(source.path().join("broken-seg.pt"), b"weights").unwrap();

    let config = ExporterConfig {
        program: program.to_string_lossy().to_string(),
        extra_args: vec!["device=cpu".to_string()],
    };
    let exporter = create_exporter(&config).unwrap();

    // Direct call reports the artifact written next to the checkpoint
    let reported = exporter
        .export(
            &source.path().join("yolo26n-pose.pt"),
            &ExportSettings::default(),
        )
        .await
        .unwrap();
    assert_eq!(reported, source.path().join("yolo26n-pose.onnx"));
    assert!(reported.is_file());

    let checkpoints = vec![
        CheckpointName::new("yolo26n-pose.pt").unwrap(),
        CheckpointName::new("broken-seg.pt").unwrap(),
        CheckpointName::new("yolo26s-pose.pt").unwrap(),
    ];

    let summary = BatchExporter::new(exporter, ExportSettings::default())
        .with_source_dir(source.path())
        .run_export_batch(&checkpoints, target.path())
        .await
        .unwrap();

    assert!(target.path().join("yolo26n-pose.onnx").is_file());
    assert!(!source.path().join("yolo26n-pose.onnx").exists());

    match &summary.reports[1].outcome {
        CheckpointOutcome::Failed { error } => {
            assert!(error.contains("failed to load"), "unexpected error: {error}");
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(matches!(
        summary.reports[2].outcome,
        CheckpointOutcome::Skipped { .. }
    ));
    assert_eq!(summary.exported_count(), 1);
}

#[tokio::test]
async fn test_cli_exporter_handles_quote_in_source_path() {
    let tools = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    let source_dir = workspace.path().join("o'brien");
    std::fs::create_dir_all(&source_dir).unwrap();
    std::fs::write(source_dir.join("a.pt"), b"weights").unwrap();

    let config = ExporterConfig {
        program: install_fake_yolo(tools.path()).to_string_lossy().to_string(),
        extra_args: Vec::new(),
    };
    let exporter = create_exporter(&config).unwrap();

    let summary = BatchExporter::new(exporter, ExportSettings::default())
        .with_source_dir(&source_dir)
        .run_export_batch(&[CheckpointName::new("a.pt").unwrap()], target.path())
        .await
        .unwrap();

    assert!(
        matches!(
            summary.reports[0].outcome,
            CheckpointOutcome::Exported { .. }
        ),
        "unexpected outcome: {:?}",
        summary.reports[0].outcome
    );
    assert!(target.path().join("a.onnx").is_file());
    assert!(!source_dir.join("a.onnx").exists());
}

fn write_export_config(program: &Path, source: &Path, target: &Path) -> tempfile::NamedTempFile {
    let contents = format!(
        r#"
[checkpoints]
source_dir = "{}"
names = ["a.pt", "broken-b.pt", "c.pt"]

[exporter]
program = "{}"

[output]
target_dir = "{}"
"#,
        source.display(),
        program.display(),
        target.display()
    );
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), contents).unwrap();
    temp_file
}

#[tokio::test]
async fn test_export_command_completes_despite_failures() {
    let tools = TempDir::new().unwrap();
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();

    let program = install_fake_yolo(tools.path());
    std::fs::write(source.path().join("a.pt"), b"weights").unwrap();
    std::fs::write(source.path().join("broken-b.pt"), b"weights").unwrap();

    let target_dir = target.path().join("public/models/yolo26");
    let config_file = write_export_config(&program, source.path(), &target_dir);
    let config_path = config_file.path().to_string_lossy().to_string();

    let mut out = Vec::new();
    let code = ExportArgs::default()
        .run(Some(&config_path), &mut out)
        .await
        .unwrap();
    let printed = String::from_utf8_lossy(&out);

    assert_eq!(code, 0);
    assert!(target_dir.join("a.onnx").is_file());
    assert!(!target_dir.join("broken-b.onnx").exists());
    assert!(!target_dir.join("c.onnx").exists());
    assert!(printed.contains("Error exporting broken-b.pt"));
    assert!(printed.contains("Skipping c.pt"));
    assert!(printed.contains("Exported: 1"));
    assert!(printed.contains("Failed: 1"));
    assert!(printed.trim_end().ends_with("✅ Export process complete."));
}

#[tokio::test]
async fn test_export_command_blocked_target_dir_returns_5() {
    let tools = TempDir::new().unwrap();
    let source = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();

    let program = install_fake_yolo(tools.path());
    std::fs::write(source.path().join("a.pt"), b"weights").unwrap();

    let blocker = workspace.path().join("public");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let target_dir = blocker.join("models");

    let config_file = write_export_config(&program, source.path(), &target_dir);
    let config_path = config_file.path().to_string_lossy().to_string();

    let mut out = Vec::new();
    let code = ExportArgs::default()
        .run(Some(&config_path), &mut out)
        .await
        .unwrap();

    assert_eq!(code, 5);
    assert!(!String::from_utf8_lossy(&out).contains("Export process complete."));
    assert!(source.path().join("a.pt").is_file());
    assert!(!source.path().join("a.onnx").exists());
}
