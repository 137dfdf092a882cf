//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::YoloExportConfig;
use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use crate::domain::CheckpointName;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "yolo-export.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into YoloExportConfig
/// 4. Applies environment variable overrides (YOLO_EXPORT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, a referenced
/// environment variable is missing, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use yolo_export::config::loader::load_config;
///
/// let config = load_config("yolo-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<YoloExportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: YoloExportConfig = toml::from_str(&contents)
        .map_err(|e| ExportError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        ExportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Resolves the configuration for a run
///
/// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
/// loaded if present in the working directory; otherwise the built-in
/// defaults are used (environment overrides still apply).
pub fn resolve_config(path: Option<&str>) -> Result<YoloExportConfig> {
    if let Some(path) = path {
        return load_config(path);
    }

    if Path::new(DEFAULT_CONFIG_FILE).exists() {
        return load_config(DEFAULT_CONFIG_FILE);
    }

    tracing::debug!(
        file = DEFAULT_CONFIG_FILE,
        "No configuration file found, using built-in defaults"
    );
    let mut config = YoloExportConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate().map_err(|e| {
        ExportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;
    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExportError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        // Comments are copied verbatim
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the YOLO_EXPORT_* prefix
///
/// Environment variables follow the pattern: YOLO_EXPORT_<SECTION>_<KEY>
/// For example: YOLO_EXPORT_OUTPUT_TARGET_DIR, YOLO_EXPORT_EXPORT_OPSET
fn apply_env_overrides(config: &mut YoloExportConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("YOLO_EXPORT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_APPLICATION_DRY_RUN") {
        override_bool("YOLO_EXPORT_APPLICATION_DRY_RUN", &val, &mut config.application.dry_run);
    }

    // Checkpoint overrides
    if let Ok(val) = std::env::var("YOLO_EXPORT_CHECKPOINTS_SOURCE_DIR") {
        config.checkpoints.source_dir = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_CHECKPOINTS_NAMES") {
        config.checkpoints.names = parse_checkpoint_list(&val)?;
    }

    // Export overrides
    if let Ok(val) = std::env::var("YOLO_EXPORT_EXPORT_IMGSZ") {
        override_number("YOLO_EXPORT_EXPORT_IMGSZ", &val, &mut config.export.imgsz);
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_EXPORT_OPSET") {
        override_number("YOLO_EXPORT_EXPORT_OPSET", &val, &mut config.export.opset);
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_EXPORT_HALF") {
        override_bool("YOLO_EXPORT_EXPORT_HALF", &val, &mut config.export.half);
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_EXPORT_SIMPLIFY") {
        override_bool("YOLO_EXPORT_EXPORT_SIMPLIFY", &val, &mut config.export.simplify);
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_EXPORT_DYNAMIC") {
        override_bool("YOLO_EXPORT_EXPORT_DYNAMIC", &val, &mut config.export.dynamic);
    }

    // Exporter overrides
    if let Ok(val) = std::env::var("YOLO_EXPORT_EXPORTER_PROGRAM") {
        config.exporter.program = val;
    }

    // Output overrides
    if let Ok(val) = std::env::var("YOLO_EXPORT_OUTPUT_TARGET_DIR") {
        config.output.target_dir = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_OUTPUT_WRITE_MANIFEST") {
        override_bool(
            "YOLO_EXPORT_OUTPUT_WRITE_MANIFEST",
            &val,
            &mut config.output.write_manifest,
        );
    }

    // Logging overrides
    if let Ok(val) = std::env::var("YOLO_EXPORT_LOGGING_LOCAL_ENABLED") {
        override_bool(
            "YOLO_EXPORT_LOGGING_LOCAL_ENABLED",
            &val,
            &mut config.logging.local_enabled,
        );
    }
    if let Ok(val) = std::env::var("YOLO_EXPORT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

/// Parses a boolean environment value (`true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`)
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Overwrites `target` with a boolean override, keeping the current value
/// and warning when `value` is not a recognised boolean
fn override_bool(var: &str, value: &str, target: &mut bool) {
    match parse_bool(value) {
        Some(parsed) => *target = parsed,
        None => tracing::warn!(
            variable = var,
            value = value,
            current = *target,
            "Ignoring unrecognised boolean override"
        ),
    }
}

fn override_number(var: &str, value: &str, target: &mut u32) {
    match value.trim().parse() {
        Ok(parsed) => *target = parsed,
        Err(e) => tracing::warn!(
            variable = var,
            value = value,
            current = *target,
            error = %e,
            "Ignoring non-numeric override"
        ),
    }
}

/// Parses a comma-separated checkpoint list (`a.pt, b.pt`)
///
/// # Errors
///
/// Returns an error naming the first invalid entry
pub fn parse_checkpoint_list(input: &str) -> Result<Vec<CheckpointName>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            CheckpointName::new(s)
                .map_err(|e| ExportError::Configuration(format!("Invalid checkpoint: {e}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("YOLO_LOADER_TEST_VAR", "models");
        let input = "source_dir = \"${YOLO_LOADER_TEST_VAR}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "source_dir = \"models\"\n");
        std::env::remove_var("YOLO_LOADER_TEST_VAR");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("YOLO_LOADER_MISSING_VAR");
        let input = "program = \"${YOLO_LOADER_MISSING_VAR}\"";
        assert!(substitute_env_vars(input).is_err());
    }

    #[test]
    fn test_substitute_env_vars_ignores_comments() {
        std::env::remove_var("YOLO_LOADER_COMMENTED_VAR");
        let input = "# program = \"${YOLO_LOADER_COMMENTED_VAR}\"";
        assert!(substitute_env_vars(input).is_ok());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("nonexistent-yolo-export.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let toml_content = r#"
[checkpoints]
source_dir = "weights"
names = ["yolo26n-pose.pt", "yolo26n-seg.pt"]

[export]
imgsz = 320

[output]
target_dir = "web/public/models"
write_manifest = true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.checkpoints.source_dir, PathBuf::from("weights"));
        assert_eq!(config.checkpoints.names.len(), 2);
        assert_eq!(config.export.imgsz, 320);
        assert_eq!(config.export.opset, 17);
        assert_eq!(config.output.target_dir, PathBuf::from("web/public/models"));
        assert!(config.output.write_manifest);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[export]\nimgsz = 100\n")
            .unwrap();
        temp_file.flush().unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
    }

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        for value in ["true", "TRUE", "1", "yes", "on", " True "] {
            assert_eq!(parse_bool(value), Some(true), "value: {value}");
        }
        for value in ["false", "0", "no", "Off"] {
            assert_eq!(parse_bool(value), Some(false), "value: {value}");
        }
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_override_bool_keeps_current_value_when_unparsable() {
        let mut dynamic = false;
        override_bool("YOLO_EXPORT_EXPORT_DYNAMIC", "1", &mut dynamic);
        assert!(dynamic);

        let mut half = true;
        override_bool("YOLO_EXPORT_EXPORT_HALF", "enabled", &mut half);
        assert!(half);
    }

    #[test]
    fn test_override_number() {
        let mut opset = 17;
        override_number("YOLO_EXPORT_EXPORT_OPSET", "12", &mut opset);
        assert_eq!(opset, 12);
        override_number("YOLO_EXPORT_EXPORT_OPSET", "twelve", &mut opset);
        assert_eq!(opset, 12);
    }

    #[test]
    fn test_parse_checkpoint_list() {
        let names = parse_checkpoint_list("a.pt, b.pt,,c.pt ").unwrap();
        let names: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["a.pt", "b.pt", "c.pt"]);

        assert!(parse_checkpoint_list("a.pt,dir/b.pt").is_err());
    }
}
