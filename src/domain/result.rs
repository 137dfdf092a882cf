//! Result type alias for yolo-export

use super::errors::ExportError;

/// Result type alias for yolo-export operations
///
/// # Examples
///
/// ```
/// use yolo_export::domain::result::Result;
/// use yolo_export::domain::errors::ExportError;
///
/// fn failing_function() -> Result<()> {
///     Err(ExportError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExportError>;
