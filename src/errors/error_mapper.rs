use explore_core::LoadError;
use std::io::ErrorKind;
use std::path::Path;

/// Map country source loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_file_load_error(error: &LoadError, path: &Path) -> (String, String, String) {
    match error {
        LoadError::Io { source, .. } if source.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The country list could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists, or set EXPLORE_DATA to its location.",
                path.display()
            ),
        ),
        LoadError::Io { source, .. } if source.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        LoadError::Json(err) => (
            "Invalid JSON".to_string(),
            "The country list is not valid JSON.".to_string(),
            err.to_string(),
        ),
        LoadError::NonConforming(errors) => (
            "Unexpected Format".to_string(),
            "The file is not a list of countries.".to_string(),
            errors.join("\n"),
        ),
        other => (
            "Error Loading File".to_string(),
            "Failed to load the country list.".to_string(),
            other.to_string(),
        ),
    }
}
