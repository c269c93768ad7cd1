use std::path::Path;

/// File name shown in report headers; falls back to the full path when there is no final component.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
