//! Selection import and export.
//!
//! A selection file is a flat JSON array of package names:
//!
//! ```json
//! ["git", "firefox", "vlc"]
//! ```
//!
//! Names are not checked against the catalog here; unknown names are dropped
//! later by the resolver.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{Result, ToolboxError};

/// Write `selection` to `path` as pretty-printed JSON, replacing any existing file.
pub fn export_selection<S: AsRef<str>>(selection: &[S], path: &Path) -> Result<()> {
    let names: Vec<&str> = selection.iter().map(|s| s.as_ref()).collect();
    let mut json = serde_json::to_string_pretty(&names)
        .map_err(|e| ToolboxError::selection_write(path, e.into()))?;
    json.push('\n');

    fs::write(path, json).map_err(|e| ToolboxError::selection_write(path, e))?;

    info!("Exported {} selected package(s) to {:?}", names.len(), path);
    Ok(())
}

/// Read a selection previously written by [`export_selection`] (or by hand).
pub fn import_selection(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| ToolboxError::selection_read(path, e))?;

    let selection: Vec<String> =
        serde_json::from_str(&content).map_err(|e| ToolboxError::selection_parse(path, e))?;

    info!(
        "Imported {} selected package(s) from {:?}",
        selection.len(),
        path
    );
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_then_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");
        let selection = vec!["git", "vlc", "git", "not-in-catalog"];

        export_selection(&selection, &path).unwrap();
        let imported = import_selection(&path).unwrap();

        assert_eq!(imported, selection);
    }

    #[test]
    fn test_export_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");
        export_selection(&["vim", "curl"], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[\n  \"vim\",\n  \"curl\"\n]\n");
    }

    #[test]
    fn test_export_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");
        fs::write(&path, "stale content that is much longer than the new one").unwrap();

        let empty: [&str; 0] = [];
        export_selection(&empty, &path).unwrap();
        assert_eq!(import_selection(&path).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_export_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/selection.json");
        let err = export_selection(&["vim"], &path).unwrap_err();
        assert!(matches!(err, ToolboxError::SelectionWrite { .. }));
    }

    #[test]
    fn test_import_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = import_selection(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ToolboxError::SelectionRead { .. }));
    }

    #[test]
    fn test_import_rejects_non_string_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selection.json");

        for bad in [r#"{"git": true}"#, "[1, 2]", r#"["git", null]"#, "not json"] {
            fs::write(&path, bad).unwrap();
            let err = import_selection(&path).unwrap_err();
            assert!(
                matches!(err, ToolboxError::SelectionParse { .. }),
                "expected parse error for {}",
                bad
            );
        }
    }
}
