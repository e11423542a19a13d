//! Remap mapping file parser.
//!
//! The input file is a flat JSON object mapping Dvorak key codes to Qwerty
//! key codes, e.g. `{"a": "a", "semicolon": "s"}`. Entry order is preserved
//! so the generated rules come out in the same order the mapping was written.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::models::RemapEntry;

/// Reads and parses a remap mapping file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, does not
/// contain a JSON object at the top level, or maps any key to a non-string
/// value.
pub fn parse_remap_file(path: &Path) -> Result<Vec<RemapEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read remap file: {}", path.display()))?;

    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse remap file as JSON: {}", path.display()))?;

    let Value::Object(map) = value else {
        anyhow::bail!(
            "Expected a JSON object of key mappings at the top level of {}",
            path.display()
        );
    };

    let mut entries = Vec::with_capacity(map.len());
    for (from_key, to_value) in map {
        let Value::String(to_key) = to_value else {
            anyhow::bail!(
                "Mapping for '{from_key}' must be a string key code, got: {to_value}"
            );
        };
        entries.push(RemapEntry { from_key, to_key });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_remaps(content: &str) -> (PathBuf, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("remaps.json");
        fs::write(&path, content).unwrap();
        (path, temp_dir)
    }

    #[test]
    fn test_parse_valid_mapping() {
        let (path, _temp) = write_remaps(r#"{"a": "a", "semicolon": "s", "o": "r"}"#);

        let entries = parse_remap_file(&path).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].from_key, "semicolon");
        assert_eq!(entries[1].to_key, "s");
    }

    #[test]
    fn test_parse_preserves_input_order() {
        let (path, _temp) = write_remaps(r#"{"z": "1", "a": "2", "m": "3"}"#);

        let entries = parse_remap_file(&path).unwrap();
        let from_keys: Vec<&str> = entries.iter().map(|e| e.from_key.as_str()).collect();
        assert_eq!(from_keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_parse_empty_object() {
        let (path, _temp) = write_remaps("{}");

        let entries = parse_remap_file(&path).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let err = parse_remap_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read remap file"));
    }

    #[test]
    fn test_parse_invalid_json() {
        let (path, _temp) = write_remaps(r#"{"a": "q""#);

        let err = parse_remap_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse remap file"));
    }

    #[test]
    fn test_parse_rejects_non_object_top_level() {
        let (path, _temp) = write_remaps(r#"["a", "q"]"#);

        let err = parse_remap_file(&path).unwrap_err();
        assert!(err.to_string().contains("Expected a JSON object"));
    }

    #[test]
    fn test_parse_rejects_non_string_values() {
        let (path, _temp) = write_remaps(r#"{"a": 7}"#);

        let err = parse_remap_file(&path).unwrap_err();
        assert!(err.to_string().contains("must be a string key code"));
    }

    #[test]
    fn test_parse_rejects_nested_object_values() {
        let (path, _temp) = write_remaps(r#"{"a": {"key_code": "q"}}"#);

        assert!(parse_remap_file(&path).is_err());
    }
}
