use crate::error::{LolError, LolResult};
use crate::table::TranslationTable;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Build a translation table from a parsed JSON document
///
/// The document must be a single object mapping English words to their
/// replacements:
/// ```json
/// {
///     "cat": "kitteh",
///     "have": "has",
///     "a": ""
/// }
/// ```
/// Keys are stored as given. Entries whose value is not a string are skipped
/// with a warning.
///
/// # Errors
/// - Root is not an object
/// - No string entries remain
pub fn table_from_value(json: &Value) -> LolResult<TranslationTable> {
    let obj = json.as_object().ok_or_else(|| {
        LolError::InvalidTable("root must be an object of word → replacement".to_string())
    })?;

    let mut table = TranslationTable::new();
    for (key, value) in obj {
        match value.as_str() {
            Some(replacement) => {
                table.insert(key.clone(), replacement.to_string());
            }
            None => warn!("Dictionary entry '{}' is not a string, skipping", key),
        }
    }

    if table.is_empty() {
        return Err(LolError::EmptyTable);
    }

    debug!("Loaded translation table with {} entries", table.len());
    Ok(table)
}

/// Parse a translation table from JSON text.
pub fn parse_table(content: &str) -> LolResult<TranslationTable> {
    let json: Value = serde_json::from_str(content)?;
    table_from_value(&json)
}

/// Load a translation table from a JSON file on disk.
pub fn load_table_from_file(path: &Path) -> LolResult<TranslationTable> {
    let content = fs::read_to_string(path)?;
    parse_table(&content).map_err(|e| match e {
        LolError::InvalidTable(msg) => {
            LolError::InvalidTable(format!("'{}': {}", path.display(), msg))
        }
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_table() {
        let table = parse_table(r#"{"cat": "kitteh", "a": "", "have": "has"}"#).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup("cat"), Some("kitteh"));
        assert_eq!(table.lookup("a"), Some(""));
    }

    #[test]
    fn test_non_string_values_are_skipped() {
        let table = parse_table(r#"{"cat": "kitteh", "n": 3, "list": ["x"], "z": null}"#).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.lookup("n").is_none());
    }

    #[test]
    fn test_root_must_be_object() {
        match parse_table(r#"["cat", "kitteh"]"#) {
            Err(LolError::InvalidTable(msg)) => assert!(msg.contains("object")),
            other => panic!("Expected InvalidTable, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table_is_rejected() {
        assert!(matches!(parse_table("{}"), Err(LolError::EmptyTable)));
        assert!(matches!(
            parse_table(r#"{"n": 1}"#),
            Err(LolError::EmptyTable)
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_table("{\"cat\": "), Err(LolError::Json(_))));
    }

    #[test]
    fn test_load_table_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"cheeseburger": "cheezburger"}}"#).unwrap();

        let table = load_table_from_file(file.path()).unwrap();
        assert_eq!(table.lookup("cheeseburger"), Some("cheezburger"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_table_from_file(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(LolError::Io(_))));
    }

    #[test]
    fn test_invalid_file_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "42").unwrap();

        match load_table_from_file(file.path()) {
            Err(LolError::InvalidTable(msg)) => {
                assert!(msg.contains(&file.path().display().to_string()))
            }
            other => panic!("Expected InvalidTable, got {:?}", other),
        }
    }
}
