//! Case document schema maintenance: validation and key fixing

pub mod error;
pub mod fixer;
pub mod validation;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

pub use error::{DocumentError, SchemaError};
pub use fixer::{FixReport, fix_cases, fix_file};
pub use validation::{ValidationReport, case_objects, validate_cases, validate_file};

/// File-name suffix of persisted analysis output
pub const ANALYSIS_SUFFIX: &str = "_analysis.json";

/// Read and parse a JSON document
pub fn read_document(path: &Path) -> Result<Value, DocumentError> {
    let contents = fs::read_to_string(path).map_err(DocumentError::Read)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write a value as pretty-printed UTF-8 JSON, keeping non-ASCII text as is
pub fn write_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), DocumentError> {
    let contents = serde_json::to_string_pretty(value)?;
    fs::write(path, contents).map_err(DocumentError::Write)
}

/// List `*.json` files in a directory, sorted by file name
///
/// Analysis output files are skipped unless `include_analysis` is set.
pub fn list_case_files(dir: &Path, include_analysis: bool) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.ends_with(".json") {
            continue;
        }
        if !include_analysis && name.ends_with(ANALYSIS_SUFFIX) {
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_case_files_filters_and_sorts() {
        let dir = tempdir().unwrap();
        for name in ["b.json", "a.json", "a_analysis.json", "notes.txt"] {
            fs::write(dir.path().join(name), "[]").unwrap();
        }
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let names = |files: Vec<PathBuf>| -> Vec<String> {
            files
                .iter()
                .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
                .collect()
        };

        let cases = list_case_files(dir.path(), false).unwrap();
        assert_eq!(names(cases), vec!["a.json", "b.json"]);

        let all = list_case_files(dir.path(), true).unwrap();
        assert_eq!(names(all), vec!["a.json", "a_analysis.json", "b.json"]);
    }

    #[test]
    fn test_write_document_keeps_cyrillic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_document(&path, &serde_json::json!({ "ключ": "значение" })).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"ключ\": \"значение\""));
        assert!(!written.contains("\\u"));
        assert_eq!(read_document(&path).unwrap()["ключ"], "значение");
    }

    #[test]
    fn test_read_document_errors() {
        let dir = tempdir().unwrap();
        let missing = read_document(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(DocumentError::Read(_))));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "[{").unwrap();
        assert!(matches!(
            read_document(&broken),
            Err(DocumentError::InvalidJson(_))
        ));
    }
}
