//! Rewrites loosely-keyed case documents into the canonical six-key schema

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::model::case::CaseRecord;
use crate::service::schema::error::{DocumentError, SchemaError};
use crate::service::schema::{read_document, write_document};

/// Outcome of fixing one case document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixReport {
    /// Elements in the source document
    pub total_records: usize,
    /// Records written back
    pub kept_records: usize,
}

impl FixReport {
    pub fn dropped_records(&self) -> usize {
        self.total_records - self.kept_records
    }
}

/// Normalize every record of a document, dropping incomplete ones
///
/// Input order is preserved. Elements that are not objects are dropped along
/// with records that lack one of the six fields.
pub fn fix_cases(document: &Value) -> Result<Vec<CaseRecord>, SchemaError> {
    let items = document.as_array().ok_or(SchemaError::NotAList)?;

    Ok(items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(CaseRecord::from_object)
        .collect())
}

/// Fix a case file in place
///
/// With `dry_run` the report is computed but nothing is written.
pub fn fix_file(path: &Path, dry_run: bool) -> Result<FixReport, DocumentError> {
    let document = read_document(path)?;
    let fixed = fix_cases(&document)?;

    let report = FixReport {
        total_records: document.as_array().map_or(0, Vec::len),
        kept_records: fixed.len(),
    };

    if report.dropped_records() > 0 {
        tracing::warn!(
            path = %path.display(),
            dropped = report.dropped_records(),
            "Dropped incomplete case records"
        );
    }

    if !dry_run {
        write_document(path, &fixed)?;
        tracing::info!(
            path = %path.display(),
            kept = report.kept_records,
            "Case file rewritten"
        );
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::case::CaseField;
    use crate::service::schema::validate_file;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn sample_document() -> Value {
        json!([
            {
                "Суть спора": "A",
                "требования истца": ["X", "Y"],
                "аргументы истца": "B",
                "позиция ответчика": "C",
                "правовая позиция суда": "D",
                "итоговое решение": "Иск удовлетворить"
            },
            {
                "суть_спора": "неполная запись",
                "итоговое_решение": "Отказать"
            },
            42,
            {
                "СУТЬ_СПОРА": "E",
                "ТРЕБОВАНИЯ_ИСТЦА": "F",
                "АРГУМЕНТЫ_ИСТЦА": "G",
                "ПОЗИЦИЯ_ОТВЕТЧИКА": "H",
                "ПРАВОВАЯ_ПОЗИЦИЯ_СУДА": "I",
                "ИТОГОВОЕ_РЕШЕНИЕ": "Отказать",
                "дата": "2023-01-01"
            }
        ])
    }

    #[test]
    fn test_fix_joins_lists_and_normalizes_keys() {
        let fixed = fix_cases(&sample_document()).unwrap();
        assert_eq!(fixed.len(), 2);
        assert_eq!(fixed[0].dispute_essence, "A");
        assert_eq!(fixed[0].plaintiff_demands, "X; Y");
        assert_eq!(fixed[0].final_decision, "Иск удовлетворить");
        // Order preserved, extra key dropped
        assert_eq!(fixed[1].dispute_essence, "E");

        let value = serde_json::to_value(&fixed[1]).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        for field in CaseField::ALL {
            assert!(object.contains_key(field.key()));
        }
    }

    #[test]
    fn test_fix_never_grows_collection() {
        let document = sample_document();
        let fixed = fix_cases(&document).unwrap();
        assert!(fixed.len() <= document.as_array().unwrap().len());
    }

    #[test]
    fn test_fix_rejects_non_list() {
        assert_eq!(fix_cases(&json!({})), Err(SchemaError::NotAList));
        assert!(fix_cases(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_fix_file_round_trip_validates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cases.json");
        fs::write(&path, serde_json::to_string(&sample_document()).unwrap()).unwrap();

        let report = fix_file(&path, false).unwrap();
        assert_eq!(report.total_records, 4);
        assert_eq!(report.kept_records, 2);
        assert_eq!(report.dropped_records(), 2);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"требования_истца\": \"X; Y\""));

        let validation = validate_file(&path).unwrap();
        assert!(validation.valid);
        assert_eq!(validation.case_count, 2);
    }

    #[test]
    fn test_fix_file_dry_run_leaves_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cases.json");
        let original = serde_json::to_string(&sample_document()).unwrap();
        fs::write(&path, &original).unwrap();

        let report = fix_file(&path, true).unwrap();
        assert_eq!(report.kept_records, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
    }
}
