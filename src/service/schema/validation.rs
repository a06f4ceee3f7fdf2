//! Read-only structural validation of case documents

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::case::{CaseField, NormalizedKey};
use crate::service::schema::error::{DocumentError, SchemaError};
use crate::service::schema::read_document;

/// Result of validating one case document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Every canonical key occurs at least once and nothing else occurs
    pub valid: bool,
    pub case_count: usize,
    /// Occurrences per normalized key across all records
    pub key_counts: BTreeMap<String, usize>,
    /// Canonical keys that never occur, in canonical order
    pub missing_keys: Vec<String>,
    /// Keys outside the canonical six
    pub extra_keys: Vec<String>,
}

/// Check that a document is a non-empty list of objects and return them
pub fn case_objects(document: &Value) -> Result<Vec<&Map<String, Value>>, SchemaError> {
    let items = document.as_array().ok_or(SchemaError::NotAList)?;
    if items.is_empty() {
        return Err(SchemaError::Empty);
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| item.as_object().ok_or(SchemaError::ElementNotObject { index }))
        .collect()
}

/// Validate a parsed case document
pub fn validate_cases(document: &Value) -> Result<ValidationReport, SchemaError> {
    let objects = case_objects(document)?;

    let mut key_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut extra_keys: Vec<String> = Vec::new();

    for object in &objects {
        for key in object.keys() {
            let counted = match CaseField::normalize(key) {
                NormalizedKey::Canonical(field) => field.key().to_string(),
                NormalizedKey::Unrecognized(raw) => {
                    let folded = raw.trim().to_lowercase();
                    if !extra_keys.contains(&folded) {
                        extra_keys.push(folded.clone());
                    }
                    folded
                }
            };
            *key_counts.entry(counted).or_insert(0) += 1;
        }
    }

    let missing_keys: Vec<String> = CaseField::ALL
        .iter()
        .filter(|field| !key_counts.contains_key(field.key()))
        .map(|field| field.key().to_string())
        .collect();

    extra_keys.sort();

    Ok(ValidationReport {
        valid: missing_keys.is_empty() && extra_keys.is_empty(),
        case_count: objects.len(),
        key_counts,
        missing_keys,
        extra_keys,
    })
}

/// Read and validate a case document from disk
pub fn validate_file(path: &Path) -> Result<ValidationReport, DocumentError> {
    let document = read_document(path)?;
    let report = validate_cases(&document)?;

    tracing::debug!(
        path = %path.display(),
        valid = report.valid,
        case_count = report.case_count,
        "Validated case file"
    );

    Ok(report)
}
