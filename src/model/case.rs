//! Case record schema and field-name normalization
//!
//! Source files are produced by hand and by extraction tools, so field names
//! arrive in several spellings ("Суть спора", "суть_спора", "СУТЬ_СПОРА").
//! Everything is folded onto a closed set of six canonical keys here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Separator used when a field value arrives as a list
pub const LIST_SEPARATOR: &str = "; ";

/// One of the six fields every case record carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CaseField {
    DisputeEssence,
    PlaintiffDemands,
    PlaintiffArguments,
    DefendantPosition,
    CourtLegalPosition,
    FinalDecision,
}

/// Lower-cased alias -> canonical field
const ALIASES: &[(&str, CaseField)] = &[
    ("суть_спора", CaseField::DisputeEssence),
    ("суть спора", CaseField::DisputeEssence),
    ("dispute_essence", CaseField::DisputeEssence),
    ("dispute essence", CaseField::DisputeEssence),
    ("требования_истца", CaseField::PlaintiffDemands),
    ("требования истца", CaseField::PlaintiffDemands),
    ("plaintiff_demands", CaseField::PlaintiffDemands),
    ("plaintiff demands", CaseField::PlaintiffDemands),
    ("аргументы_истца", CaseField::PlaintiffArguments),
    ("аргументы истца", CaseField::PlaintiffArguments),
    ("plaintiff_arguments", CaseField::PlaintiffArguments),
    ("plaintiff arguments", CaseField::PlaintiffArguments),
    ("позиция_ответчика", CaseField::DefendantPosition),
    ("позиция ответчика", CaseField::DefendantPosition),
    ("defendant_position", CaseField::DefendantPosition),
    ("defendant position", CaseField::DefendantPosition),
    ("правовая_позиция_суда", CaseField::CourtLegalPosition),
    ("правовая позиция суда", CaseField::CourtLegalPosition),
    ("court_legal_position", CaseField::CourtLegalPosition),
    ("court legal position", CaseField::CourtLegalPosition),
    ("итоговое_решение", CaseField::FinalDecision),
    ("итоговое решение", CaseField::FinalDecision),
    ("final_decision", CaseField::FinalDecision),
    ("final decision", CaseField::FinalDecision),
];

impl CaseField {
    /// All fields in canonical order
    pub const ALL: [CaseField; 6] = [
        CaseField::DisputeEssence,
        CaseField::PlaintiffDemands,
        CaseField::PlaintiffArguments,
        CaseField::DefendantPosition,
        CaseField::CourtLegalPosition,
        CaseField::FinalDecision,
    ];

    /// Canonical key as written to disk
    pub const fn key(self) -> &'static str {
        match self {
            CaseField::DisputeEssence => "суть_спора",
            CaseField::PlaintiffDemands => "требования_истца",
            CaseField::PlaintiffArguments => "аргументы_истца",
            CaseField::DefendantPosition => "позиция_ответчика",
            CaseField::CourtLegalPosition => "правовая_позиция_суда",
            CaseField::FinalDecision => "итоговое_решение",
        }
    }

    /// Look up a field by any known spelling (case-insensitive, trimmed)
    pub fn from_alias(raw: &str) -> Option<Self> {
        let needle = raw.trim().to_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == needle)
            .map(|(_, field)| *field)
    }

    /// Classify a raw key as canonical or unrecognized
    pub fn normalize(raw: &str) -> NormalizedKey<'_> {
        match Self::from_alias(raw) {
            Some(field) => NormalizedKey::Canonical(field),
            None => NormalizedKey::Unrecognized(raw),
        }
    }
}

/// Outcome of key normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizedKey<'a> {
    Canonical(CaseField),
    Unrecognized(&'a str),
}

impl<'a> NormalizedKey<'a> {
    /// Canonical key text, or the raw key unchanged
    pub fn as_str(&self) -> &'a str {
        match *self {
            NormalizedKey::Canonical(field) => field.key(),
            NormalizedKey::Unrecognized(raw) => raw,
        }
    }

    pub fn field(&self) -> Option<CaseField> {
        match *self {
            NormalizedKey::Canonical(field) => Some(field),
            NormalizedKey::Unrecognized(_) => None,
        }
    }
}

/// Map an arbitrary key to its canonical form, returning it unchanged when unknown
pub fn normalize_key(raw: &str) -> String {
    CaseField::normalize(raw).as_str().to_string()
}

/// Flatten a JSON field value into the string stored in a case record
///
/// Lists are joined with [`LIST_SEPARATOR`], `null` becomes an empty string
/// and any other non-string value is kept as its compact JSON text.
pub fn flatten_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
        other => other.to_string(),
    }
}

/// Canonical fields missing from a raw record
pub fn absent_fields(object: &Map<String, Value>) -> Vec<CaseField> {
    CaseField::ALL
        .into_iter()
        .filter(|field| {
            !object
                .keys()
                .any(|key| CaseField::from_alias(key) == Some(*field))
        })
        .collect()
}

/// A single court case reduced to its six textual fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CaseRecord {
    #[serde(rename = "суть_спора")]
    pub dispute_essence: String,
    #[serde(rename = "требования_истца")]
    pub plaintiff_demands: String,
    #[serde(rename = "аргументы_истца")]
    pub plaintiff_arguments: String,
    #[serde(rename = "позиция_ответчика")]
    pub defendant_position: String,
    #[serde(rename = "правовая_позиция_суда")]
    pub court_legal_position: String,
    #[serde(rename = "итоговое_решение")]
    pub final_decision: String,
}

impl CaseRecord {
    pub fn get(&self, field: CaseField) -> &str {
        match field {
            CaseField::DisputeEssence => &self.dispute_essence,
            CaseField::PlaintiffDemands => &self.plaintiff_demands,
            CaseField::PlaintiffArguments => &self.plaintiff_arguments,
            CaseField::DefendantPosition => &self.defendant_position,
            CaseField::CourtLegalPosition => &self.court_legal_position,
            CaseField::FinalDecision => &self.final_decision,
        }
    }

    fn slot(&mut self, field: CaseField) -> &mut String {
        match field {
            CaseField::DisputeEssence => &mut self.dispute_essence,
            CaseField::PlaintiffDemands => &mut self.plaintiff_demands,
            CaseField::PlaintiffArguments => &mut self.plaintiff_arguments,
            CaseField::DefendantPosition => &mut self.defendant_position,
            CaseField::CourtLegalPosition => &mut self.court_legal_position,
            CaseField::FinalDecision => &mut self.final_decision,
        }
    }

    /// Build a record only if all six fields are present
    ///
    /// Unrecognized keys are discarded. When two keys normalize to the same
    /// field, the later one wins.
    pub fn from_object(object: &Map<String, Value>) -> Option<Self> {
        let mut record = CaseRecord::default();
        let mut seen = [false; 6];

        for (key, value) in object {
            if let Some(field) = CaseField::from_alias(key) {
                *record.slot(field) = flatten_value(value);
                seen[field as usize] = true;
            }
        }

        seen.iter().all(|present| *present).then_some(record)
    }

    /// Build a record, treating absent fields as empty strings
    ///
    /// The first key matching a field is used.
    pub fn from_loose(object: &Map<String, Value>) -> Self {
        let mut record = CaseRecord::default();

        for field in CaseField::ALL {
            let value = object
                .iter()
                .find(|(key, _)| CaseField::from_alias(key) == Some(field))
                .map(|(_, value)| flatten_value(value));
            if let Some(value) = value {
                *record.slot(field) = value;
            }
        }

        record
    }

    /// The five fields that describe a case apart from its outcome
    pub fn key_factors(&self) -> KeyFactors {
        KeyFactors {
            dispute_essence: self.dispute_essence.clone(),
            plaintiff_demands: self.plaintiff_demands.clone(),
            plaintiff_arguments: self.plaintiff_arguments.clone(),
            defendant_position: self.defendant_position.clone(),
            court_legal_position: self.court_legal_position.clone(),
        }
    }
}

/// Case detail grouped under a decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KeyFactors {
    #[serde(rename = "суть_спора")]
    pub dispute_essence: String,
    #[serde(rename = "требования_истца")]
    pub plaintiff_demands: String,
    #[serde(rename = "аргументы_истца")]
    pub plaintiff_arguments: String,
    #[serde(rename = "позиция_ответчика")]
    pub defendant_position: String,
    #[serde(rename = "правовая_позиция_суда")]
    pub court_legal_position: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_normalize_space_and_case_variants() {
        assert_eq!(normalize_key("Суть спора"), "суть_спора");
        assert_eq!(normalize_key("  ИТОГОВОЕ РЕШЕНИЕ "), "итоговое_решение");
        assert_eq!(normalize_key("Правовая_Позиция_Суда"), "правовая_позиция_суда");
        assert_eq!(normalize_key("Final Decision"), "итоговое_решение");
    }

    #[test]
    fn test_normalize_unknown_key_unchanged() {
        assert_eq!(normalize_key("Номер дела"), "Номер дела");
        assert_eq!(
            CaseField::normalize("Номер дела"),
            NormalizedKey::Unrecognized("Номер дела")
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "суть_спора",
            "Суть спора",
            "ТРЕБОВАНИЯ ИСТЦА",
            "аргументы_истца",
            "позиция ответчика",
            "court legal position",
            "итоговое решение",
            "номер дела",
            " Дата ",
            "",
        ];
        for sample in samples {
            let once = normalize_key(sample);
            assert_eq!(normalize_key(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_every_field_has_canonical_and_space_alias() {
        for field in CaseField::ALL {
            assert_eq!(CaseField::from_alias(field.key()), Some(field));
            let spaced = field.key().replace('_', " ");
            assert_eq!(CaseField::from_alias(&spaced), Some(field));
        }
    }

    #[test]
    fn test_flatten_value() {
        assert_eq!(flatten_value(&json!("текст")), "текст");
        assert_eq!(flatten_value(&json!(["X", "Y"])), "X; Y");
        assert_eq!(flatten_value(&json!(null)), "");
        assert_eq!(flatten_value(&json!(42)), "42");
        assert_eq!(flatten_value(&json!(["X", 1])), "X; 1");
    }

    #[test]
    fn test_from_object_requires_all_fields() {
        let complete = object(json!({
            "Суть спора": "A",
            "требования истца": ["X", "Y"],
            "аргументы истца": "B",
            "позиция ответчика": "C",
            "правовая позиция суда": "D",
            "итоговое решение": "Иск удовлетворить",
            "лишнее": "ignored"
        }));
        let record = CaseRecord::from_object(&complete).unwrap();
        assert_eq!(record.plaintiff_demands, "X; Y");
        assert_eq!(record.final_decision, "Иск удовлетворить");

        let mut partial = complete.clone();
        partial.remove("позиция ответчика");
        assert!(CaseRecord::from_object(&partial).is_none());
    }

    #[test]
    fn test_from_object_later_duplicate_wins() {
        let obj = object(json!({
            "суть спора": "first",
            "суть_спора": "second",
            "требования истца": "X",
            "аргументы истца": "B",
            "позиция ответчика": "C",
            "правовая позиция суда": "D",
            "итоговое решение": "E"
        }));
        let record = CaseRecord::from_object(&obj).unwrap();
        assert_eq!(record.dispute_essence, "second");
    }

    #[test]
    fn test_from_loose_fills_missing_with_empty() {
        let obj = object(json!({ "Суть спора": "A" }));
        let record = CaseRecord::from_loose(&obj);
        assert_eq!(record.dispute_essence, "A");
        assert_eq!(record.final_decision, "");
        assert_eq!(absent_fields(&obj).len(), 5);
        assert!(absent_fields(&obj).contains(&CaseField::FinalDecision));
    }

    #[test]
    fn test_record_serializes_canonical_keys() {
        let value = serde_json::to_value(CaseRecord::default()).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 6);
        for field in CaseField::ALL {
            assert!(keys.iter().any(|k| k == field.key()));
        }
    }
}
