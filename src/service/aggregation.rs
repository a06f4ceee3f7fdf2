//! Outcome statistics and decision grouping over a case collection

use crate::model::analysis::{DecisionBucket, DecisionGroups, Statistics};
use crate::model::case::CaseRecord;

/// Derived view of one case collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseAggregation {
    pub decision_groups: DecisionGroups,
    pub statistics: Statistics,
}

/// Classify and group every case by its decision text
///
/// Groups are keyed by the full lower-cased decision, so two differently
/// worded grants form two groups. Within a group cases keep input order.
pub fn aggregate_cases(cases: &[CaseRecord]) -> CaseAggregation {
    let mut aggregation = CaseAggregation::default();

    for case in cases {
        let decision = case.final_decision.to_lowercase();
        aggregation
            .statistics
            .record(DecisionBucket::classify(&decision));
        aggregation
            .decision_groups
            .entry(decision)
            .or_default()
            .push(case.key_factors());
    }

    tracing::debug!(
        total_cases = aggregation.statistics.total_cases,
        satisfied = aggregation.statistics.satisfied,
        partially_satisfied = aggregation.statistics.partially_satisfied,
        rejected = aggregation.statistics.rejected,
        groups = aggregation.decision_groups.len(),
        "Aggregated case collection"
    );

    aggregation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::schema::fix_cases;
    use serde_json::json;

    fn case(essence: &str, decision: &str) -> CaseRecord {
        CaseRecord {
            dispute_essence: essence.to_string(),
            final_decision: decision.to_string(),
            ..CaseRecord::default()
        }
    }

    #[test]
    fn test_worked_example() {
        let document = json!([{
            "Суть спора": "A",
            "требования истца": ["X", "Y"],
            "аргументы истца": "B",
            "позиция ответчика": "C",
            "правовая позиция суда": "D",
            "итоговое решение": "Иск удовлетворить"
        }]);
        let cases = fix_cases(&document).unwrap();
        let result = aggregate_cases(&cases);

        assert_eq!(
            result.statistics,
            Statistics {
                total_cases: 1,
                satisfied: 1,
                partially_satisfied: 0,
                rejected: 0,
            }
        );
        let group = &result.decision_groups["иск удовлетворить"];
        assert_eq!(group.len(), 1);
        assert_eq!(group[0].plaintiff_demands, "X; Y");
    }

    #[test]
    fn test_groups_by_verbatim_decision() {
        let cases = vec![
            case("1", "Иск удовлетворить"),
            case("2", "Требования удовлетворить"),
            case("3", "ИСК УДОВЛЕТВОРИТЬ"),
        ];
        let result = aggregate_cases(&cases);

        assert_eq!(result.statistics.satisfied, 3);
        assert_eq!(result.decision_groups.len(), 2);
        let essences: Vec<_> = result.decision_groups["иск удовлетворить"]
            .iter()
            .map(|f| f.dispute_essence.as_str())
            .collect();
        assert_eq!(essences, vec!["1", "3"]);
    }

    #[test]
    fn test_unclassified_counted_in_total_only() {
        let cases = vec![
            case("1", "Удовлетворить частично"),
            case("2", "В иске отказать"),
            case("3", "Производство прекратить"),
            case("4", ""),
        ];
        let result = aggregate_cases(&cases);

        assert_eq!(
            result.statistics,
            Statistics {
                total_cases: 4,
                satisfied: 0,
                partially_satisfied: 1,
                rejected: 1,
            }
        );
        // Unclassified cases are still grouped
        assert!(result.decision_groups.contains_key("производство прекратить"));
        assert!(result.decision_groups.contains_key(""));
    }

    #[test]
    fn test_empty_collection() {
        let result = aggregate_cases(&[]);
        assert_eq!(result, CaseAggregation::default());
    }
}
