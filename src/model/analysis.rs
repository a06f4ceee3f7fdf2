use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::model::case::KeyFactors;

/// Token marking a granted claim
pub const SATISFY_MARKER: &str = "удовлетворить";
/// Token marking a partial grant
pub const PARTIAL_MARKER: &str = "частично";
/// Token marking a denied claim
pub const DENY_MARKER: &str = "отказать";
/// Phrase marking a claim left without satisfaction
pub const LEFT_UNSATISFIED_MARKER: &str = "оставить без удовлетворения";

/// Coarse classification of a court decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DecisionBucket {
    Satisfied,
    PartiallySatisfied,
    Rejected,
    Unclassified,
}

impl DecisionBucket {
    /// Classify decision text by substring matching on its lower-cased form
    ///
    /// The partial check runs after the plain-satisfied check and the
    /// rejection check only runs when neither matched.
    pub fn classify(decision: &str) -> Self {
        let decision = decision.to_lowercase();
        let satisfy = decision.contains(SATISFY_MARKER);
        let partial = decision.contains(PARTIAL_MARKER);

        if satisfy && !partial {
            DecisionBucket::Satisfied
        } else if partial && satisfy {
            DecisionBucket::PartiallySatisfied
        } else if decision.contains(DENY_MARKER) || decision.contains(LEFT_UNSATISFIED_MARKER) {
            DecisionBucket::Rejected
        } else {
            DecisionBucket::Unclassified
        }
    }
}

/// Outcome counts for one case collection
///
/// Unclassified decisions count toward `total_cases` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Statistics {
    pub total_cases: usize,
    pub satisfied: usize,
    pub partially_satisfied: usize,
    pub rejected: usize,
}

impl Statistics {
    /// Count one case in its bucket
    pub fn record(&mut self, bucket: DecisionBucket) {
        self.total_cases += 1;
        match bucket {
            DecisionBucket::Satisfied => self.satisfied += 1,
            DecisionBucket::PartiallySatisfied => self.partially_satisfied += 1,
            DecisionBucket::Rejected => self.rejected += 1,
            DecisionBucket::Unclassified => {}
        }
    }
}

/// Lower-cased decision text -> key factors of every case with that decision
pub type DecisionGroups = BTreeMap<String, Vec<KeyFactors>>;

/// Persisted result of one analysis run (`{category}_analysis.json`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisReport {
    pub statistics: Statistics,
    pub analysis: String,
}
