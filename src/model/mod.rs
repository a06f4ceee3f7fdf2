pub mod analysis;
pub mod case;
pub mod config;

pub use analysis::{AnalysisReport, DecisionBucket, DecisionGroups, Statistics};
pub use case::{CaseField, CaseRecord, KeyFactors, NormalizedKey, normalize_key};
pub use config::{Config, ConfigError, LlmConfig};
