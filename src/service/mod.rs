pub mod aggregation;
pub mod analysis;
pub mod llm;
pub mod schema;
pub mod summary;

pub use aggregation::{CaseAggregation, aggregate_cases};
pub use analysis::{AnalysisError, AnalysisService};
pub use llm::LlmClient;
pub use summary::{ClaudeSummarizer, NarrativeSummarizer};
