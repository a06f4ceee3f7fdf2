//! Narrative analysis of grouped court decisions using an LLM

use async_trait::async_trait;

use crate::model::analysis::{DecisionGroups, Statistics};
use crate::service::llm::LlmClient;
use crate::service::summary::prompts::build_analysis_prompt;

pub mod error;
pub mod prompts;

pub use error::{ANALYSIS_ERROR_MARKER, SummaryError};

/// Produces free-text analysis of a case collection
#[async_trait]
pub trait NarrativeSummarizer: Send + Sync {
    async fn summarize(
        &self,
        groups: &DecisionGroups,
        statistics: &Statistics,
    ) -> Result<String, SummaryError>;
}

/// Summarizer backed by the Anthropic Messages API
pub struct ClaudeSummarizer {
    llm_client: LlmClient,
}

impl ClaudeSummarizer {
    pub fn new(llm_client: LlmClient) -> Self {
        tracing::info!(
            model = %llm_client.model(),
            "Narrative summarizer initialized"
        );

        Self { llm_client }
    }
}

#[async_trait]
impl NarrativeSummarizer for ClaudeSummarizer {
    async fn summarize(
        &self,
        groups: &DecisionGroups,
        statistics: &Statistics,
    ) -> Result<String, SummaryError> {
        let start_time = std::time::Instant::now();
        let prompt = build_analysis_prompt(groups, statistics)?;
        let prompt_length = prompt.len();

        tracing::debug!(
            model = %self.llm_client.model(),
            groups = groups.len(),
            total_cases = statistics.total_cases,
            "Initiating LLM call for court practice analysis"
        );

        match self.llm_client.complete(&prompt).await {
            Ok(analysis) => {
                tracing::info!(
                    model = %self.llm_client.model(),
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt_length,
                    analysis_length = analysis.len(),
                    "LLM call for court practice analysis completed successfully"
                );
                Ok(analysis)
            }
            Err(e) => {
                tracing::error!(
                    model = %self.llm_client.model(),
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "LLM call for court practice analysis failed"
                );
                Err(SummaryError::RemoteCall(e.to_string()))
            }
        }
    }
}
