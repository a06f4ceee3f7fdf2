//! Application state and service initialization
//!
//! This module centralizes service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use crate::model::{Config, ConfigError, LlmConfig};
use crate::service::{AnalysisService, ClaudeSummarizer, LlmClient, NarrativeSummarizer};

/// Application state containing all services and shared resources
pub struct AppState {
    /// Analysis pipeline service
    pub analysis_service: Arc<AnalysisService>,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// Fails when the language-model credential is missing, so the server
    /// never starts without it.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let llm_config = LlmConfig::from_env()?;
        Self::with_llm_config(config, llm_config)
    }

    /// Build application state from explicit language-model settings
    pub fn with_llm_config(config: Config, llm_config: LlmConfig) -> Result<Self, AppError> {
        let llm_client =
            LlmClient::new(llm_config).map_err(|e| AppError::InvalidConfig(e.to_string()))?;

        let summarizer: Arc<dyn NarrativeSummarizer> = Arc::new(ClaudeSummarizer::new(llm_client));
        Ok(Self::with_summarizer(config, summarizer))
    }

    /// Build application state around any summarizer
    pub fn with_summarizer(config: Config, summarizer: Arc<dyn NarrativeSummarizer>) -> Self {
        let analysis_service = Arc::new(AnalysisService::new(
            config.data_dir,
            config.categories,
            summarizer,
        ));

        Self { analysis_service }
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(#[from] ConfigError),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_explicit_llm_config() {
        let llm_config = LlmConfig {
            api_key: "sk-test".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            model: "claude-test".to_string(),
            max_tokens: 16,
        };
        let state = AppState::with_llm_config(Config::default(), llm_config).unwrap();
        assert_eq!(
            state.analysis_service.categories().len(),
            Config::default().categories.len()
        );
    }

    #[test]
    fn test_missing_config_message() {
        let err = AppError::from(ConfigError::Missing("ANTHROPIC_API_KEY"));
        assert_eq!(
            err.to_string(),
            "Missing required configuration: ANTHROPIC_API_KEY is not set"
        );
    }
}
