//! Error types for narrative summarization

use thiserror::Error;

/// Prefix every summarization failure message starts with
pub const ANALYSIS_ERROR_MARKER: &str = "Ошибка при анализе";

/// The narrative summary could not be produced
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Ошибка при анализе: {0}")]
    RemoteCall(String),

    #[error("Ошибка при анализе: failed to build prompt: {0}")]
    Prompt(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_start_with_marker() {
        let remote = SummaryError::RemoteCall("401 Unauthorized".to_string());
        assert!(remote.to_string().starts_with(ANALYSIS_ERROR_MARKER));
        assert!(remote.to_string().ends_with("401 Unauthorized"));

        let prompt: SummaryError = serde_json::from_str::<u32>("x").unwrap_err().into();
        assert!(prompt.to_string().starts_with(ANALYSIS_ERROR_MARKER));
    }
}
