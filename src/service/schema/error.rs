//! Error types for case document handling

use thiserror::Error;

/// Structural problem in a case document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("not a list")]
    NotAList,

    #[error("empty")]
    Empty,

    #[error("element not object (index {index})")]
    ElementNotObject { index: usize },
}

/// Failure reading, parsing or writing a case document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    Write(#[source] std::io::Error),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}
