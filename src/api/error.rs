//! Unified API error handling
//!
//! This module provides a consistent error response format across all API endpoints.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::service::analysis::AnalysisError;
use crate::service::schema::DocumentError;

/// Standard error response format
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Category not configured (404)
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Case file exists but cannot be analyzed (422)
    #[error("Invalid case file: {0}")]
    InvalidCaseFile(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// External service error (502)
    #[error("External service error: {0}")]
    ExternalService(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::CategoryNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidCaseFile(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::CategoryNotFound(_) => "category_not_found",
            ApiError::InvalidCaseFile(_) => "invalid_case_file",
            ApiError::Internal(_) => "internal_error",
            ApiError::ExternalService(_) => "external_service_error",
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        let message = err.to_string();
        match err {
            AnalysisError::UnknownCategory(category) => ApiError::CategoryNotFound(category),
            AnalysisError::NotAnalyzed(category) => {
                ApiError::NotFound(format!("analysis for {category}"))
            }
            AnalysisError::Summary(e) => ApiError::ExternalService(e.to_string()),
            AnalysisError::Document {
                source: DocumentError::Read(io),
                ..
            } if io.kind() == std::io::ErrorKind::NotFound => ApiError::NotFound(message),
            AnalysisError::Document {
                source: DocumentError::InvalidJson(_) | DocumentError::Schema(_),
                ..
            } => ApiError::InvalidCaseFile(message),
            AnalysisError::Document { .. } => ApiError::Internal(message),
        }
    }
}
