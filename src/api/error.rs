//! Unified API error handling
//!
//! This module provides a consistent error response format across all API
//! endpoints, and maps the service-level taxonomy onto transport status codes
//! so the core transform never touches HTTP concepts.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use uuid::Uuid;

use crate::service::analysis::AnalysisError;

/// Standard error response format
#[derive(Debug, Serialize)]
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
/// All API endpoints should return `Result<T, ApiError>` for consistent
/// error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The upstream model replied, but its text was not parseable (502).
    /// The message carries the raw provider text for diagnosis.
    #[error("{0}")]
    UpstreamMalformed(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UpstreamMalformed(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::UpstreamMalformed(_) => "upstream_malformed_reply",
            ApiError::Internal(_) => "internal_error",
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
        match err {
            // Keep the offending text verbatim so prompt/model drift can be
            // diagnosed from the response body alone.
            AnalysisError::MalformedReply { .. } => ApiError::UpstreamMalformed(err.to_string()),
            AnalysisError::Coercion(_) | AnalysisError::Completion(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}
