use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use scripto_types::ValidationError;
use scripto_types::api::ErrorResponse;

use crate::llm::LlmError;

/// Fallback message when the provider gives no usable error text.
pub const GENERIC_GENERATION_ERROR: &str = "Failed to generate content";

/// Every handler error. Rendered as `{ "error": "..." }` with the matching
/// status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Missing or invalid session token")]
    Unauthorized,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Remote(String),
    #[error("Content generation timed out")]
    Timeout,
    #[error("Content generation is not configured")]
    NotConfigured,
    /// The cause is logged, never sent to the caller.
    #[error("Internal server error")]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Remote(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(cause) = &self {
            error!("Internal error: {:#}", cause);
        }
        let body = ErrorResponse { error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Timeout => Self::Timeout,
            LlmError::NotConfigured => Self::NotConfigured,
            LlmError::Status { message: Some(message), .. } if !message.trim().is_empty() => {
                Self::Remote(message)
            }
            LlmError::Status { .. } | LlmError::Transport(_) | LlmError::MalformedResponse(_) => {
                Self::Remote(GENERIC_GENERATION_ERROR.into())
            }
        }
    }
}
