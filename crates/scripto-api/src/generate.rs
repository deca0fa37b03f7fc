use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{debug, info, warn};

use scripto_types::ValidationError;
use scripto_types::api::{Claims, GenerateContentRequest, GenerateContentResponse};

use crate::auth::AppState;
use crate::error::ApiError;
use crate::llm::LlmError;
use crate::prompts;

/// `POST /generate-content`: one chat-completion call, no retry.
pub async fn generate_content(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<GenerateContentRequest>, JsonRejection>,
) -> Result<Json<GenerateContentResponse>, ApiError> {
    let Json(req) = payload?;

    let prompt = req.prompt.trim();
    if prompt.is_empty() {
        return Err(ValidationError::EmptyTopic.into());
    }

    let llm = state.llm.clone().ok_or(LlmError::NotConfigured)?;

    let system = prompts::system_instruction(
        req.content_type,
        prompt,
        req.platform.as_deref(),
        req.duration.as_deref(),
    );

    info!("Generating {} content for {}", req.content_type, claims.username);
    debug!(prompt, "Generation prompt");

    let generated_content = llm.complete(&system, prompt).await.map_err(|e| {
        warn!("Content generation failed: {}", e);
        ApiError::from(e)
    })?;

    info!("Content generated successfully");
    Ok(Json(GenerateContentResponse { generated_content }))
}

/// Bare `OPTIONS` answer; the CORS layer adds the headers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
