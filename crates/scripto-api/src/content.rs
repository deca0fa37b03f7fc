use axum::{
    Extension, Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use scripto_db::models::{ContentRow, NewContent};
use scripto_types::api::{Claims, SaveContentRequest};
use scripto_types::{ContentType, SavedContent, ValidationError};

use crate::auth::{AppState, with_db};
use crate::error::ApiError;

pub async fn save_content(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<SaveContentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;

    if req.content.trim().is_empty() {
        return Err(ValidationError::NothingToSave.into());
    }
    let title = req.title.trim().to_string();
    if title.is_empty() {
        return Err(ApiError::Validation("A title is required".into()));
    }
    let content_type: ContentType = req
        .content_type
        .parse()
        .map_err(|e: scripto_types::UnknownContentType| ApiError::Validation(e.to_string()))?;
    let platform = req
        .platform
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());

    let id = Uuid::new_v4().to_string();
    let user_id = claims.sub.to_string();
    let content = req.content;
    let row = with_db(&state, move |db| {
        db.insert_content(&NewContent {
            id: &id,
            user_id: &user_id,
            title: &title,
            content: &content,
            content_type: content_type.as_str(),
            platform: platform.as_deref(),
        })
    })
    .await?;

    info!("{} saved {} content {}", claims.username, content_type, row.id);
    Ok((StatusCode::CREATED, Json(saved_content(row)?)))
}

pub async fn list_content(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<SavedContent>>, ApiError> {
    let user_id = claims.sub.to_string();
    let rows = with_db(&state, move |db| db.list_content(&user_id)).await?;

    let items = rows
        .into_iter()
        .map(saved_content)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Json(items))
}

pub async fn delete_content(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::Validation(e.body_text()))?;

    let user_id = claims.sub.to_string();
    let deleted = with_db(&state, move |db| db.delete_content(&user_id, &id.to_string())).await?;
    if !deleted {
        return Err(ApiError::NotFound("Content not found".into()));
    }

    info!("{} deleted content {}", claims.username, id);
    Ok(StatusCode::NO_CONTENT)
}

fn saved_content(row: ContentRow) -> anyhow::Result<SavedContent> {
    Ok(SavedContent {
        id: row.id.parse()?,
        user_id: row.user_id.parse()?,
        title: row.title,
        content: row.content,
        content_type: row.content_type,
        platform: row.platform,
        created_at: parse_timestamp(&row.created_at)?,
    })
}

pub(crate) fn parse_timestamp(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}
