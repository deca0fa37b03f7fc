use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
};

use scripto_db::models::ProfileRow;
use scripto_types::Profile;
use scripto_types::api::{Claims, UpdateProfileRequest};

use crate::auth::{AppState, with_db};
use crate::content::parse_timestamp;
use crate::error::ApiError;

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Profile>, ApiError> {
    let user_id = claims.sub.to_string();
    let row = with_db(&state, move |db| db.get_profile(&user_id))
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".into()))?;

    Ok(Json(profile(row)?))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> Result<Json<Profile>, ApiError> {
    let Json(req) = payload?;

    let user_id = claims.sub.to_string();
    let row = with_db(&state, move |db| {
        db.update_profile(&user_id, req.full_name.as_deref(), req.avatar_url.as_deref())
    })
    .await?
    .ok_or_else(|| ApiError::NotFound("Profile not found".into()))?;

    Ok(Json(profile(row)?))
}

fn profile(row: ProfileRow) -> anyhow::Result<Profile> {
    Ok(Profile {
        id: row.id.parse()?,
        full_name: row.full_name,
        avatar_url: row.avatar_url,
        updated_at: parse_timestamp(&row.updated_at)?,
    })
}
