// src/handlers/profiles.rs
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::models::{ProfileInsert, ProfileRow, ProfileUpdate};
use crate::AppState;

/// POST /api/profiles - One profile per user
async fn create_profile(
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(profile): ApiJson<ProfileInsert>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.create_profile(profile).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/profiles/:user_id
async fn get_profile(
    Path(user_id): Path<Uuid>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<ProfileRow>, AppError> {
    Ok(Json(state.store.get_profile(user_id).await?))
}

/// PATCH /api/profiles/:user_id
async fn update_profile(
    Path(user_id): Path<Uuid>,
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(update): ApiJson<ProfileUpdate>,
) -> Result<Json<ProfileRow>, AppError> {
    Ok(Json(state.store.update_profile(user_id, update).await?))
}

pub fn profile_routes() -> Router {
    Router::new()
        .route("/api/profiles", post(create_profile))
        .route("/api/profiles/:user_id", get(get_profile).patch(update_profile))
}
