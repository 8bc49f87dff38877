// src/handlers/saved_places.rs
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, patch},
    Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::extract::{ApiJson, ApiQuery};
use crate::models::{SavedPlaceInsert, SavedPlaceRow, SavedPlaceUpdate, UserQuery};
use crate::AppState;

/// GET /api/saved-places?user_id=
async fn list_saved_places(
    Extension(state): Extension<Arc<AppState>>,
    ApiQuery(query): ApiQuery<UserQuery>,
) -> Result<Json<Vec<SavedPlaceRow>>, AppError> {
    Ok(Json(state.store.list_saved_places(query.user_id).await?))
}

/// POST /api/saved-places
async fn create_saved_place(
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(place): ApiJson<SavedPlaceInsert>,
) -> Result<impl IntoResponse, AppError> {
    if place.name.trim().is_empty() || place.location.trim().is_empty() {
        return Err(AppError::Validation("name and location are required".to_string()));
    }
    if let Some(price_level) = place.price_level {
        if !(0..=4).contains(&price_level) {
            return Err(AppError::Validation("price_level must be between 0 and 4".to_string()));
        }
    }
    let row = state.store.create_saved_place(place).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PATCH /api/saved-places/:place_id
async fn update_saved_place(
    Path(place_id): Path<Uuid>,
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(update): ApiJson<SavedPlaceUpdate>,
) -> Result<Json<SavedPlaceRow>, AppError> {
    Ok(Json(state.store.update_saved_place(place_id, update).await?))
}

pub fn saved_place_routes() -> Router {
    Router::new()
        .route("/api/saved-places", get(list_saved_places).post(create_saved_place))
        .route("/api/saved-places/:place_id", patch(update_saved_place))
}
