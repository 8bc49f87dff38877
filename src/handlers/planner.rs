// src/handlers/planner.rs
//! Planning session endpoints: the three-screen flow as a JSON API.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::itinerary::ItineraryView;
use crate::planner::{FormUpdate, Interest, SessionId, SessionSnapshot, TravelStyle};
use crate::services::TripSaveService;
use crate::AppState;

#[derive(Deserialize)]
pub struct InterestRequest {
    pub interest: String,
}

#[derive(Deserialize)]
pub struct StyleRequest {
    pub style: String,
}

#[derive(Deserialize)]
pub struct SaveRequest {
    pub user_id: Uuid,
}

/// POST /api/sessions - Start a new session on the landing screen
async fn create_session(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.planner.create_session().await;
    (StatusCode::CREATED, Json(snapshot))
}

/// GET /api/sessions/:session_id - Current screen and draft
async fn get_session(
    Path(session_id): Path<SessionId>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(state.planner.snapshot(session_id).await?))
}

/// DELETE /api/sessions/:session_id
async fn discard_session(
    Path(session_id): Path<SessionId>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<StatusCode, AppError> {
    state.planner.discard(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/sessions/:session_id/start - Landing → preferences
async fn start_planning(
    Path(session_id): Path<SessionId>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(state.planner.start_planning(session_id).await?))
}

/// PATCH /api/sessions/:session_id/preferences - Edit text fields
async fn update_preferences(
    Path(session_id): Path<SessionId>,
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(update): ApiJson<FormUpdate>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(state.planner.update_preferences(session_id, update).await?))
}

/// POST /api/sessions/:session_id/interests/toggle
async fn toggle_interest(
    Path(session_id): Path<SessionId>,
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(request): ApiJson<InterestRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let interest: Interest = request.interest.parse()?;
    Ok(Json(state.planner.toggle_interest(session_id, interest).await?))
}

/// POST /api/sessions/:session_id/style
async fn select_style(
    Path(session_id): Path<SessionId>,
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(request): ApiJson<StyleRequest>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let style: TravelStyle = request.style.parse()?;
    Ok(Json(state.planner.select_style(session_id, style).await?))
}

/// POST /api/sessions/:session_id/generate - Submit preferences.
/// A failed generation still answers with the session, under 502.
async fn generate(
    Path(session_id): Path<SessionId>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = state.planner.generate(session_id).await?;
    let status = if outcome.notification.is_failure() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome)))
}

/// POST /api/sessions/:session_id/back
async fn back(
    Path(session_id): Path<SessionId>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(state.planner.back(session_id).await?))
}

/// GET /api/sessions/:session_id/itinerary - Display model of the itinerary screen
async fn itinerary(
    Path(session_id): Path<SessionId>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<ItineraryView>, AppError> {
    let trip = state.planner.displayed_trip(session_id).await?;
    Ok(Json(ItineraryView::build(&trip.destination, &trip.days)))
}

/// POST /api/sessions/:session_id/save - Persist the displayed trip
async fn save(
    Path(session_id): Path<SessionId>,
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(request): ApiJson<SaveRequest>,
) -> Result<impl IntoResponse, AppError> {
    let trip = state.planner.displayed_trip(session_id).await?;
    let detail = TripSaveService::save_generated_trip(state.store.as_ref(), &trip, request.user_id).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

pub fn planner_routes() -> Router {
    Router::new()
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:session_id", get(get_session).delete(discard_session))
        .route("/api/sessions/:session_id/start", post(start_planning))
        .route("/api/sessions/:session_id/preferences", patch(update_preferences))
        .route("/api/sessions/:session_id/interests/toggle", post(toggle_interest))
        .route("/api/sessions/:session_id/style", post(select_style))
        .route("/api/sessions/:session_id/generate", post(generate))
        .route("/api/sessions/:session_id/back", post(back))
        .route("/api/sessions/:session_id/itinerary", get(itinerary))
        .route("/api/sessions/:session_id/save", post(save))
}
