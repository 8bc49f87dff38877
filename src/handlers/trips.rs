// src/handlers/trips.rs
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::extract::{ApiJson, ApiQuery};
use crate::models::{
    ItineraryRow, ItineraryUpdate, NewItineraryDay, TripDetail, TripInsert, TripRow, TripUpdate, UserQuery,
};
use crate::AppState;

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

/// GET /api/trips?user_id=
async fn list_trips(
    Extension(state): Extension<Arc<AppState>>,
    ApiQuery(query): ApiQuery<UserQuery>,
) -> Result<Json<Vec<TripRow>>, AppError> {
    Ok(Json(state.store.list_trips(query.user_id).await?))
}

/// POST /api/trips
async fn create_trip(
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(trip): ApiJson<TripInsert>,
) -> Result<impl IntoResponse, AppError> {
    require("title", &trip.title)?;
    require("destination", &trip.destination)?;
    require("source", &trip.source)?;

    let row = state.store.create_trip(trip).await?;
    tracing::info!(trip_id = %row.id, user_id = %row.user_id, "trip created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/trips/:trip_id - Trip with its itinerary days
async fn get_trip(
    Path(trip_id): Path<Uuid>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<TripDetail>, AppError> {
    let trip = state.store.get_trip(trip_id).await?;
    let itinerary = state.store.list_itinerary_days(trip_id).await?;
    Ok(Json(TripDetail { trip, itinerary }))
}

/// PATCH /api/trips/:trip_id
async fn update_trip(
    Path(trip_id): Path<Uuid>,
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(update): ApiJson<TripUpdate>,
) -> Result<Json<TripRow>, AppError> {
    Ok(Json(state.store.update_trip(trip_id, update).await?))
}

/// POST /api/trips/:trip_id/itineraries
async fn add_itinerary_day(
    Path(trip_id): Path<Uuid>,
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(day): ApiJson<NewItineraryDay>,
) -> Result<impl IntoResponse, AppError> {
    require("title", &day.title)?;
    let row = state.store.create_itinerary_day(day.for_trip(trip_id)).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PATCH /api/itineraries/:itinerary_id
async fn update_itinerary_day(
    Path(itinerary_id): Path<Uuid>,
    Extension(state): Extension<Arc<AppState>>,
    ApiJson(update): ApiJson<ItineraryUpdate>,
) -> Result<Json<ItineraryRow>, AppError> {
    Ok(Json(state.store.update_itinerary_day(itinerary_id, update).await?))
}

pub fn trip_routes() -> Router {
    Router::new()
        .route("/api/trips", get(list_trips).post(create_trip))
        .route("/api/trips/:trip_id", get(get_trip).patch(update_trip))
        .route("/api/trips/:trip_id/itineraries", post(add_itinerary_day))
        .route("/api/itineraries/:itinerary_id", patch(update_itinerary_day))
}
