// lib.rs - Trip planner service: planning sessions, itinerary display and trip storage
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod generation;
pub mod handlers;
pub mod itinerary;
pub mod middleware;
pub mod models;
pub mod pages;
pub mod planner;
pub mod services;
pub mod store;

use axum::{Extension, Router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::planner::Planner;
use crate::store::TripStore;

/// Shared state handed to every handler through an `Extension`
pub struct AppState {
    pub planner: Planner,
    pub store: Arc<dyn TripStore>,
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(planner: Planner, store: Arc<dyn TripStore>) -> Self {
        Self {
            planner,
            store,
            assets_dir: PathBuf::from(config::DEFAULT_ASSETS_DIR),
        }
    }

    pub fn with_assets_dir(mut self, assets_dir: PathBuf) -> Self {
        self.assets_dir = assets_dir;
        self
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(handlers::ui::ui_routes())
        .merge(handlers::planner::planner_routes())
        .merge(handlers::trips::trip_routes())
        .merge(handlers::profiles::profile_routes())
        .merge(handlers::saved_places::saved_place_routes())
        .merge(handlers::status::status_routes())
        .nest_service("/assets", ServeDir::new(&state.assets_dir))
        .layer(axum::middleware::from_fn(middleware::logging::request_logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}
