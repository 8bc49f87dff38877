// src/handlers/status.rs
use axum::{extract::Extension, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppState;

/// GET /api/status - Service health and configuration summary
async fn api_status(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    let store_status = match state.store.health_check().await {
        Ok(()) => "healthy",
        Err(e) => {
            tracing::warn!(error = %e, backend = state.store.backend(), "store health check failed");
            "unhealthy"
        }
    };

    Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "store": {
                "backend": state.store.backend(),
                "status": store_status
            },
            "generator": state.planner.generator_name()
        },
        "sessions": {
            "active": state.planner.session_count().await
        }
    }))
}

pub fn status_routes() -> Router {
    Router::new().route("/api/status", get(api_status))
}
