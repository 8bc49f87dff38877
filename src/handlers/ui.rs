// src/handlers/ui.rs
//! Server-rendered screens. Each page reads the session and renders whatever screen it is on.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::pages;
use crate::planner::SessionId;
use crate::AppState;

async fn landing() -> Html<String> {
    Html(pages::hero::render(None))
}

async fn plan_page(
    Path(session_id): Path<SessionId>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match state.planner.snapshot(session_id).await {
        Ok(snapshot) => Html(pages::render_session(session_id, &snapshot.state)).into_response(),
        Err(e) => {
            tracing::debug!(session_id = %session_id, error = %e, "plan page for unknown session");
            let body = format!(
                r#"<main class="page"><h1>Session not found</h1><p>{}</p><a class="button" href="/">Start over</a></main>"#,
                pages::escape(&e.to_string())
            );
            (StatusCode::NOT_FOUND, Html(pages::layout("Trip Planner", &body))).into_response()
        }
    }
}

pub fn ui_routes() -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/plan/:session_id", get(plan_page))
}
