// src/error.rs
//! HTTP-facing error type. Every handler returns `Result<_, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::planner::PlannerError;
use crate::services::save_trip::SaveError;
use crate::store::StoreError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Planner(#[from] PlannerError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Save(#[from] SaveError),

    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Planner(e) => match e {
                PlannerError::SessionNotFound(_) => StatusCode::NOT_FOUND,
                PlannerError::InvalidTransition { .. }
                | PlannerError::SubmissionBlocked(_)
                | PlannerError::GenerationPending => StatusCode::CONFLICT,
                PlannerError::UnknownInterest(_) | PlannerError::UnknownStyle(_) => StatusCode::BAD_REQUEST,
            },
            AppError::Store(e) => store_status(e),
            AppError::Save(SaveError::Store(e)) => store_status(e),
            AppError::Save(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

fn store_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::ForeignKey(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StoreError::Conflict(_) => StatusCode::CONFLICT,
        StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            let error_id = Uuid::new_v4();
            tracing::error!(error_id = %error_id, error = %self, "request failed");
            // Internal details stay out of release responses
            if cfg!(debug_assertions) {
                format!("Internal server error: {} (ID: {})", self, error_id)
            } else {
                format!("Internal server error (ID: {})", error_id)
            }
        } else {
            self.to_string()
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}
