//! Database connectivity check (GET /api/test).

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use jterminus_core::{submission_error_to_status_code, SubmissionError};

use crate::state::AppState;

/// Establish (or reuse) the store connection and report the outcome.
#[axum::debug_handler]
pub async fn check_connection(State(state): State<AppState>) -> Response {
    tracing::debug!(
        connected = state.gateway.is_connected(),
        "Database connection check"
    );

    let result = match state.database_uri() {
        Ok(uri) => state.gateway.ensure_connection(uri).await.map(|_| ()),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": "Database connection successful"
            })),
        )
            .into_response(),
        Err(error) => {
            let status = StatusCode::from_u16(submission_error_to_status_code(&error))
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let message = match &error {
                SubmissionError::Configuration => error.to_string(),
                _ if state.verbose_errors() => error.to_string(),
                _ => "Database connection failed".to_string(),
            };

            tracing::error!(error = %error, "Database connection check failed");

            (
                status,
                Json(json!({ "status": "error", "message": message })),
            )
                .into_response()
        }
    }
}
