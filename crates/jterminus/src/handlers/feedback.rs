//! Feedback submission handler.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

use jterminus_core::feedback::{validate_submission, ValidationError};
use jterminus_core::SubmissionError;

use crate::{handlers::ApiError, state::AppState};

/// Accept a feedback form (POST /api/feedback).
///
/// Validation runs before configuration is checked or the store is touched,
/// so a rejected body never reaches the gateway.
#[axum::debug_handler]
pub async fn submit_feedback(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let fail = |error: SubmissionError| ApiError::new(error, state.verbose_errors());

    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "Unparseable feedback body");
        fail(ValidationError::InvalidBody.into())
    })?;

    let submission = validate_submission(body).map_err(|e| fail(e.into()))?;

    let uri = state.database_uri().map_err(fail)?;
    let store = state.gateway.ensure_connection(uri).await.map_err(fail)?;
    let id = state
        .gateway
        .submit(store.as_ref(), submission)
        .await
        .map_err(fail)?;

    tracing::info!(feedback_id = %id, "Stored feedback");

    Ok(Json(json!({ "success": true, "id": id })))
}
