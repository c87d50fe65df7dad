use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};

use jterminus_core::{submission_error_to_status_code, SubmissionError};

/// Error returned by the feedback endpoint.
///
/// Renders as `{ "error": ... }`, adding `"message"` with the underlying
/// cause only when `verbose` is set.
#[derive(Debug)]
pub struct ApiError {
    error: SubmissionError,
    verbose: bool,
}

impl ApiError {
    pub fn new(error: SubmissionError, verbose: bool) -> Self {
        Self { error, verbose }
    }

    /// Client-facing summary for each error kind.
    fn summary(&self) -> String {
        match &self.error {
            SubmissionError::Configuration => self.error.to_string(),
            SubmissionError::Validation(e) => e.to_string(),
            SubmissionError::Connection(_) | SubmissionError::Persistence(_) => {
                "Failed to submit feedback".to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(submission_error_to_status_code(&self.error))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error = %self.error, "Feedback submission failed");
        } else {
            tracing::warn!(error = %self.error, "Feedback submission rejected");
        }

        let mut body = Map::new();
        body.insert("error".to_string(), Value::String(self.summary()));
        if self.verbose {
            if let Some(cause) = self.error.cause() {
                body.insert("message".to_string(), json!(cause));
            }
        }

        (status, Json(Value::Object(body))).into_response()
    }
}
