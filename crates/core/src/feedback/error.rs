use thiserror::Error;

/// Errors that can occur when validating a feedback submission.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("Invalid request body")]
    InvalidBody,
}
