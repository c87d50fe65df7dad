use thiserror::Error;

use crate::feedback::ValidationError;

/// Everything that can go wrong between receiving a submission and storing it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Database configuration error")]
    Configuration,
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Persistence failed: {0}")]
    Persistence(String),
}

impl SubmissionError {
    /// Detail about the underlying cause, if the variant carries one.
    pub fn cause(&self) -> Option<&str> {
        match self {
            SubmissionError::Connection(cause) | SubmissionError::Persistence(cause) => {
                Some(cause)
            }
            SubmissionError::Configuration | SubmissionError::Validation(_) => None,
        }
    }
}

/// Result type for submission operations.
pub type Result<T> = std::result::Result<T, SubmissionError>;
