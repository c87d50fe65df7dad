//! Pure functions for mapping submission errors to HTTP status codes.

use crate::SubmissionError;

/// Maps a [`SubmissionError`] to an HTTP status code.
///
/// - `Configuration` -> 500 (Internal Server Error)
/// - `Connection` -> 500 (Internal Server Error)
/// - `Validation` -> 400 (Bad Request)
/// - `Persistence` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use jterminus_core::{submission_error_to_status_code, SubmissionError};
/// use jterminus_core::feedback::ValidationError;
///
/// let error = SubmissionError::Validation(ValidationError::MissingFields);
/// assert_eq!(submission_error_to_status_code(&error), 400);
/// ```
pub fn submission_error_to_status_code(error: &SubmissionError) -> u16 {
    match error {
        SubmissionError::Configuration => 500,
        SubmissionError::Connection(_) => 500,
        SubmissionError::Validation(_) => 400,
        SubmissionError::Persistence(_) => 500,
    }
}
