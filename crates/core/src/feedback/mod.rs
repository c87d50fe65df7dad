mod error;
mod types;
mod validation;

pub use error::ValidationError;
pub use types::{FeedbackId, FeedbackRecord, FeedbackStatus, FeedbackSubmission};
pub use validation::{validate_submission, REQUIRED_FIELDS, SERVER_OWNED_FIELDS};
