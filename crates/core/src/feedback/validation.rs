use serde_json::{Map, Value};

use super::error::ValidationError;
use super::types::FeedbackSubmission;

/// Fields every submission must carry as non-blank strings.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "message"];

/// Fields set by the server at write time. Client values are dropped.
pub const SERVER_OWNED_FIELDS: [&str; 2] = ["timestamp", "status"];

/// Validates a parsed request body and splits it into a submission.
///
/// The body must be a JSON object whose `name`, `email` and `message` are
/// strings with at least one non-whitespace character. Values are kept as
/// sent. The email is not checked for format.
pub fn validate_submission(body: Value) -> Result<FeedbackSubmission, ValidationError> {
    let Value::Object(mut fields) = body else {
        return Err(ValidationError::InvalidBody);
    };

    let required = REQUIRED_FIELDS.map(|key| take_required(&mut fields, key));

    let [Some(name), Some(email), Some(message)] = required else {
        return Err(ValidationError::MissingFields);
    };

    for key in SERVER_OWNED_FIELDS {
        fields.remove(key);
    }

    Ok(FeedbackSubmission {
        name,
        email,
        message,
        extra: fields,
    })
}

fn take_required(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}
