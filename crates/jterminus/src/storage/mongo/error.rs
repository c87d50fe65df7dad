//! MongoDB error mapping.
//!
//! Maps driver errors to `SubmissionError` from `jterminus_core`.

use mongodb::error::{Error, ErrorKind, WriteFailure};

use jterminus_core::SubmissionError;

/// Map an error raised while opening or verifying a connection.
pub fn map_connection_error(err: Error) -> SubmissionError {
    let message = match err.kind.as_ref() {
        ErrorKind::InvalidArgument { message, .. } => {
            format!("invalid connection string: {message}")
        }
        ErrorKind::Authentication { message, .. } => format!("authentication failed: {message}"),
        ErrorKind::ServerSelection { message, .. } => format!("no reachable server: {message}"),
        _ => err.to_string(),
    };

    SubmissionError::Connection(message)
}

/// Map an InsertOne error.
pub fn map_insert_error(err: Error) -> SubmissionError {
    let message = match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => format!(
            "write rejected (code {}): {}",
            write_error.code, write_error.message
        ),
        ErrorKind::Write(WriteFailure::WriteConcernError(concern_error)) => format!(
            "write concern failed (code {}): {}",
            concern_error.code, concern_error.message
        ),
        ErrorKind::ServerSelection { message, .. } => format!("no reachable server: {message}"),
        _ => err.to_string(),
    };

    SubmissionError::Persistence(message)
}
