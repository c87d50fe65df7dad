use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Lifecycle tag stored with every feedback record.
///
/// Records are always written as [`FeedbackStatus::New`]. Other states are
/// set by operators directly in the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackStatus {
    #[default]
    New,
}

impl FeedbackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackStatus::New => "new",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier assigned by the store when a record is inserted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FeedbackId(String);

impl FeedbackId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A submission that passed validation.
///
/// `extra` holds every other field the client sent, minus the
/// server-owned `timestamp` and `status`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub extra: Map<String, Value>,
}

impl FeedbackSubmission {
    /// Creates a submission with no extra fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            extra: Map::new(),
        }
    }
}

/// The document persisted for one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    pub extra: Map<String, Value>,
    pub timestamp: DateTime<Utc>,
    pub status: FeedbackStatus,
}

impl FeedbackRecord {
    /// Stamps a validated submission with the write time and the initial status.
    pub fn stamp(submission: FeedbackSubmission, timestamp: DateTime<Utc>) -> Self {
        let FeedbackSubmission {
            name,
            email,
            message,
            extra,
        } = submission;

        Self {
            name,
            email,
            message,
            extra,
            timestamp,
            status: FeedbackStatus::New,
        }
    }
}
