use std::sync::Arc;

use async_trait::async_trait;

use crate::feedback::{FeedbackId, FeedbackRecord};
use crate::Result;

/// An established, pooled link to the feedback collection.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Inserts a stamped record and returns the identifier the store assigned.
    async fn insert(&self, record: &FeedbackRecord) -> Result<FeedbackId>;
}

/// Opens connections to a feedback store.
#[async_trait]
pub trait StoreConnector: Send + Sync {
    /// Establishes a new store handle for the given connection URI.
    ///
    /// Fails with `SubmissionError::Connection` when the store cannot be reached.
    async fn connect(&self, uri: &str) -> Result<Arc<dyn FeedbackStore>>;
}
