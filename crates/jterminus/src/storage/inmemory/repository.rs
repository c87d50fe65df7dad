//! In-memory repository implementation.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use jterminus_core::feedback::{FeedbackId, FeedbackRecord};
use jterminus_core::storage::{FeedbackStore, StoreConnector};
use jterminus_core::{Result, SubmissionError};

/// Records inserts in a `Vec`, with switches to simulate a misbehaving store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<(FeedbackId, FeedbackRecord)>>,
    fail_inserts: AtomicBool,
    stall_inserts: AtomicBool,
}

#[async_trait]
impl FeedbackStore for InMemoryStore {
    async fn insert(&self, record: &FeedbackRecord) -> Result<FeedbackId> {
        if self.stall_inserts.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(SubmissionError::Persistence(
                "document failed validation".to_string(),
            ));
        }

        let id = FeedbackId::new(ObjectId::new().to_hex());
        self.records.write().await.push((id.clone(), record.clone()));
        Ok(id)
    }
}

/// Hands out a shared [`InMemoryStore`] and counts connection attempts.
///
/// Clones share the same store and counters.
#[derive(Debug, Clone, Default)]
pub struct InMemoryConnector {
    store: Arc<InMemoryStore>,
    connect_attempts: Arc<AtomicUsize>,
    fail_connects: Arc<AtomicBool>,
}

impl InMemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `connect` has been called, successful or not.
    pub fn connect_attempts(&self) -> usize {
        self.connect_attempts.load(Ordering::SeqCst)
    }

    /// Snapshot of every stored record with its assigned id.
    pub async fn records(&self) -> Vec<(FeedbackId, FeedbackRecord)> {
        self.store.records.read().await.clone()
    }

    pub fn set_fail_connects(&self, fail: bool) {
        self.fail_connects.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_inserts(&self, fail: bool) {
        self.store.fail_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn set_stall_inserts(&self, stall: bool) {
        self.store.stall_inserts.store(stall, Ordering::SeqCst);
    }
}

#[async_trait]
impl StoreConnector for InMemoryConnector {
    async fn connect(&self, _uri: &str) -> Result<Arc<dyn FeedbackStore>> {
        self.connect_attempts.fetch_add(1, Ordering::SeqCst);

        if self.fail_connects.load(Ordering::SeqCst) {
            return Err(SubmissionError::Connection(
                "server selection timeout".to_string(),
            ));
        }

        Ok(self.store.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jterminus_core::feedback::FeedbackSubmission;

    fn record() -> FeedbackRecord {
        FeedbackRecord::stamp(
            FeedbackSubmission::new("Ada", "ada@example.com", "Hello"),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let connector = InMemoryConnector::new();
        let store = connector.connect("memory://").await.unwrap();

        let first = store.insert(&record()).await.unwrap();
        let second = store.insert(&record()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(first.as_str().len(), 24);
        assert_eq!(connector.records().await.len(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let connector = InMemoryConnector::new();
        let clone = connector.clone();

        clone.connect("memory://").await.unwrap();
        clone.set_fail_inserts(true);

        assert_eq!(connector.connect_attempts(), 1);
        let store = connector.connect("memory://").await.unwrap();
        assert!(store.insert(&record()).await.is_err());
    }
}
