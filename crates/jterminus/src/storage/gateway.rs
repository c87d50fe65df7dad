//! Persistence gateway.
//!
//! Owns the single cached store handle and the one write operation. The handle
//! is created on first use and kept for the lifetime of the process; it is
//! never health-checked or replaced. First establishment is single-flight:
//! concurrent callers wait on the same attempt, and a failed attempt leaves
//! the slot empty so the next request starts over.

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use tokio::sync::OnceCell;

use jterminus_core::feedback::{FeedbackId, FeedbackRecord, FeedbackSubmission};
use jterminus_core::storage::{FeedbackStore, StoreConnector};
use jterminus_core::{Result, SubmissionError};

pub struct PersistenceGateway {
    connector: Arc<dyn StoreConnector>,
    handle: OnceCell<Arc<dyn FeedbackStore>>,
    operation_timeout: Duration,
}

impl PersistenceGateway {
    /// Creates a gateway with no established connection.
    pub fn new(connector: Arc<dyn StoreConnector>, operation_timeout: Duration) -> Self {
        Self {
            connector,
            handle: OnceCell::new(),
            operation_timeout,
        }
    }

    /// Returns the cached store handle, establishing it on first use.
    ///
    /// `uri` must be non-empty; callers check configuration first.
    pub async fn ensure_connection(&self, uri: &str) -> Result<Arc<dyn FeedbackStore>> {
        let store = self
            .handle
            .get_or_try_init(|| async {
                tracing::info!("Connecting to feedback store");

                let store = self.connector.connect(uri).await.inspect_err(|e| {
                    tracing::error!(error = %e, "Feedback store connection failed");
                })?;

                tracing::info!("Connected to feedback store");
                Ok::<_, SubmissionError>(store)
            })
            .await?;

        Ok(Arc::clone(store))
    }

    /// Stamps the submission and inserts it as a single record.
    ///
    /// Any failure, including the insert outliving the operation timeout,
    /// surfaces as `SubmissionError::Persistence`. Nothing is retried.
    pub async fn submit(
        &self,
        store: &dyn FeedbackStore,
        submission: FeedbackSubmission,
    ) -> Result<FeedbackId> {
        let record = FeedbackRecord::stamp(submission, Utc::now());

        match tokio::time::timeout(self.operation_timeout, store.insert(&record)).await {
            Ok(result) => result,
            Err(_) => Err(SubmissionError::Persistence(format!(
                "insert timed out after {}ms",
                self.operation_timeout.as_millis()
            ))),
        }
    }

    /// Whether a store handle has been established.
    pub fn is_connected(&self) -> bool {
        self.handle.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::inmemory::InMemoryConnector;

    const URI: &str = "mongodb://localhost:27017";

    fn gateway(connector: &InMemoryConnector) -> PersistenceGateway {
        PersistenceGateway::new(Arc::new(connector.clone()), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_connection_is_established_once() {
        let connector = InMemoryConnector::new();
        let gateway = gateway(&connector);

        assert!(!gateway.is_connected());
        gateway.ensure_connection(URI).await.unwrap();
        gateway.ensure_connection(URI).await.unwrap();
        gateway.ensure_connection(URI).await.unwrap();

        assert!(gateway.is_connected());
        assert_eq!(connector.connect_attempts(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_first_use_connects_once() {
        let connector = InMemoryConnector::new();
        let gateway = gateway(&connector);

        let (a, b, c) = tokio::join!(
            gateway.ensure_connection(URI),
            gateway.ensure_connection(URI),
            gateway.ensure_connection(URI),
        );

        assert!(a.is_ok() && b.is_ok() && c.is_ok());
        assert_eq!(connector.connect_attempts(), 1);
    }

    #[tokio::test]
    async fn test_failed_connection_is_not_cached() {
        let connector = InMemoryConnector::new();
        let gateway = gateway(&connector);

        connector.set_fail_connects(true);
        let error = gateway.ensure_connection(URI).await.err().unwrap();
        assert!(matches!(error, SubmissionError::Connection(_)));
        assert!(!gateway.is_connected());

        connector.set_fail_connects(false);
        gateway.ensure_connection(URI).await.unwrap();

        assert!(gateway.is_connected());
        assert_eq!(connector.connect_attempts(), 2);
    }

    #[tokio::test]
    async fn test_submit_stamps_status_and_timestamp() {
        let connector = InMemoryConnector::new();
        let gateway = gateway(&connector);
        let store = gateway.ensure_connection(URI).await.unwrap();

        let before = Utc::now();
        let id = gateway
            .submit(
                store.as_ref(),
                FeedbackSubmission::new("Ada", "ada@example.com", "Hello"),
            )
            .await
            .unwrap();
        let after = Utc::now();

        let records = connector.records().await;
        assert_eq!(records.len(), 1);

        let (stored_id, record) = &records[0];
        assert_eq!(stored_id, &id);
        assert_eq!(record.status.as_str(), "new");
        assert!(record.timestamp >= before && record.timestamp <= after);
    }

    #[tokio::test]
    async fn test_insert_failure_is_persistence_error() {
        let connector = InMemoryConnector::new();
        let gateway = gateway(&connector);
        let store = gateway.ensure_connection(URI).await.unwrap();

        connector.set_fail_inserts(true);
        let error = gateway
            .submit(
                store.as_ref(),
                FeedbackSubmission::new("Ada", "ada@example.com", "Hello"),
            )
            .await
            .err()
            .unwrap();

        assert!(matches!(error, SubmissionError::Persistence(_)));
        assert!(connector.records().await.is_empty());
    }

    #[tokio::test]
    async fn test_slow_insert_times_out() {
        let connector = InMemoryConnector::new();
        let gateway = PersistenceGateway::new(
            Arc::new(connector.clone()),
            Duration::from_millis(20),
        );
        let store = gateway.ensure_connection(URI).await.unwrap();

        connector.set_stall_inserts(true);
        let error = gateway
            .submit(
                store.as_ref(),
                FeedbackSubmission::new("Ada", "ada@example.com", "Hello"),
            )
            .await
            .err()
            .unwrap();

        assert_eq!(
            error,
            SubmissionError::Persistence("insert timed out after 20ms".to_string())
        );
    }
}
