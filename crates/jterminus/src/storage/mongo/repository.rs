//! MongoDB repository implementation.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    options::ClientOptions,
    Client, Collection,
};

use jterminus_core::feedback::{FeedbackId, FeedbackRecord};
use jterminus_core::storage::{FeedbackStore, StoreConnector};
use jterminus_core::Result;

use super::conversions::{inserted_id_to_feedback_id, record_to_document};
use super::error::{map_connection_error, map_insert_error};
use crate::config::Config;

/// Pool and namespace settings applied to every new client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoSettings {
    pub database_name: String,
    pub collection_name: String,
    /// Bounds how many operations can be in flight at once.
    pub max_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl MongoSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            database_name: config.database_name.clone(),
            collection_name: config.collection_name.clone(),
            max_pool_size: config.max_pool_size,
            connect_timeout: config.connect_timeout(),
            server_selection_timeout: config.server_selection_timeout(),
        }
    }
}

/// Opens pooled MongoDB clients.
pub struct MongoConnector {
    settings: MongoSettings,
}

impl MongoConnector {
    pub fn new(settings: MongoSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl StoreConnector for MongoConnector {
    async fn connect(&self, uri: &str) -> Result<Arc<dyn FeedbackStore>> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(map_connection_error)?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.max_pool_size = Some(self.settings.max_pool_size);
        options.connect_timeout = Some(self.settings.connect_timeout);
        options.server_selection_timeout = Some(self.settings.server_selection_timeout);

        let client = Client::with_options(options).map_err(map_connection_error)?;
        let database = client.database(&self.settings.database_name);

        // The driver connects lazily; a ping forces server selection now.
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(map_connection_error)?;

        tracing::debug!(
            database = %self.settings.database_name,
            collection = %self.settings.collection_name,
            max_pool_size = self.settings.max_pool_size,
            "MongoDB ping succeeded"
        );

        Ok(Arc::new(MongoFeedbackStore::new(
            database.collection(&self.settings.collection_name),
        )))
    }
}

/// Writes feedback documents into one collection.
pub struct MongoFeedbackStore {
    collection: Collection<Document>,
}

impl MongoFeedbackStore {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl FeedbackStore for MongoFeedbackStore {
    async fn insert(&self, record: &FeedbackRecord) -> Result<FeedbackId> {
        let document = record_to_document(record);

        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(map_insert_error)?;

        Ok(inserted_id_to_feedback_id(&result.inserted_id))
    }
}
