//! Shared application state passed to every handler.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use jterminus_core::storage::StoreConnector;
use jterminus_core::SubmissionError;

use crate::{config::Config, storage::PersistenceGateway};

#[derive(Clone)]
pub struct AppState {
    /// Gateway owning the cached store handle.
    pub gateway: Arc<PersistenceGateway>,
    pub config: Arc<Config>,
    /// Directory holding the deployed page and its assets.
    static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(
        config: Config,
        connector: Arc<dyn StoreConnector>,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        let gateway = PersistenceGateway::new(connector, config.operation_timeout());

        Self {
            gateway: Arc::new(gateway),
            config: Arc::new(config),
            static_dir: Arc::new(static_dir.into()),
        }
    }

    /// The configured connection URI, or a configuration error when unset.
    pub fn database_uri(&self) -> Result<&str, SubmissionError> {
        self.config
            .database_uri
            .as_deref()
            .ok_or(SubmissionError::Configuration)
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// Whether error responses may include internal detail.
    pub fn verbose_errors(&self) -> bool {
        self.config.verbose_errors
    }
}
