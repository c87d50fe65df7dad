use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// MongoDB connection URI. `None` when neither variable is set.
    pub database_uri: Option<String>,
    /// Database holding the feedback collection (default: "jterminus")
    pub database_name: String,
    /// Collection feedback records are written to (default: "feedback")
    pub collection_name: String,
    /// Upper bound on pooled connections (default: 10)
    pub max_pool_size: u32,
    /// Timeout for opening a single connection, in milliseconds (default: 5,000)
    pub connect_timeout_ms: u64,
    /// Timeout for finding a usable server, in milliseconds (default: 5,000)
    pub server_selection_timeout_ms: u64,
    /// Timeout for a single insert, in milliseconds (default: 45,000)
    pub operation_timeout_ms: u64,
    /// Include internal error detail in responses (`APP_ENV` or `NODE_ENV` set to `development`)
    pub verbose_errors: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MONGODB_URI` - Connection URI, falls back to `DATABASE_URL`
    /// - `MONGODB_DATABASE` - Database name (default: "jterminus")
    /// - `MONGODB_COLLECTION` - Collection name (default: "feedback")
    /// - `MONGODB_MAX_POOL_SIZE` - Pool size (default: 10)
    /// - `MONGODB_CONNECT_TIMEOUT_MS` - Connect timeout (default: 5000)
    /// - `MONGODB_SERVER_SELECTION_TIMEOUT_MS` - Server selection timeout (default: 5000)
    /// - `MONGODB_OPERATION_TIMEOUT_MS` - Insert timeout (default: 45000)
    /// - `APP_ENV` - `development` enables verbose error responses, falls back to `NODE_ENV`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let parsed =
            |key: &str| -> Option<u64> { non_blank(key).and_then(|v| v.trim().parse().ok()) };

        Self {
            database_uri: non_blank("MONGODB_URI").or_else(|| non_blank("DATABASE_URL")),
            database_name: non_blank("MONGODB_DATABASE")
                .unwrap_or_else(|| "jterminus".to_string()),
            collection_name: non_blank("MONGODB_COLLECTION")
                .unwrap_or_else(|| "feedback".to_string()),
            max_pool_size: parsed("MONGODB_MAX_POOL_SIZE")
                .and_then(|v| u32::try_from(v).ok())
                .filter(|v| *v > 0)
                .unwrap_or(10),
            connect_timeout_ms: parsed("MONGODB_CONNECT_TIMEOUT_MS").unwrap_or(5_000),
            server_selection_timeout_ms: parsed("MONGODB_SERVER_SELECTION_TIMEOUT_MS")
                .unwrap_or(5_000),
            operation_timeout_ms: parsed("MONGODB_OPERATION_TIMEOUT_MS").unwrap_or(45_000),
            verbose_errors: non_blank("APP_ENV")
                .or_else(|| non_blank("NODE_ENV"))
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("development")),
        }
    }

    /// Get the connect timeout as a Duration.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Get the server selection timeout as a Duration.
    pub fn server_selection_timeout(&self) -> Duration {
        Duration::from_millis(self.server_selection_timeout_ms)
    }

    /// Get the insert timeout as a Duration.
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_millis(self.operation_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
