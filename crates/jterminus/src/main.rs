mod app;
mod config;
mod handlers;
mod state;
mod storage;

use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app,
    config::Config,
    state::AppState,
    storage::mongo::{MongoConnector, MongoSettings},
};

/// jterminus - Marketing page and feedback collector
#[derive(Parser, Debug)]
#[command(name = "jterminus")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,

    /// Directory holding index.html and its assets
    #[arg(long, default_value = "public", env = "STATIC_DIR")]
    static_dir: PathBuf,

    /// Exit at startup when no database URI is configured
    #[arg(long, env = "REQUIRE_DATABASE")]
    require_database: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jterminus=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    if config.database_uri.is_none() {
        if cli.require_database {
            bail!("MONGODB_URI or DATABASE_URL must be set");
        }
        tracing::warn!("MONGODB_URI or DATABASE_URL is not set; database routes will fail");
    }

    tracing::info!(
        database = %config.database_name,
        collection = %config.collection_name,
        max_pool_size = config.max_pool_size,
        verbose_errors = config.verbose_errors,
        static_dir = %cli.static_dir.display(),
        "Loaded configuration"
    );

    let connector = MongoConnector::new(MongoSettings::from_config(&config));
    let state = AppState::new(config, Arc::new(connector), cli.static_dir);

    // Build the application router
    let app = create_app(state);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr)
                .await
                .inspect_err(|e| tracing::error!(address = %addr, error = %e, "Failed to bind"))
                .with_context(|| format!("failed to bind {addr}"))?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
