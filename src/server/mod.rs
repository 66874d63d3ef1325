// src/server/mod.rs
//! Recipe book HTTP server
//!
//! Serves the recipe CRUD API under `/api/recipes`. Each request opens its
//! own database connection; the only shared state is the configuration.

pub mod config;
pub mod error;
mod handlers;
mod routes;

pub use config::{BookConfig, parse_database_url};
pub use error::{ApiError, ApiResult, ErrorBody};
pub use handlers::recipes::MessageResponse;
pub use routes::create_router;

use crate::db;
use anyhow::Result;
use rusqlite::Connection;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Path to the SQLite database
    pub db_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], config::DEFAULT_PORT)),
            db_path: "recipes.db".to_string(),
        }
    }
}

/// Shared server state
pub struct AppState {
    pub config: ServerConfig,
}

/// State handle passed to every handler
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Open a database connection
    ///
    /// Call from within `spawn_blocking` in async handlers.
    pub fn open_db(&self) -> crate::Result<Connection> {
        db::open(&self.config.db_path)
    }
}

/// Start the recipe server and run until a shutdown signal arrives
pub async fn run_server(config: ServerConfig) -> Result<()> {
    info!("Starting recipe book server on {}", config.bind_addr);
    info!("Database: {}", config.db_path);

    db::init(&config.db_path)?;

    let state = Arc::new(AppState::new(config.clone()));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Recipe book is ready to serve");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
