//! HTTP server initialization and runtime setup.
//!
//! Handles storage opening, schema creation and the Axum server lifecycle.

use crate::application::services::BlocklistService;
use crate::config::Config;
use crate::domain::repositories::BlocklistRepository;
use crate::infrastructure::persistence::{PoolSettings, SqliteBlocklistRepository, pool};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Blocklist schema
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened
/// - The schema statement fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = pool::connect(&config.database_url, &PoolSettings::from(&config))
        .await
        .context("Failed to open database")?;
    tracing::info!("Connected to database");

    let pool = Arc::new(pool);
    let repository = Arc::new(SqliteBlocklistRepository::new(pool.clone()));
    repository
        .ensure_schema()
        .await
        .context("Failed to create blocklist schema")?;
    tracing::info!("Schema ready");

    let service = BlocklistService::new(repository)
        .with_check_timeout(Duration::from_millis(config.check_timeout_ms));
    let state = AppState::new(Arc::new(service));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
