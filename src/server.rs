//! HTTP server initialization and runtime setup.
//!
//! Opens the configured storage backend, serves the router and closes the
//! backend once the server has drained.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;

use crate::application::services::OwnerService;
use crate::config::Config;
use crate::infrastructure::persistence;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (PostgreSQL with migrations, file or memory)
/// - Owner cookie verification
/// - Axum HTTP server with graceful shutdown on SIGINT/SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - The storage backend cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = persistence::connect(&config)
        .await
        .context("Failed to open storage")?;

    let state = AppState::new(
        repository,
        OwnerService::new(config.secret_key.clone()),
        &config.base_url,
    );
    let link_service = state.link_service.clone();

    let app = app_router(state, Duration::from_secs(config.request_timeout));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(shutdown_signal()))
        .await;

    tracing::info!("Server stopped, closing storage");
    link_service.close().await.context("Failed to close storage")?;

    served.context("Server error")
}

/// Resolves once `signal` fires. A failed handler never resolves, so the
/// server keeps running instead of stopping at startup.
async fn wait_for_shutdown<F>(signal: F)
where
    F: Future<Output = Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::error!(error = %e, "signal handler failed, graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res?;
            tracing::info!("Ctrl+C received, shutting down");
        },
        res = terminate => {
            res?;
            tracing::info!("SIGTERM received, shutting down");
        },
    }

    Ok(())
}
