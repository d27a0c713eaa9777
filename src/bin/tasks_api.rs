//! Serves the task handlers over HTTP.
//!
//! Usage:
//!
//! ```text
//! tasks-api
//! ```
//!
//! Configuration is read from the environment, optionally seeded from a
//! `.env` file:
//!
//! - `STORAGE_MODE`: `postgres` (default) | `in_memory`
//! - `DATABASE_URL`: `PostgreSQL` connection URL (required when `STORAGE_MODE=postgres`)
//! - `RUST_LOG`: Logging filter (e.g. `tasks_dashboard=debug`)
//! - `HOST`: Server host address (default: `0.0.0.0`)
//! - `PORT`: Server port (default: `3000`)
//!
//! The database is connected once at startup. When the connection fails the
//! server still starts and every request answers `500`.

use std::net::SocketAddr;
use std::sync::Arc;

use tasks_dashboard::config::{AppConfig, ConfigError, StorageMode};
use tasks_dashboard::handler::{DatabaseHandle, TaskHandlers, http};
use tasks_dashboard::task::adapters::{
    memory::InMemoryTaskRepository, postgres::PostgresTaskRepository,
};
use tasks_dashboard::task::ports::TaskRepository;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that stop the server.
#[derive(Debug, Error)]
enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasks_dashboard=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    run().await.map_err(|err| {
        tracing::error!(error = %err, "tasks-api stopped");
        err.into()
    })
}

async fn run() -> Result<(), ServerError> {
    let config = AppConfig::from_env()?;
    let address = config.listen_addr()?;

    match config.storage_mode() {
        StorageMode::InMemory => {
            tracing::info!("using in-memory task storage");
            let repository = Arc::new(InMemoryTaskRepository::new());
            serve(DatabaseHandle::connected(repository), address).await
        }
        StorageMode::Postgres => {
            let outcome = match config.database_url() {
                Ok(url) => PostgresTaskRepository::connect(url)
                    .await
                    .map_err(|err| err.to_string()),
                Err(err) => Err(err.to_string()),
            };
            serve(DatabaseHandle::from_connection(outcome), address).await
        }
    }
}

async fn serve<R>(database: DatabaseHandle<R>, address: SocketAddr) -> Result<(), ServerError>
where
    R: TaskRepository + 'static,
{
    let application = http::router(TaskHandlers::new(&database));
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;

    match listener.local_addr() {
        Ok(local) => tracing::info!(address = %local, "listening"),
        Err(err) => tracing::warn!(error = %err, "could not determine local address"),
    }

    axum::serve(listener, application)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Completes on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
