//! folio-server: HTTP façades over the shared portfolio schema.
//!
//! This crate ties the storage layer to axum. It provides:
//!
//! - The page façade: home, about, portfolio, contact, and the add-work form
//! - The JSON API façade: CRUD over users and works, with OpenAPI docs
//! - Request-id tracing and an optional bearer-token gate for the API
//! - Graceful shutdown via signal handling

pub mod context;
pub mod error;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod routes;

use std::net::SocketAddr;

use folio_core::config::Config;

use crate::context::AppContext;
pub use crate::router::{build_router, Facade};

/// Open (creating if needed) the database named by the configuration.
pub fn open_database(config: &Config) -> folio_core::Result<folio_db::pool::DbPool> {
    let db_path = &config.server.db_path;
    let existed = db_path.exists();
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            tracing::info!("Created database directory {}", parent.display());
        }
    }

    let db_str = db_path.to_string_lossy();
    let db = folio_db::pool::init_pool(&db_str)?;
    if existed {
        tracing::info!("Database opened (existing) at {db_str}");
    } else {
        tracing::info!("Database created (new) at {db_str}");
    }
    Ok(db)
}

/// Start the folio server.
///
/// Opens the database, builds the router for the requested façade(s), and
/// serves until a shutdown signal is received.
pub async fn start(config: Config, facade: Facade) -> folio_core::Result<()> {
    for warning in config.validate() {
        tracing::warn!("Config warning: {warning}");
    }

    let db = open_database(&config)?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| folio_core::Error::Internal(format!("Invalid server address: {e}")))?;

    if config.auth.enabled {
        tracing::info!("API bearer-token gate enabled");
    }

    let ctx = AppContext::new(db, config);
    let app = build_router(ctx, facade);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| folio_core::Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    tracing::info!("Serving {facade:?} façade on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
