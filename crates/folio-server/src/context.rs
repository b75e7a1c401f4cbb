//! Application context shared by every request handler.

use std::sync::Arc;

use folio_core::config::Config;
use folio_core::UserId;
use folio_db::pool::{DbPool, PooledConnection};

/// Application context shared by all request handlers (via Axum state).
///
/// This is cheaply cloneable: the pool is internally reference counted and
/// the configuration snapshot sits behind an `Arc`.
#[derive(Clone)]
pub struct AppContext {
    /// Database connection pool. Each request checks out its own session.
    pub db: DbPool,
    /// Immutable application configuration snapshot.
    pub config: Arc<Config>,
}

impl AppContext {
    pub fn new(db: DbPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Check out a storage session for the current request.
    pub fn conn(&self) -> folio_core::Result<PooledConnection> {
        folio_db::pool::get_conn(&self.db)
    }

    /// Owner assigned to every newly created work.
    pub fn default_owner(&self) -> UserId {
        self.config.portfolio.default_owner()
    }
}
