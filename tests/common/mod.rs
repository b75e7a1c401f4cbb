//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an in-memory DB, a configuration,
//! and the full [`AppContext`]. The [`TestHarness::with_server`] constructor
//! starts Axum on a random port for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;

use folio_core::config::Config;
use folio_db::models::User;
use folio_db::pool::{init_memory_pool, DbPool};
use folio_server::context::AppContext;
use folio_server::router::{build_router, Facade};

/// Test harness wrapping a fully-constructed [`AppContext`] backed by an
/// in-memory database.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
}

impl TestHarness {
    /// Create a new harness with default configuration and in-memory DB.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a new harness with a custom configuration and in-memory DB.
    pub fn with_config(config: Config) -> Self {
        let db = init_memory_pool().expect("failed to create in-memory pool");
        let ctx = AppContext::new(db.clone(), config);
        Self { ctx, db }
    }

    /// Start an Axum server serving both façades on a random port.
    pub async fn with_server() -> (Self, SocketAddr) {
        Self::serve(Self::new(), Facade::All).await
    }

    /// Start an Axum server with custom config on a random port.
    pub async fn with_server_config(config: Config) -> (Self, SocketAddr) {
        Self::serve(Self::with_config(config), Facade::All).await
    }

    /// Start an Axum server exposing only `facade` on a random port.
    pub async fn with_facade(facade: Facade) -> (Self, SocketAddr) {
        Self::serve(Self::new(), facade).await
    }

    async fn serve(harness: Self, facade: Facade) -> (Self, SocketAddr) {
        let app = build_router(harness.ctx.clone(), facade);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }

    /// Get a database connection from the pool.
    pub fn conn(&self) -> folio_db::pool::PooledConnection {
        folio_db::pool::get_conn(&self.db).expect("failed to get db connection")
    }

    /// Insert a user directly into the database.
    pub fn create_user(&self, username: &str) -> User {
        let conn = self.conn();
        folio_db::queries::users::create_user(&conn, username).expect("failed to create user")
    }

    /// Insert a work directly into the database under the default owner.
    pub fn create_work(&self, title: &str, description: &str) -> folio_db::models::Work {
        let conn = self.conn();
        folio_db::queries::works::create_work(&conn, title, description, self.ctx.default_owner())
            .expect("failed to create work")
    }
}
