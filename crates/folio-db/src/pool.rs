//! Connection pool management for SQLite via r2d2.
//!
//! A pooled connection is the per-request storage session: handlers check
//! one out with [`get_conn`] and it goes back to the pool when dropped,
//! whether the request succeeded or not.

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use folio_core::{Error, Result};

use crate::migrations;

/// Shared pool of storage sessions.
pub type DbPool = Pool<SqliteConnectionManager>;

/// One storage session, returned to the pool on drop.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

const POOL_SIZE: u32 = 4;

/// Open the portfolio database file at `db_path`, creating it if missing.
///
/// Sessions run in WAL mode so the page and API façades can share the file
/// from separate processes.
pub fn init_pool(db_path: &str) -> Result<DbPool> {
    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.execute_batch("PRAGMA foreign_keys = ON; PRAGMA journal_mode = WAL;")
    });
    build(manager)
}

/// Open a private in-memory database.
///
/// The name is unique per call, so two pools never see each other's rows,
/// while sessions from the same pool share one database through the shared
/// cache.
pub fn init_memory_pool() -> Result<DbPool> {
    use std::sync::atomic::{AtomicU64, Ordering};
    static NEXT: AtomicU64 = AtomicU64::new(0);
    let uri = format!(
        "file:foliomem_{}_{}?mode=memory&cache=shared",
        NEXT.fetch_add(1, Ordering::Relaxed),
        std::process::id()
    );

    let manager = SqliteConnectionManager::file(uri)
        .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));
    build(manager)
}

/// Build the pool and bring the schema up to date with its first session.
fn build(manager: SqliteConnectionManager) -> Result<DbPool> {
    let pool = Pool::builder()
        .max_size(POOL_SIZE)
        .build(manager)
        .map_err(|e| Error::database(format!("cannot open portfolio store: {e}")))?;

    migrations::run_migrations(&*get_conn(&pool)?)?;
    Ok(pool)
}

/// Check out the storage session for one request.
pub fn get_conn(pool: &DbPool) -> Result<PooledConnection> {
    pool.get()
        .map_err(|e| Error::database(format!("no storage session available: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_memory_pool() {
        let pool = init_memory_pool().unwrap();
        assert_eq!(pool.max_size(), 4);
    }

    #[test]
    fn test_get_conn_enables_foreign_keys() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let fk: i32 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn test_migrations_run_on_init() {
        let pool = init_memory_pool().unwrap();
        let conn = get_conn(&pool).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name IN ('users', 'works')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_sessions_share_one_database() {
        let pool = init_memory_pool().unwrap();
        {
            let writer = get_conn(&pool).unwrap();
            writer
                .execute("INSERT INTO users (username) VALUES ('alice')", [])
                .unwrap();
        }
        assert_eq!(pool.state().idle_connections, pool.state().connections);

        let reader = get_conn(&pool).unwrap();
        let n: i64 = reader
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn test_memory_pools_are_isolated() {
        let a = init_memory_pool().unwrap();
        let b = init_memory_pool().unwrap();
        get_conn(&a)
            .unwrap()
            .execute("INSERT INTO users (username) VALUES ('only-in-a')", [])
            .unwrap();

        let in_b: i64 = get_conn(&b)
            .unwrap()
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .unwrap();
        assert_eq!(in_b, 0);
    }

    #[test]
    fn test_file_pool_reopens_existing_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolio.db");
        let path = path.to_string_lossy();

        {
            let pool = init_pool(&path).unwrap();
            get_conn(&pool)
                .unwrap()
                .execute("INSERT INTO users (username) VALUES ('alice')", [])
                .unwrap();
        }

        let pool = init_pool(&path).unwrap();
        let name: String = get_conn(&pool)
            .unwrap()
            .query_row("SELECT username FROM users WHERE id = 1", [], |row| row.get(0))
            .unwrap();
        assert_eq!(name, "alice");
    }
}
