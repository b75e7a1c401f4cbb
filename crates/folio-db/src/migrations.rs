//! Embedded SQL migrations and runner.
//!
//! Migrations are stored as `&str` constants and executed in order.  A
//! `schema_migrations` table tracks which versions have been applied, so
//! running them on every startup is idempotent.

use rusqlite::Connection;
use folio_core::{Error, Result};

/// V1: users and the works they own.
///
/// `works.user_id` has no `ON DELETE` action, so deleting a user that still
/// owns works is rejected by the engine.
const V1_INITIAL: &str = r#"
CREATE TABLE users (
    id       INTEGER PRIMARY KEY,
    username TEXT NOT NULL UNIQUE CHECK (length(username) <= 80)
);

CREATE TABLE works (
    id          INTEGER PRIMARY KEY,
    title       TEXT NOT NULL CHECK (length(title) <= 120),
    description TEXT NOT NULL,
    user_id     INTEGER NOT NULL REFERENCES users(id)
);

CREATE INDEX idx_works_user_id ON works(user_id);
"#;

/// Ordered list of (version, sql) pairs.
const MIGRATIONS: &[(i64, &str)] = &[(1, V1_INITIAL)];

/// Bring `conn` up to the newest schema version.
///
/// Versions above the highest recorded one in `schema_migrations` are
/// applied in order, each together with its bookkeeping row in one
/// transaction.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let fail = |step: &str, e: rusqlite::Error| Error::database(format!("schema {step}: {e}"));

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
    )
    .map_err(|e| fail("bookkeeping", e))?;

    let current: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
            [],
            |row| row.get(0),
        )
        .map_err(|e| fail("version lookup", e))?;

    for &(version, sql) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| fail("transaction", e))?;
        tx.execute_batch(sql)
            .map_err(|e| fail(&format!("V{version}"), e))?;
        tx.execute("INSERT INTO schema_migrations (version) VALUES (?1)", [version])
            .map_err(|e| fail(&format!("V{version} bookkeeping"), e))?;
        tx.commit().map_err(|e| fail(&format!("V{version} commit"), e))?;

        tracing::debug!(version, "Schema upgraded");
    }

    Ok(())
}
