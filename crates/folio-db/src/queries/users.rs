//! User CRUD operations.

use rusqlite::Connection;
use folio_core::{Error, Result, UserId};

use super::map_constraint;
use crate::models::User;

/// Create a new user and return it.
///
/// A duplicate username surfaces as [`Error::Conflict`].
pub fn create_user(conn: &Connection, username: &str) -> Result<User> {
    conn.execute("INSERT INTO users (username) VALUES (?1)", [username])
        .map_err(|e| match map_constraint(e) {
            Error::Conflict(_) => Error::Conflict(format!("Username '{username}' already exists")),
            other => other,
        })?;

    Ok(User {
        id: UserId::from(conn.last_insert_rowid()),
        username: username.to_string(),
    })
}

/// Get a user by primary key.
pub fn get_user(conn: &Connection, id: UserId) -> Result<Option<User>> {
    let result = conn.query_row(
        &format!("SELECT {} FROM users WHERE id = ?1", User::COLUMNS),
        [id.get()],
        User::from_row,
    );
    match result {
        Ok(u) => Ok(Some(u)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Get a user by username.
pub fn get_user_by_username(conn: &Connection, username: &str) -> Result<Option<User>> {
    let result = conn.query_row(
        &format!("SELECT {} FROM users WHERE username = ?1", User::COLUMNS),
        [username],
        User::from_row,
    );
    match result {
        Ok(u) => Ok(Some(u)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List users in insertion order, skipping `skip` rows and returning at most `limit`.
pub fn list_users(conn: &Connection, skip: u32, limit: u32) -> Result<Vec<User>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM users ORDER BY id ASC LIMIT ?1 OFFSET ?2",
            User::COLUMNS
        ))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([limit, skip], User::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Count all users.
pub fn count_users(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}
