//! Work CRUD operations.

use rusqlite::{params, Connection};
use folio_core::{Error, Result, UserId, WorkId};

use super::map_constraint;
use crate::models::Work;

/// Create a new work owned by `owner` and return it.
///
/// The owner must exist; a dangling reference is rejected by the foreign key
/// and surfaces as [`Error::Validation`].
pub fn create_work(
    conn: &Connection,
    title: &str,
    description: &str,
    owner: UserId,
) -> Result<Work> {
    conn.execute(
        "INSERT INTO works (title, description, user_id) VALUES (?1, ?2, ?3)",
        params![title, description, owner.get()],
    )
    .map_err(|e| match map_constraint(e) {
        Error::Validation(msg) if msg.contains("FOREIGN KEY") => {
            Error::Validation(format!("Owner user {owner} does not exist"))
        }
        other => other,
    })?;

    Ok(Work {
        id: WorkId::from(conn.last_insert_rowid()),
        title: title.to_string(),
        description: description.to_string(),
        user_id: owner,
    })
}

/// Get a work by primary key.
pub fn get_work(conn: &Connection, id: WorkId) -> Result<Option<Work>> {
    let result = conn.query_row(
        &format!("SELECT {} FROM works WHERE id = ?1", Work::COLUMNS),
        [id.get()],
        Work::from_row,
    );
    match result {
        Ok(w) => Ok(Some(w)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// List works in insertion order, skipping `skip` rows and returning at most `limit`.
pub fn list_works(conn: &Connection, skip: u32, limit: u32) -> Result<Vec<Work>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM works ORDER BY id ASC LIMIT ?1 OFFSET ?2",
            Work::COLUMNS
        ))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([limit, skip], Work::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// List every work in insertion order (portfolio page).
pub fn list_all_works(conn: &Connection) -> Result<Vec<Work>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {} FROM works ORDER BY id ASC", Work::COLUMNS))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([], Work::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// List the works owned by one user, in insertion order.
pub fn list_works_by_user(conn: &Connection, owner: UserId) -> Result<Vec<Work>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM works WHERE user_id = ?1 ORDER BY id ASC",
            Work::COLUMNS
        ))
        .map_err(|e| Error::database(e.to_string()))?;
    let rows = stmt
        .query_map([owner.get()], Work::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;
    Ok(rows)
}

/// Replace both the title and description of a work.
///
/// Returns the updated row, or `None` if no work has this id.
pub fn update_work(
    conn: &Connection,
    id: WorkId,
    title: &str,
    description: &str,
) -> Result<Option<Work>> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| Error::database(e.to_string()))?;

    let n = tx
        .execute(
            "UPDATE works SET title = ?1, description = ?2 WHERE id = ?3",
            params![title, description, id.get()],
        )
        .map_err(map_constraint)?;
    if n == 0 {
        return Ok(None);
    }

    let updated = get_work(&tx, id)?;
    tx.commit().map_err(|e| Error::database(e.to_string()))?;
    Ok(updated)
}

/// Delete a work and return the row as it was before deletion.
///
/// Returns `None` if no work has this id.
pub fn delete_work(conn: &Connection, id: WorkId) -> Result<Option<Work>> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| Error::database(e.to_string()))?;

    let Some(work) = get_work(&tx, id)? else {
        return Ok(None);
    };

    tx.execute("DELETE FROM works WHERE id = ?1", [id.get()])
        .map_err(|e| Error::database(e.to_string()))?;
    tx.commit().map_err(|e| Error::database(e.to_string()))?;
    Ok(Some(work))
}

/// Count all works.
pub fn count_works(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM works", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}
