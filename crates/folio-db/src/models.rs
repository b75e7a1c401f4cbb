//! Rust structs mapping to database tables.
//!
//! Each model implements `from_row` for constructing itself from a
//! `rusqlite::Row` selected with the matching `COLUMNS` list.

use folio_core::{UserId, WorkId};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

impl User {
    pub const COLUMNS: &'static str = "id, username";

    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: UserId::from(row.get::<_, i64>(0)?),
            username: row.get(1)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Work
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Work {
    pub id: WorkId,
    pub title: String,
    pub description: String,
    pub user_id: UserId,
}

impl Work {
    pub const COLUMNS: &'static str = "id, title, description, user_id";

    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: WorkId::from(row.get::<_, i64>(0)?),
            title: row.get(1)?,
            description: row.get(2)?,
            user_id: UserId::from(row.get::<_, i64>(3)?),
        })
    }
}
