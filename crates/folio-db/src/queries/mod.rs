//! Database query modules.

pub mod users;
pub mod works;

use folio_core::Error;

/// Translate a rusqlite failure into the unified error, classifying SQLite
/// constraint violations by their message.
pub(crate) fn map_constraint(e: rusqlite::Error) -> Error {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed") {
        Error::Conflict(msg)
    } else if msg.contains("FOREIGN KEY constraint failed") || msg.contains("CHECK constraint failed")
    {
        Error::Validation(msg)
    } else {
        Error::database(msg)
    }
}
