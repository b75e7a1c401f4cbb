//! Typed ID wrappers providing compile-time safety for row identifiers.
//!
//! Each ID type is a newtype over the SQLite `INTEGER PRIMARY KEY` value,
//! preventing accidental misuse (e.g., passing a `WorkId` where a `UserId`
//! is expected). IDs are assigned by the database, so there is no `new()`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Generate a newtype ID wrapper over `i64`.
///
/// The macro produces a struct with:
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - transparent `Serialize`/`Deserialize` (a bare JSON integer)
/// - `Display` and `FromStr` delegating to the inner integer
/// - `From<i64>` conversion
macro_rules! typed_id {
    ($($(#[doc = $doc:expr])* $name:ident),+ $(,)?) => {
        $(
            $(#[doc = $doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(i64);

            impl $name {
                /// Return the raw row id.
                #[must_use]
                pub fn get(self) -> i64 {
                    self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl FromStr for $name {
                type Err = ParseIntError;

                fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                    s.parse::<i64>().map(Self)
                }
            }

            impl From<i64> for $name {
                fn from(raw: i64) -> Self {
                    Self(raw)
                }
            }
        )+
    };
}

typed_id! {
    /// Identifier of a row in the `users` table.
    UserId,
    /// Identifier of a row in the `works` table.
    WorkId,
}
