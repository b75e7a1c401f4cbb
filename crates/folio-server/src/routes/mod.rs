//! Route handlers for the JSON API façade.

pub mod health;
pub mod users;
pub mod works;

use serde::Deserialize;

/// Offset/limit query parameters shared by the listing endpoints.
#[derive(Debug, Clone, Copy, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Number of rows to skip.
    #[serde(default)]
    pub skip: u32,
    /// Maximum number of rows to return.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

/// Parse a path segment into a typed row id, mapping failures to a 400.
pub(crate) fn parse_id<T: std::str::FromStr>(raw: &str, entity: &str) -> folio_core::Result<T> {
    raw.parse()
        .map_err(|_| folio_core::Error::Validation(format!("Invalid {entity} id: {raw}")))
}
