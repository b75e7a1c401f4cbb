//! folio-db: database access and persistence layer.
//!
//! This crate owns the single schema definition shared by the page and API
//! façades: SQLite-backed storage with connection pooling, embedded
//! migrations, typed models, and query modules for users and works.

pub mod migrations;
pub mod models;
pub mod pool;
pub mod queries;
