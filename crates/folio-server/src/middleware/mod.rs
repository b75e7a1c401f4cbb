//! HTTP middleware: request ID and the optional API bearer-token gate.

pub mod auth;
pub mod request_id;
