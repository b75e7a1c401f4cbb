//! Bearer-token gate for the JSON API.
//!
//! Disabled by default, in which case every request passes through
//! untouched. When `auth.enabled` is set, API routes require
//! `Authorization: Bearer <auth.api_key>`. The page façade and `/health` are
//! never wrapped by this layer.

use axum::extract::State;
use axum::http::{header, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use folio_core::config::AuthConfig;
use folio_core::Error;

use crate::context::AppContext;
use crate::error::AppError;

/// Pull the token out of an `Authorization: Bearer <token>` header value.
pub fn extract_bearer_token(authorization: &str) -> Option<&str> {
    let (scheme, token) = authorization.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Decide whether a request carrying `authorization` may proceed.
pub fn check_authorization(auth: &AuthConfig, authorization: Option<&str>) -> Result<(), Error> {
    if !auth.enabled {
        return Ok(());
    }

    let token = authorization
        .and_then(extract_bearer_token)
        .ok_or_else(|| Error::Unauthorized("missing bearer token".into()))?;

    match auth.api_key.as_deref() {
        Some(key) if !key.is_empty() && key == token => Ok(()),
        _ => Err(Error::Unauthorized("invalid bearer token".into())),
    }
}

/// Authentication middleware. Applied to API routes only.
pub async fn api_auth_middleware(
    State(ctx): State<AppContext>,
    request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match check_authorization(&ctx.config.auth, authorization) {
        Ok(()) => next.run(request).await,
        Err(e) => {
            tracing::debug!("Rejected API request: {e}");
            let mut response = AppError::from(e).into_response();
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
            response
        }
    }
}
