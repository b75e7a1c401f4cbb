//! User route handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use folio_core::UserId;

use super::works::WorkResponse;
use super::{parse_id, ListParams};
use crate::context::AppContext;
use crate::error::AppError;

/// Request body for creating a user.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    pub username: String,
}

/// User response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

impl From<folio_db::models::User> for UserResponse {
    fn from(u: folio_db::models::User) -> Self {
        Self {
            id: u.id.get(),
            username: u.username,
        }
    }
}

/// POST /users/
#[utoipa::path(
    post,
    path = "/users/",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn create_user(
    State(ctx): State<AppContext>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let conn = ctx.conn()?;
    let user = folio_db::queries::users::create_user(&conn, &payload.username)?;
    tracing::info!(user_id = %user.id, username = %user.username, "User created");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users/
#[utoipa::path(
    get,
    path = "/users/",
    params(ListParams),
    responses(
        (status = 200, description = "Page of users in insertion order", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(
    State(ctx): State<AppContext>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let conn = ctx.conn()?;
    let users = folio_db::queries::users::list_users(&conn, params.skip, params.limit)?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{id}
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user_id: UserId = parse_id(&id, "user")?;

    let conn = ctx.conn()?;
    let user = folio_db::queries::users::get_user(&conn, user_id)?
        .ok_or_else(|| folio_core::Error::not_found("User", user_id))?;

    Ok(Json(user.into()))
}

/// GET /users/{id}/works
#[utoipa::path(
    get,
    path = "/users/{id}/works",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Works owned by the user", body = Vec<WorkResponse>),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_user_works(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<Vec<WorkResponse>>, AppError> {
    let user_id: UserId = parse_id(&id, "user")?;

    let conn = ctx.conn()?;
    if folio_db::queries::users::get_user(&conn, user_id)?.is_none() {
        return Err(folio_core::Error::not_found("User", user_id).into());
    }
    let works = folio_db::queries::works::list_works_by_user(&conn, user_id)?;

    Ok(Json(works.into_iter().map(WorkResponse::from).collect()))
}
