//! Work CRUD route handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use folio_core::WorkId;

use super::{parse_id, ListParams};
use crate::context::AppContext;
use crate::error::AppError;

/// Request body for creating or replacing a work. Both fields are required.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct WorkRequest {
    pub title: String,
    pub description: String,
}

/// Work response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct WorkResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub user_id: i64,
}

impl From<folio_db::models::Work> for WorkResponse {
    fn from(w: folio_db::models::Work) -> Self {
        Self {
            id: w.id.get(),
            title: w.title,
            description: w.description,
            user_id: w.user_id.get(),
        }
    }
}

/// POST /works/
#[utoipa::path(
    post,
    path = "/works/",
    request_body = WorkRequest,
    responses(
        (status = 201, description = "Work created for the default owner", body = WorkResponse),
        (status = 400, description = "Default owner does not exist")
    )
)]
pub async fn create_work(
    State(ctx): State<AppContext>,
    Json(payload): Json<WorkRequest>,
) -> Result<(StatusCode, Json<WorkResponse>), AppError> {
    let conn = ctx.conn()?;
    let work = folio_db::queries::works::create_work(
        &conn,
        &payload.title,
        &payload.description,
        ctx.default_owner(),
    )?;
    tracing::info!(work_id = %work.id, owner = %work.user_id, "Work created");
    Ok((StatusCode::CREATED, Json(work.into())))
}

/// GET /works/
#[utoipa::path(
    get,
    path = "/works/",
    params(ListParams),
    responses(
        (status = 200, description = "Page of works in insertion order", body = Vec<WorkResponse>)
    )
)]
pub async fn list_works(
    State(ctx): State<AppContext>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<WorkResponse>>, AppError> {
    let conn = ctx.conn()?;
    let works = folio_db::queries::works::list_works(&conn, params.skip, params.limit)?;
    Ok(Json(works.into_iter().map(WorkResponse::from).collect()))
}

/// GET /works/{id}
#[utoipa::path(
    get,
    path = "/works/{id}",
    params(("id" = i64, Path, description = "Work ID")),
    responses(
        (status = 200, description = "Work details", body = WorkResponse),
        (status = 404, description = "Work not found")
    )
)]
pub async fn get_work(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<WorkResponse>, AppError> {
    let work_id: WorkId = parse_id(&id, "work")?;

    let conn = ctx.conn()?;
    let work = folio_db::queries::works::get_work(&conn, work_id)?
        .ok_or_else(|| folio_core::Error::not_found("Work", work_id))?;

    Ok(Json(work.into()))
}

/// PUT /works/{id}
#[utoipa::path(
    put,
    path = "/works/{id}",
    params(("id" = i64, Path, description = "Work ID")),
    request_body = WorkRequest,
    responses(
        (status = 200, description = "Title and description replaced", body = WorkResponse),
        (status = 404, description = "Work not found")
    )
)]
pub async fn update_work(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    Json(payload): Json<WorkRequest>,
) -> Result<Json<WorkResponse>, AppError> {
    let work_id: WorkId = parse_id(&id, "work")?;

    let conn = ctx.conn()?;
    let work = folio_db::queries::works::update_work(
        &conn,
        work_id,
        &payload.title,
        &payload.description,
    )?
    .ok_or_else(|| folio_core::Error::not_found("Work", work_id))?;

    Ok(Json(work.into()))
}

/// DELETE /works/{id}
#[utoipa::path(
    delete,
    path = "/works/{id}",
    params(("id" = i64, Path, description = "Work ID")),
    responses(
        (status = 200, description = "Deleted work, echoed back", body = WorkResponse),
        (status = 404, description = "Work not found")
    )
)]
pub async fn delete_work(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<WorkResponse>, AppError> {
    let work_id: WorkId = parse_id(&id, "work")?;

    let conn = ctx.conn()?;
    let work = folio_db::queries::works::delete_work(&conn, work_id)?
        .ok_or_else(|| folio_core::Error::not_found("Work", work_id))?;

    tracing::info!(work_id = %work.id, "Work deleted");
    Ok(Json(work.into()))
}
