//! Page façade: server-rendered HTML views and the work-creation form.

pub mod render;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::Form;
use serde::Deserialize;

use crate::context::AppContext;
use crate::error::AppError;

/// Fields posted by the add-work form. Both are required.
#[derive(Debug, Deserialize)]
pub struct WorkForm {
    pub title: String,
    pub description: String,
}

/// GET /
pub async fn home(State(ctx): State<AppContext>) -> Html<String> {
    Html(render::home(&ctx.config.site))
}

/// GET /about
pub async fn about(State(ctx): State<AppContext>) -> Html<String> {
    Html(render::about(&ctx.config.site))
}

/// GET /contact
pub async fn contact(State(ctx): State<AppContext>) -> Html<String> {
    Html(render::contact(&ctx.config.site))
}

/// GET /portfolio
pub async fn portfolio(State(ctx): State<AppContext>) -> Result<Html<String>, AppError> {
    let conn = ctx.conn()?;
    let works = folio_db::queries::works::list_all_works(&conn)?;
    Ok(Html(render::portfolio(&ctx.config.site, &works)))
}

/// GET /add_work
pub async fn add_work_form(State(ctx): State<AppContext>) -> Html<String> {
    Html(render::add_work_form(&ctx.config.site))
}

/// POST /add_work
///
/// Stores the work under the default owner and redirects to the listing
/// with `302 Found`.
pub async fn add_work(
    State(ctx): State<AppContext>,
    Form(form): Form<WorkForm>,
) -> Result<impl IntoResponse, AppError> {
    let conn = ctx.conn()?;
    let work = folio_db::queries::works::create_work(
        &conn,
        &form.title,
        &form.description,
        ctx.default_owner(),
    )?;
    tracing::info!(work_id = %work.id, "Work added from form");

    Ok((StatusCode::FOUND, [(header::LOCATION, "/portfolio")]))
}
