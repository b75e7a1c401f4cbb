//! Axum router construction.
//!
//! Builds the page façade, the JSON API façade, or both over one
//! [`AppContext`], plus the health check, OpenAPI docs and middleware layers.

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::context::AppContext;
use crate::middleware::auth::api_auth_middleware;
use crate::middleware::request_id::request_id_middleware;
use crate::{pages, routes};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::health_check,
        routes::users::create_user,
        routes::users::list_users,
        routes::users::get_user,
        routes::users::list_user_works,
        routes::works::create_work,
        routes::works::list_works,
        routes::works::get_work,
        routes::works::update_work,
        routes::works::delete_work,
    ),
    components(schemas(
        routes::health::HealthResponse,
        routes::users::CreateUserRequest,
        routes::users::UserResponse,
        routes::works::WorkRequest,
        routes::works::WorkResponse,
    ))
)]
pub struct ApiDoc;

/// Which presentation layers a server process exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facade {
    /// HTML pages and the JSON API in one process.
    #[default]
    All,
    /// Only the HTML pages.
    Pages,
    /// Only the JSON API.
    Api,
}

impl Facade {
    fn serves_pages(self) -> bool {
        matches!(self, Facade::All | Facade::Pages)
    }

    fn serves_api(self) -> bool {
        matches!(self, Facade::All | Facade::Api)
    }
}

fn page_routes() -> Router<AppContext> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/portfolio", get(pages::portfolio))
        .route("/contact", get(pages::contact))
        .route(
            "/add_work",
            get(pages::add_work_form).post(pages::add_work),
        )
}

fn api_routes(ctx: &AppContext) -> Router<AppContext> {
    let users = get(routes::users::list_users).post(routes::users::create_user);
    let works = get(routes::works::list_works).post(routes::works::create_work);

    Router::new()
        // Users
        .route("/users/", users.clone())
        .route("/users", users)
        .route("/users/{id}", get(routes::users::get_user))
        .route("/users/{id}/works", get(routes::users::list_user_works))
        // Works
        .route("/works/", works.clone())
        .route("/works", works)
        .route(
            "/works/{id}",
            get(routes::works::get_work)
                .put(routes::works::update_work)
                .delete(routes::works::delete_work),
        )
        .layer(middleware::from_fn_with_state(
            ctx.clone(),
            api_auth_middleware,
        ))
}

/// Build the complete Axum router for the selected façade(s).
pub fn build_router(ctx: AppContext, facade: Facade) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new().route("/health", get(routes::health::health_check));

    if facade.serves_pages() {
        app = app.merge(page_routes());
    }

    if facade.serves_api() {
        app = app
            .merge(api_routes(&ctx))
            .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app.layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
