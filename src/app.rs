use std::any::Any;

use crate::docs::openapi::ApiDoc;
use crate::handlers::error::AppError;
use crate::service::Service;
use crate::{handlers, middleware::trace_root::trace_root};
use axum::{
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::instrument;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

fn todo_routes() -> OpenApiRouter<Service> {
    OpenApiRouter::new()
        .route(
            "/todos",
            get(handlers::todo::get_all).post(handlers::todo::add),
        )
        .route(
            "/todos/{id}",
            get(handlers::todo::get)
                .put(handlers::todo::update)
                .delete(handlers::todo::delete),
        )
}

/// Panic payloads are logged and never reach the client.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(panic = %detail, "handler panicked");

    AppError::Internal.into_response()
}

/// Envelope fallbacks, panic recovery and request tracing, shared by every route.
pub(crate) fn with_middleware(router: Router<Service>) -> Router<Service> {
    router
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(from_fn(trace_root))
        .layer(TraceLayer::new_for_http())
}

#[instrument(name = "build_app", skip_all)]
pub fn build_app(service: Service) -> Router {
    let app_router = OpenApiRouter::new()
        .nest("/api", todo_routes())
        .route("/api/health", get(handlers::health))
        .route("/", get(handlers::root));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(app_router)
        .split_for_parts();

    let router = router.route(
        "/api/openapi.json",
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    );

    with_middleware(router).with_state(service)
}
