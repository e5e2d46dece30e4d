pub(crate) mod error;
pub(crate) mod todo;
pub mod types;

pub(crate) use crate::service::Service;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use tracing::error;
pub(crate) use types::*;

use crate::utils::APP_VERSION;
use error::AppError;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service name, version and endpoints"),
    ),
    tag = "meta"
)]
#[tracing::instrument(name = "root", skip_all)]
pub(crate) async fn root() -> Json<Value> {
    Json(json!({
        "message": "Todo API",
        "version": APP_VERSION,
        "endpoints": {
            "health": "/api/health",
            "todos": "/api/todos",
            "todo": "/api/todos/{id}",
            "openapi": "/api/openapi.json",
        },
    }))
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse),
    ),
    tag = "meta"
)]
#[tracing::instrument(name = "health", skip_all)]
pub(crate) async fn health(State(service): State<Service>) -> impl IntoResponse {
    match service.check_health().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::healthy())),
        Err(e) => {
            error!(error = ?e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::unhealthy(e.to_string())),
            )
        }
    }
}

pub(crate) async fn not_found() -> AppError {
    AppError::RouteNotFound
}

pub(crate) async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
