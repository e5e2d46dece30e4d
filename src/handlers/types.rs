use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{instrument, warn};
use utoipa::ToSchema;

use super::error::AppError;
use crate::storage::{Todo, TodoId, UpdateTodo};

/// Wire form of a [`Todo`]; timestamps are RFC 3339 in UTC.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct TodoView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Todo> for TodoView {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.get(),
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
            created_at: todo.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            updated_at: todo.updated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TodoResponse {
    pub success: bool,
    pub data: TodoView,
}

impl TodoResponse {
    pub fn new(todo: Todo) -> Self {
        Self {
            success: true,
            data: todo.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TodoListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<TodoView>,
}

impl TodoListResponse {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self {
            success: true,
            count: todos.len(),
            data: todos.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            database: "connected".to_string(),
            error: None,
        }
    }

    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            database: "disconnected".to_string(),
            error: Some(error.into()),
        }
    }
}

/// Any body without a non-blank string `title` is rejected with the same error,
/// whether it is empty, not JSON, or JSON of the wrong shape.
#[derive(Debug, PartialEq, Eq, ToSchema)]
pub(crate) struct CreateTodo {
    pub title: String,
    #[schema(required = false, default = "")]
    pub description: String,
}

impl CreateTodo {
    pub(crate) fn parse(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

        let title = value
            .get("title")
            .and_then(Value::as_str)
            .filter(|title| !title.trim().is_empty())
            .ok_or(AppError::TitleRequired)?;

        let description = value
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default();

        Ok(Self {
            title: title.to_owned(),
            description: description.to_owned(),
        })
    }
}

impl<S> FromRequest<S> for CreateTodo
where
    S: Send + Sync,
{
    type Rejection = AppError;

    #[instrument(name = "construct_create_todo_from_request", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            warn!(error = %e, "failed to read create todo body");
            AppError::InvalidBody(e.body_text())
        })?;

        CreateTodo::parse(&body)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub(crate) struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TryFrom<UpdateTodoRequest> for UpdateTodo {
    type Error = AppError;

    fn try_from(value: UpdateTodoRequest) -> Result<Self, Self::Error> {
        if value
            .title
            .as_deref()
            .is_some_and(|title| title.trim().is_empty())
        {
            return Err(AppError::EmptyTitle);
        }

        Ok(Self {
            title: value.title,
            description: value.description,
            completed: value.completed,
        })
    }
}

/// `axum::Json` with rejections rendered as the error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub(crate) struct JsonBody<T>(pub T);

/// A path id that is not an integer matches no resource.
#[derive(Debug)]
pub(crate) struct TodoIdPath(pub TodoId);

impl<S> FromRequestParts<S> for TodoIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<TodoId>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                warn!(error = %e, "invalid todo id in path");
                AppError::RouteNotFound
            })?;

        Ok(Self(id))
    }
}
