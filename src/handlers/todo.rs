use super::error::{AppError, TodoAction};
use super::types::*;
use crate::{handlers::Service, storage::UpdateTodo, utils::RootSpan};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use tracing::info;

#[utoipa::path(
    get,
    path = "/api/todos",
    responses(
        (status = 200, description = "List all todos", body = TodoListResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::get_all", skip_all)]
pub(crate) async fn get_all(State(service): State<Service>) -> Result<impl IntoResponse, AppError> {
    let todos = service
        .todo()
        .get_all()
        .await
        .map_err(AppError::storage(TodoAction::List))?;

    info!("Get {} ToDos", todos.len());

    Ok(Json(TodoListResponse::new(todos)))
}

#[utoipa::path(
    post,
    path = "/api/todos",
    request_body(
        content = CreateTodo,
        description = "New ToDo item",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "ToDo created", body = TodoResponse),
        (status = 400, description = "Title is required", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::add", skip_all)]
pub(crate) async fn add(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    input: CreateTodo,
) -> Result<impl IntoResponse, AppError> {
    let todo = service
        .todo()
        .add(&input.title, &input.description)
        .await
        .map_err(AppError::storage(TodoAction::Create))?;

    root_span.record().todo_id(&todo.id);

    Ok((StatusCode::CREATED, Json(TodoResponse::new(todo))))
}

#[utoipa::path(
    get,
    path = "/api/todos/{id}",
    params(
        ("id" = i64, Path, description = "ToDo ID")
    ),
    responses(
        (status = 200, description = "Get ToDo by ID", body = TodoResponse),
        (status = 404, description = "ToDo not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::get", skip_all)]
pub(crate) async fn get(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    TodoIdPath(id): TodoIdPath,
) -> Result<impl IntoResponse, AppError> {
    root_span.record().todo_id(&id);

    let todo = service
        .todo()
        .get(id)
        .await
        .map_err(AppError::storage(TodoAction::Get))?;

    info!(todo = ?todo, "Get ToDo");

    Ok(Json(TodoResponse::new(todo)))
}

#[utoipa::path(
    put,
    path = "/api/todos/{id}",
    params(
        ("id" = i64, Path, description = "ToDo ID")
    ),
    request_body(
        content = UpdateTodoRequest,
        description = "Partial ToDo update",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "ToDo updated", body = TodoResponse),
        (status = 400, description = "Malformed body or empty title", body = ErrorResponse),
        (status = 404, description = "ToDo not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::update", skip_all)]
pub(crate) async fn update(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    TodoIdPath(id): TodoIdPath,
    JsonBody(input): JsonBody<UpdateTodoRequest>,
) -> Result<impl IntoResponse, AppError> {
    root_span.record().todo_id(&id);

    let patch = UpdateTodo::try_from(input)?;

    let todo = service
        .todo()
        .update(id, patch)
        .await
        .map_err(AppError::storage(TodoAction::Update))?;

    Ok(Json(TodoResponse::new(todo)))
}

#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    params(
        ("id" = i64, Path, description = "ToDo ID")
    ),
    responses(
        (status = 200, description = "ToDo deleted", body = DeleteResponse),
        (status = 404, description = "ToDo not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
    tag = "todos"
)]
#[tracing::instrument(name = "handlers::todo::delete", skip_all)]
pub(crate) async fn delete(
    State(service): State<Service>,
    Extension(root_span): Extension<RootSpan>,
    TodoIdPath(id): TodoIdPath,
) -> Result<impl IntoResponse, AppError> {
    root_span.record().todo_id(&id);

    service
        .todo()
        .delete(id)
        .await
        .map_err(AppError::storage(TodoAction::Delete))?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "Todo deleted successfully".to_string(),
    }))
}
