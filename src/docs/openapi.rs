use utoipa::OpenApi;

use crate::handlers::types::{
    CreateTodo, DeleteResponse, ErrorResponse, HealthResponse, TodoListResponse, TodoResponse,
    TodoView, UpdateTodoRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::health,
        crate::handlers::todo::get_all,
        crate::handlers::todo::get,
        crate::handlers::todo::add,
        crate::handlers::todo::update,
        crate::handlers::todo::delete,
    ),
    components(
        schemas(CreateTodo, UpdateTodoRequest, TodoView, TodoResponse, TodoListResponse, DeleteResponse, ErrorResponse, HealthResponse),
    ),
    tags(
        (name = "todos", description = "Endpoints to create and manage todo items"),
        (name = "meta", description = "Service discovery and health")
    ),
    info(title = "Todo API")
)]
pub struct ApiDoc;
