use std::sync::Arc;

use tracing::{info, instrument};

use crate::storage::{NewTodo, StorageError, Todo, TodoId, TodoStorage, UpdateTodo};

pub struct ServiceTodoRef {
    storage: Arc<dyn TodoStorage>,
}

impl ServiceTodoRef {
    pub(crate) fn new(storage: Arc<dyn TodoStorage>) -> Self {
        Self { storage }
    }

    #[instrument(name = "Service::todo::add", skip_all)]
    pub async fn add(&self, title: &str, description: &str) -> Result<Todo, StorageError> {
        let todo = self.storage.create(NewTodo::new(title, description)).await?;

        info!(todo_id = %todo.id, "todo added");

        Ok(todo)
    }

    #[instrument(name = "Service::todo::get", skip_all, fields(todo_id = %id))]
    pub async fn get(&self, id: TodoId) -> Result<Todo, StorageError> {
        self.storage.get(id).await
    }

    #[instrument(name = "Service::todo::get_all", skip_all)]
    pub async fn get_all(&self) -> Result<Vec<Todo>, StorageError> {
        let todos = self.storage.get_all().await?;

        info!(count = todos.len(), "get all todos");

        Ok(todos)
    }

    #[instrument(
        name = "Service::todo::update",
        skip_all,
        fields(todo_id = %id,
        title_is_some = patch.title.is_some(),
        description_is_some = patch.description.is_some(),
        completed_is_some = patch.completed.is_some()))
    ]
    pub async fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<Todo, StorageError> {
        info!("update todo");

        self.storage.update(id, patch).await
    }

    #[instrument(name = "Service::todo::delete", skip_all, fields(todo_id = %id))]
    pub async fn delete(&self, id: TodoId) -> Result<(), StorageError> {
        info!("delete todo");

        self.storage.delete(id).await
    }
}
