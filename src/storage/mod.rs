mod error;
mod ids;
mod sql;
mod todo;

#[cfg(any(test, feature = "integration_tests"))]
pub use sql::test_util;
pub(crate) use sql::{PostgresStorage, SqliteStorage};

use async_trait::async_trait;
pub use error::StorageError;
pub use ids::TodoId;
pub(crate) use todo::now;
pub use todo::{NewTodo, Todo, UpdateTodo};

/// Each call runs in its own transaction borrowed from the pool and released on return.
#[async_trait]
pub trait TodoStorage: Send + Sync {
    async fn create(&self, todo: NewTodo) -> Result<Todo, StorageError>;
    async fn get(&self, id: TodoId) -> Result<Todo, StorageError>;
    async fn get_all(&self) -> Result<Vec<Todo>, StorageError>;
    async fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<Todo, StorageError>;
    async fn delete(&self, id: TodoId) -> Result<(), StorageError>;
}

#[async_trait]
pub trait HealthStorage: Send + Sync {
    async fn ping(&self) -> Result<(), StorageError>;
}

#[async_trait]
pub trait CloseStorage: Send + Sync {
    async fn close(&self);
}
