#![allow(dead_code)]
use std::sync::Arc;

use async_trait::async_trait;

use super::SqliteStorage;
use crate::{
    config::StorageSettings,
    storage::{
        CloseStorage, HealthStorage, NewTodo, StorageError, Todo, TodoId, TodoStorage, UpdateTodo,
    },
};

pub fn in_memory_settings() -> StorageSettings {
    StorageSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        acquire_timeout_sec: 5,
        create_schema: true,
    }
}

/// One in-memory database seen through every storage trait.
#[derive(Clone)]
pub struct TestStorage {
    pub todo: Arc<dyn TodoStorage>,
    pub health: Arc<dyn HealthStorage>,
    pub close: Arc<dyn CloseStorage>,
}

pub struct TestStorageBuilder {
    todos: Vec<NewTodo>,
}

impl Default for TestStorageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStorageBuilder {
    pub fn new() -> Self {
        Self { todos: Vec::new() }
    }

    pub fn with_todos(mut self, count: usize) -> Self {
        self.todos = (0..count)
            .map(|i| NewTodo::new(format!("todo {i}"), format!("description {i}")))
            .collect();
        self
    }

    pub async fn build(self) -> TestStorage {
        let storage = SqliteStorage::connect(&in_memory_settings()).await.unwrap();
        storage.create_schema().await.unwrap();

        for todo in self.todos {
            storage.create(todo).await.unwrap();
        }

        let storage = Arc::new(storage);
        TestStorage {
            todo: storage.clone() as Arc<dyn TodoStorage>,
            health: storage.clone() as Arc<dyn HealthStorage>,
            close: storage as Arc<dyn CloseStorage>,
        }
    }
}

/// Fails every operation the way an unreachable database would.
#[derive(Clone, Default)]
pub struct FailingStorage;

impl FailingStorage {
    pub fn storage() -> TestStorage {
        let storage = Arc::new(FailingStorage);
        TestStorage {
            todo: storage.clone() as Arc<dyn TodoStorage>,
            health: storage.clone() as Arc<dyn HealthStorage>,
            close: storage as Arc<dyn CloseStorage>,
        }
    }

    fn error() -> StorageError {
        StorageError::Database(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait]
impl TodoStorage for FailingStorage {
    async fn create(&self, _todo: NewTodo) -> Result<Todo, StorageError> {
        Err(Self::error())
    }

    async fn get(&self, _id: TodoId) -> Result<Todo, StorageError> {
        Err(Self::error())
    }

    async fn get_all(&self) -> Result<Vec<Todo>, StorageError> {
        Err(Self::error())
    }

    async fn update(&self, _id: TodoId, _patch: UpdateTodo) -> Result<Todo, StorageError> {
        Err(Self::error())
    }

    async fn delete(&self, _id: TodoId) -> Result<(), StorageError> {
        Err(Self::error())
    }
}

#[async_trait]
impl HealthStorage for FailingStorage {
    async fn ping(&self) -> Result<(), StorageError> {
        Err(Self::error())
    }
}

#[async_trait]
impl CloseStorage for FailingStorage {
    async fn close(&self) {}
}
