use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tracing::{info, instrument};

use super::acquire_timeout;
use crate::{
    config::StorageSettings,
    storage::{
        now, CloseStorage, HealthStorage, NewTodo, StorageError, Todo, TodoId, TodoStorage,
        UpdateTodo,
    },
    trace_err,
};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

pub(crate) struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    #[instrument(name = "SqliteStorage::connect", skip_all, fields(in_memory = settings.is_in_memory()))]
    pub async fn connect(settings: &StorageSettings) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(&settings.url)
            .map_err(|e| StorageError::InvalidUrl(e.to_string()))?
            .create_if_missing(true);

        let pool_options = SqlitePoolOptions::new().acquire_timeout(acquire_timeout(settings));

        // every connection to `:memory:` opens its own empty database
        let pool_options = if settings.is_in_memory() {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(settings.max_connections)
        };

        let pool = trace_err!(
            pool_options.connect_with(options).await,
            "failed to open sqlite pool"
        )?;

        info!("sqlite pool opened");

        Ok(Self { pool })
    }

    #[instrument(name = "SqliteStorage::create_schema", skip_all)]
    pub async fn create_schema(&self) -> Result<(), StorageError> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl TodoStorage for SqliteStorage {
    #[instrument(name = "SqliteStorage::create", skip_all)]
    async fn create(&self, todo: NewTodo) -> Result<Todo, StorageError> {
        let mut tx = self.pool.begin().await?;

        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (title, description, completed, created_at, updated_at)
             VALUES (?, ?, FALSE, ?, ?)
             RETURNING id, title, description, completed, created_at, updated_at",
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.created_at)
        .bind(todo.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(todo_id = %todo.id, "todo inserted");

        Ok(todo)
    }

    #[instrument(name = "SqliteStorage::get", skip_all, fields(todo_id = %id))]
    async fn get(&self, id: TodoId) -> Result<Todo, StorageError> {
        sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, completed, created_at, updated_at
             FROM todos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    #[instrument(name = "SqliteStorage::get_all", skip_all)]
    async fn get_all(&self) -> Result<Vec<Todo>, StorageError> {
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, completed, created_at, updated_at
             FROM todos ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    #[instrument(name = "SqliteStorage::update", skip_all, fields(todo_id = %id))]
    async fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<Todo, StorageError> {
        let mut tx = self.pool.begin().await?;

        let mut todo = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, completed, created_at, updated_at
             FROM todos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        todo.apply(&patch, now());

        sqlx::query(
            "UPDATE todos SET title = ?, description = ?, completed = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .bind(todo.updated_at)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(todo)
    }

    #[instrument(name = "SqliteStorage::delete", skip_all, fields(todo_id = %id))]
    async fn delete(&self, id: TodoId) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            return Err(StorageError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[async_trait]
impl HealthStorage for SqliteStorage {
    #[instrument(name = "SqliteStorage::ping", skip_all)]
    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CloseStorage for SqliteStorage {
    #[instrument(name = "SqliteStorage::close", skip_all)]
    async fn close(&self) {
        self.pool.close().await;
    }
}
