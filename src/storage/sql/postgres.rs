use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use tracing::{info, instrument};

use super::acquire_timeout;
use crate::{
    config::StorageSettings,
    storage::{
        now, CloseStorage, HealthStorage, NewTodo, StorageError, Todo, TodoId, TodoStorage,
        UpdateTodo,
    },
};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS todos (
    id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    completed BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)";

pub(crate) struct PostgresStorage {
    pool: PgPool,
}

impl PostgresStorage {
    /// Connections are opened on first use, so an unreachable server shows up in the
    /// health check instead of aborting startup.
    #[instrument(name = "PostgresStorage::connect", skip_all)]
    pub fn connect(settings: &StorageSettings) -> Result<Self, StorageError> {
        let options = PgConnectOptions::from_str(&settings.url)
            .map_err(|e| StorageError::InvalidUrl(e.to_string()))?;

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(acquire_timeout(settings))
            .connect_lazy_with(options);

        info!(max_connections = settings.max_connections, "postgres pool configured");

        Ok(Self { pool })
    }

    #[instrument(name = "PostgresStorage::create_schema", skip_all)]
    pub async fn create_schema(&self) -> Result<(), StorageError> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl TodoStorage for PostgresStorage {
    #[instrument(name = "PostgresStorage::create", skip_all)]
    async fn create(&self, todo: NewTodo) -> Result<Todo, StorageError> {
        let mut tx = self.pool.begin().await?;

        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (title, description, completed, created_at, updated_at)
             VALUES ($1, $2, FALSE, $3, $3)
             RETURNING id, title, description, completed, created_at, updated_at",
        )
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(todo_id = %todo.id, "todo inserted");

        Ok(todo)
    }

    #[instrument(name = "PostgresStorage::get", skip_all, fields(todo_id = %id))]
    async fn get(&self, id: TodoId) -> Result<Todo, StorageError> {
        sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, completed, created_at, updated_at
             FROM todos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    #[instrument(name = "PostgresStorage::get_all", skip_all)]
    async fn get_all(&self) -> Result<Vec<Todo>, StorageError> {
        let todos = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, completed, created_at, updated_at
             FROM todos ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(todos)
    }

    #[instrument(name = "PostgresStorage::update", skip_all, fields(todo_id = %id))]
    async fn update(&self, id: TodoId, patch: UpdateTodo) -> Result<Todo, StorageError> {
        let mut tx = self.pool.begin().await?;

        let mut todo = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, completed, created_at, updated_at
             FROM todos WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        todo.apply(&patch, now());

        sqlx::query(
            "UPDATE todos SET title = $1, description = $2, completed = $3, updated_at = $4
             WHERE id = $5",
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

    #[instrument(name = "PostgresStorage::delete", skip_all, fields(todo_id = %id))]
    async fn delete(&self, id: TodoId) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM todos WHERE id = $1")
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
impl HealthStorage for PostgresStorage {
    #[instrument(name = "PostgresStorage::ping", skip_all)]
    async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CloseStorage for PostgresStorage {
    #[instrument(name = "PostgresStorage::close", skip_all)]
    async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sql::test_util::in_memory_settings;

    fn settings(url: &str) -> StorageSettings {
        StorageSettings {
            url: url.to_string(),
            ..in_memory_settings()
        }
    }

    #[tokio::test]
    async fn connect_accepts_both_schemes_without_a_server() {
        assert!(PostgresStorage::connect(&settings("postgres://u:p@localhost:1/db")).is_ok());
        assert!(PostgresStorage::connect(&settings("postgresql://u:p@localhost:1/db")).is_ok());
    }

    #[tokio::test]
    async fn unreachable_server_fails_ping() {
        let mut settings = settings("postgresql://u:p@127.0.0.1:1/db");
        settings.acquire_timeout_sec = 1;
        let storage = PostgresStorage::connect(&settings).unwrap();

        assert!(matches!(
            storage.ping().await,
            Err(StorageError::Database(_))
        ));
    }
}
