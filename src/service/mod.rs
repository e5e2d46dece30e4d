pub(crate) mod todo;

use std::sync::Arc;

use todo::ServiceTodoRef;
use tracing::{info, instrument};

use crate::storage::{CloseStorage, HealthStorage, StorageError, TodoStorage};

#[derive(Clone)]
pub struct Service {
    todo_storage: Arc<dyn TodoStorage>,
    health_storage: Arc<dyn HealthStorage>,
    close_storage: Arc<dyn CloseStorage>,
}

impl Service {
    #[instrument(name = "Service::new", skip_all)]
    pub fn new(
        todo_storage: Arc<dyn TodoStorage>,
        health_storage: Arc<dyn HealthStorage>,
        close_storage: Arc<dyn CloseStorage>,
    ) -> Self {
        Self {
            todo_storage,
            health_storage,
            close_storage,
        }
    }

    pub fn todo(&self) -> ServiceTodoRef {
        ServiceTodoRef::new(self.todo_storage.clone())
    }

    #[instrument(name = "Service::check_health", skip_all)]
    pub async fn check_health(&self) -> Result<(), StorageError> {
        self.health_storage.ping().await
    }

    pub async fn close_storage(&self) {
        self.close_storage.close().await;
        info!("storage closed");
    }
}
