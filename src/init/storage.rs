use crate::{
    config::StorageKind,
    service::Service,
    storage::{CloseStorage, HealthStorage, PostgresStorage, SqliteStorage, TodoStorage},
    Settings,
};
use std::sync::Arc;

use tracing::{info, instrument};

use super::StartupError;

fn url_scheme(url: &str) -> String {
    url.split(':').next().unwrap_or_default().to_string()
}

#[instrument(name = "init_storage", skip_all)]
pub async fn init_storage(settings: &Settings) -> Result<Service, StartupError> {
    let storage = &settings.storage;

    let kind = StorageKind::from_url(&storage.url)
        .ok_or_else(|| StartupError::UnsupportedStorage(url_scheme(&storage.url)))?;

    info!(
        backend = kind.as_ref(),
        create_schema = storage.create_schema,
        "init storage"
    );

    let service = match kind {
        StorageKind::Sqlite => {
            let sqlite = SqliteStorage::connect(storage)
                .await
                .map_err(StartupError::OpenStorage)?;

            if storage.create_schema {
                sqlite
                    .create_schema()
                    .await
                    .map_err(StartupError::CreateSchema)?;
            }

            let sqlite = Arc::new(sqlite);
            Service::new(
                sqlite.clone() as Arc<dyn TodoStorage>,
                sqlite.clone() as Arc<dyn HealthStorage>,
                sqlite as Arc<dyn CloseStorage>,
            )
        }
        StorageKind::Postgres => {
            let postgres = PostgresStorage::connect(storage).map_err(StartupError::OpenStorage)?;

            if storage.create_schema {
                postgres
                    .create_schema()
                    .await
                    .map_err(StartupError::CreateSchema)?;
            }

            let postgres = Arc::new(postgres);
            Service::new(
                postgres.clone() as Arc<dyn TodoStorage>,
                postgres.clone() as Arc<dyn HealthStorage>,
                postgres as Arc<dyn CloseStorage>,
            )
        }
    };

    Ok(service)
}
