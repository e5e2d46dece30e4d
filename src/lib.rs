mod app;
mod config;
pub(crate) mod handlers;
mod init;
pub(crate) mod middleware;
pub(crate) mod service;
pub(crate) mod storage;
pub(crate) mod utils;

mod docs;

pub use app::build_app;
pub use config::{Profile, Settings};
pub use handlers::error::AppError;
pub use init::{init_tracing, StartupError};
pub use service::Service;

use axum::Router;

#[cfg(feature = "integration_tests")]
pub use init::init_storage;

#[cfg(feature = "integration_tests")]
pub use storage::{NewTodo, StorageError, Todo, TodoId, TodoStorage, UpdateTodo};

#[cfg(feature = "integration_tests")]
pub use storage::test_util::{FailingStorage, TestStorage, TestStorageBuilder};

#[cfg(feature = "integration_tests")]
pub use handlers::types::{
    DeleteResponse, ErrorResponse, HealthResponse, TodoListResponse, TodoResponse, TodoView,
};

use tracing::{info, instrument, warn};

#[instrument(name = "init_app", skip_all)]
pub async fn init_app(settings: Settings) -> Result<(Router, Service), StartupError> {
    info!(
        profile = %settings.profile(),
        debug = settings.debug(),
        addr = %settings.server_addr(),
        "init_app with settings"
    );

    if settings.profile() == Profile::Production && settings.uses_default_secret() {
        warn!("SECRET_KEY is not set, the development default is in use");
    }

    let service = init::init_storage(&settings).await?;

    Ok((app::build_app(service.clone()), service))
}

/// Resolves `profile` and builds the application for it.
pub async fn create_app(profile: Profile) -> Result<(Router, Service), StartupError> {
    init_app(Settings::resolve(profile)?).await
}
