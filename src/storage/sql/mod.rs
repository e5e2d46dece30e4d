mod postgres;
mod sqlite;

#[cfg(any(test, feature = "integration_tests"))]
pub mod test_util;

pub(crate) use postgres::PostgresStorage;
pub(crate) use sqlite::SqliteStorage;

use std::time::Duration;

use crate::config::StorageSettings;

fn acquire_timeout(settings: &StorageSettings) -> Duration {
    Duration::from_secs(settings.acquire_timeout_sec)
}
