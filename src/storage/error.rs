use strum_macros::AsRefStr;
use thiserror::Error;

#[derive(Error, Debug, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum StorageError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid database url: {0}")]
    InvalidUrl(String),

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StorageError {
    fn from(value: sqlx::Error) -> Self {
        match value {
            sqlx::Error::RowNotFound => {
                tracing::debug!(error = ?value, "Record not found by id");
                Self::NotFound
            }
            _ => {
                tracing::debug!(error = ?value, "Storage error");
                Self::Database(value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn conversion_leaves_error_reporting_to_the_caller() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        let (timed_out, missing) = tracing::subscriber::with_default(subscriber, || {
            (
                StorageError::from(sqlx::Error::PoolTimedOut),
                StorageError::from(sqlx::Error::RowNotFound),
            )
        });

        assert!(matches!(timed_out, StorageError::Database(_)));
        assert!(matches!(missing, StorageError::NotFound));
        assert!(captured.0.lock().unwrap().is_empty());
    }
}
