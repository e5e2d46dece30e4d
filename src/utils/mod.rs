pub(crate) mod root_span;

pub(crate) const APP_NAME: &str = "todo_service";
pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) const RUN_MODE: &str = "RUN_MODE";
pub(crate) const DATABASE_URL: &str = "DATABASE_URL";
pub(crate) const SECRET_KEY: &str = "SECRET_KEY";
pub(crate) const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";
pub(crate) const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";

pub(crate) use root_span::RootSpan;

#[macro_export]
macro_rules! trace_err {
    ($expr:expr, $($arg:tt)*) => {
        $expr.map_err(|e| {
            ::tracing::error!(%e, $($arg)*);
            e
        })
    };
}
