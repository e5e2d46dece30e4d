use tracing::info;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

use crate::config::Settings;
use crate::utils::APP_NAME;

use super::StartupError;

/// Installs the global subscriber: JSON lines when `telemetry.json_logs` is set,
/// compact text otherwise. `RUST_LOG` takes precedence over `telemetry.log_filter`.
pub fn init_tracing(settings: &Settings) -> Result<(), StartupError> {
    LogTracer::init()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.telemetry.log_filter));

    let subscriber = Registry::default().with(filter);

    if settings.telemetry.json_logs {
        let fmt_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_target(true);
        tracing::subscriber::set_global_default(subscriber.with(fmt_layer))?;
    } else {
        let fmt_layer = fmt::layer()
            .with_level(true)
            .with_target(true)
            .with_thread_ids(settings.debug)
            .with_file(settings.debug)
            .with_line_number(settings.debug)
            .compact();
        tracing::subscriber::set_global_default(subscriber.with(fmt_layer))?;
    }

    info!(app = APP_NAME, profile = %settings.profile, "tracing initialized");

    Ok(())
}
