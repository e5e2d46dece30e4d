use std::net::SocketAddr;

use todo_service::{Settings, StartupError};

use thiserror::Error;
use tokio::net::TcpListener;
#[cfg(unix)]
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

#[derive(Debug, Error)]
enum RoutingAppError {
    #[error("Startup error")]
    Startup(#[from] StartupError),

    #[error("Io error")]
    Io(#[from] std::io::Error),
}

fn main() -> Result<(), RoutingAppError> {
    let settings = Settings::new()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(settings.worker_threads())
        .enable_all()
        .build()?;

    runtime.block_on(async_main(settings))
}

#[cfg(unix)]
async fn shutdown_signal() {
    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(sigterm) => sigterm,
        Err(e) => {
            tracing::error!(error = %e, "failed to bind to SIGTERM");
            let _ = signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("SIGINT received.");
        },
        _ = sigterm.recv() => {
            info!("SIGTERM received.");
        },
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn async_main(settings: Settings) -> Result<(), RoutingAppError> {
    todo_service::init_tracing(&settings)?;

    let server_addr = settings.server_addr();
    let (app, service) = todo_service::init_app(settings).await?;

    let listener = TcpListener::bind(&server_addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    service.close_storage().await;

    Ok(())
}
