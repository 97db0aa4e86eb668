use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use filedrop_core::{
    CoreConfig, DEFAULT_LISTEN_ADDR, UploadService,
    config::{max_upload_bytes_from_env_value, storage_dir_from_env_value},
};

/// Main entry point for the filedrop service
///
/// Resolves configuration once, creates the storage directory, and serves the REST API until
/// interrupted with Ctrl-C.
///
/// # Environment Variables
/// - `FILEDROP_ADDR`: listen address (default: "127.0.0.1:5000")
/// - `FILEDROP_STORAGE_DIR`: storage directory (default: "uploads")
/// - `FILEDROP_MAX_UPLOAD_BYTES`: upload body limit in bytes (default: 100 MiB)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - configuration values are invalid,
/// - the storage directory cannot be created,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(log_filter()?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = std::env::var("FILEDROP_ADDR")
        .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.into())
        .parse()?;

    let cfg = CoreConfig::new(
        storage_dir_from_env_value(std::env::var("FILEDROP_STORAGE_DIR").ok()),
        max_upload_bytes_from_env_value(std::env::var("FILEDROP_MAX_UPLOAD_BYTES").ok())?,
    )?;

    let upload_service = UploadService::new(&cfg)?;
    tracing::info!(
        "++ Storing uploads in {}",
        upload_service.storage_dir().display()
    );

    let app = router(AppState::new(upload_service, cfg.max_upload_bytes()));

    tracing::info!("++ Starting filedrop REST on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- filedrop stopped");
    Ok(())
}

/// `RUST_LOG` plus the crate defaults; `tower_http=debug` surfaces the `TraceLayer` request spans.
fn log_filter() -> anyhow::Result<EnvFilter> {
    Ok(EnvFilter::from_default_env()
        .add_directive("filedrop_run=info".parse()?)
        .add_directive("filedrop_core=info".parse()?)
        .add_directive("api_rest=info".parse()?)
        .add_directive("tower_http=debug".parse()?))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
