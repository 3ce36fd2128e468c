//! Binary entry point: serves the fee engine API over HTTP.
//!
//! `FEE_SCHEDULE_DIR` points at the schedule directory (default
//! `./config/ksa`) and `FEE_ENGINE_ADDR` sets the bind address (default
//! `127.0.0.1:3000`). Log verbosity follows `RUST_LOG`.

use gov_fee_engine::api::{create_router, AppState};
use gov_fee_engine::config::ConfigLoader;

const DEFAULT_SCHEDULE_DIR: &str = "./config/ksa";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let schedule_dir =
        std::env::var("FEE_SCHEDULE_DIR").unwrap_or_else(|_| DEFAULT_SCHEDULE_DIR.to_string());
    let addr = std::env::var("FEE_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = ConfigLoader::load(&schedule_dir).map_err(|e| {
        tracing::error!("Failed to load fee schedules from {}: {e}", schedule_dir);
        e
    })?;
    tracing::info!(
        authority = %config.authority().code,
        version = %config.authority().version,
        schedules = config.config().schedules().len(),
        "Fee schedules loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Fee engine listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
