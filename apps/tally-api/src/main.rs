//! # Tally API
//!
//! Receipt processing server.
//!
//! ```text
//! Client ───► HTTP (8080) ───► tally-core ───► tally-store
//! ```

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tally_api::{ApiConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::load().context("Failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("Invalid log filter '{}'", config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!(
        addr = %config.bind_address(),
        max_body_bytes = config.max_body_bytes,
        "Starting Tally API server..."
    );

    tally_api::serve(&config, AppState::in_memory())
        .await
        .context("Server error")?;

    Ok(())
}
