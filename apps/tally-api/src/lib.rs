//! # Tally API
//!
//! HTTP server that accepts receipts and reports their points.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally API Server                               │
//! │                                                                         │
//! │  ┌────────────────────────┐   ┌────────────────────────────────────┐   │
//! │  │  Routes (axum)         │   │  AppState                          │   │
//! │  │                        │   │                                    │   │
//! │  │ GET  /                 │   │ • store: Arc<dyn ReceiptStore>     │   │
//! │  │ GET  /health           │──►│ • ids:   Arc<dyn IdGenerator>      │   │
//! │  │ POST /receipts/process │   │                                    │   │
//! │  │ GET  /receipts/{id}/   │   └────────────────────────────────────┘   │
//! │  │        points          │                                            │
//! │  └────────────────────────┘   validation + rules from tally-core       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `TALLY_BIND_ADDR` - Listen address (default: 0.0.0.0)
//! - `TALLY_PORT` - HTTP port (default: 8080)
//! - `TALLY_MAX_BODY_BYTES` - Request body limit (default: 65536)
//! - `TALLY_LOG` / `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod error;
pub mod ids;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{error, info};

// Re-exports
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use ids::{IdGenerator, RandomIds};
pub use state::AppState;

/// Builds the application router.
pub fn router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/health", get(routes::health))
        .route("/receipts/process", post(routes::process_receipt))
        .route("/receipts/{id}/points", get(routes::receipt_points))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl+C / SIGTERM.
pub async fn serve(config: &ApiConfig, state: AppState) -> std::io::Result<()> {
    let app = router(state, config.max_body_bytes);

    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Tally API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
