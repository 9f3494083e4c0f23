//! HTTP server for surfspot
//!
//! Serves the Mini App and receives Telegram webhook updates.

pub mod routes;
pub mod state;

use crate::config::Config;
use crate::error::Result;
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Start the HTTP server
///
/// Registers the webhook with Telegram when a public domain is configured,
/// then serves until shut down.
pub async fn run(config: Config) -> Result<()> {
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| crate::error::Error::Server(format!("Invalid server address: {}", e)))?;

    let state = Arc::new(AppState::new(config)?);

    match state.config.webhook_url() {
        Some(url) => {
            state.bot.telegram().set_webhook(&url).await?;
            info!("Webhook registered at {}", url);
        }
        None => {
            warn!("telegram.domain not set, skipping webhook registration");
        }
    }

    let app = create_router(state);

    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| crate::error::Error::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| crate::error::Error::Server(format!("Server error: {}", e)))?;

    Ok(())
}
