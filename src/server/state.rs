//! Server shared state
//!
//! Holds configuration and the bot for the webhook handler.

use crate::config::Config;
use crate::error::Result;
use crate::telegram::handlers::Bot;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// The bot handling webhook updates
    pub bot: Bot,
}

impl AppState {
    /// Create new application state
    ///
    /// Fails when no bot token is configured.
    pub fn new(config: Config) -> Result<Self> {
        let bot = Bot::from_config(&config)?;
        Ok(Self { config, bot })
    }
}
