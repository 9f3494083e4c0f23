//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod forecast;
pub mod serve;
pub mod webhook;

use clap::{Parser, Subcommand};

/// Telegram surf-spot picker bot
#[derive(Parser)]
#[command(name = "surfspot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the webhook server (foreground)
    Serve(serve::ServeArgs),

    /// Manage the Telegram webhook registration
    Webhook(webhook::WebhookArgs),

    /// Fetch and print a forecast report for a position
    Forecast(forecast::ForecastArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => serve::run(args).await,
        Commands::Webhook(args) => webhook::run(args).await,
        Commands::Forecast(args) => forecast::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}
