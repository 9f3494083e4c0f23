//! Webhook command handler
//!
//! Registers or removes the bot's webhook without starting the server,
//! for deployments where the server process doesn't own the registration.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::telegram::TelegramClient;
use clap::{Args, Subcommand};

/// Webhook command arguments
#[derive(Args)]
pub struct WebhookArgs {
    #[command(subcommand)]
    pub action: WebhookAction,
}

#[derive(Subcommand)]
pub enum WebhookAction {
    /// Register the webhook URL with Telegram
    Set {
        /// Override the URL (defaults to "{telegram.domain}{telegram.webhook_path}")
        #[arg(long)]
        url: Option<String>,
    },

    /// Remove the registered webhook
    Delete,
}

/// Run the webhook command
pub async fn run(args: WebhookArgs) -> Result<()> {
    let config = Config::load()?;
    let client = TelegramClient::new(config.telegram.token.clone())?;

    match args.action {
        WebhookAction::Set { url } => {
            let url = match url.or_else(|| config.webhook_url()) {
                Some(url) => url,
                None => {
                    return Err(Error::Config(
                        "No webhook URL: set telegram.domain or pass --url".to_string(),
                    ));
                }
            };

            client.set_webhook(&url).await?;
            println!("✅ Webhook registered: {}", url);
        }

        WebhookAction::Delete => {
            client.delete_webhook().await?;
            println!("Webhook removed");
        }
    }

    Ok(())
}
