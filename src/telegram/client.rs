//! Bot API HTTP client
//!
//! Thin reqwest wrapper over the three methods the bot needs. Every call
//! goes through the ok/description envelope Telegram wraps responses in.

use crate::constants::api::TELEGRAM_URL;
use crate::error::{Error, Result};
use crate::telegram::types::{ReplyKeyboardMarkup, SendMessage};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Telegram Bot API client
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

/// Standard Bot API response envelope
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    result: Option<T>,
    description: Option<String>,
}

impl TelegramClient {
    /// Create a client for the given bot token
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::Config(
                "telegram.token is not set (config or BOT_TOKEN)".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Telegram(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: TELEGRAM_URL.to_string(),
            token,
        })
    }

    /// Point the client at a different API host (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// Call a Bot API method with a JSON body
    async fn call<T: DeserializeOwned>(&self, method: &str, body: &Value) -> Result<T> {
        let response = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Telegram(format!("{} request failed: {}", method, e)))?;

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| Error::Telegram(format!("Failed to parse {} response: {}", method, e)))?;

        if !envelope.ok {
            let description = envelope
                .description
                .unwrap_or_else(|| "Unknown error".to_string());
            return Err(Error::Telegram(format!("{}: {}", method, description)));
        }

        envelope
            .result
            .ok_or_else(|| Error::Telegram(format!("{}: empty result", method)))
    }

    /// Send a plain text message
    pub async fn send_message(&self, chat_id: i64, text: impl Into<String>) -> Result<()> {
        self.send(SendMessage {
            chat_id,
            text: text.into(),
            reply_markup: None,
        })
        .await
    }

    /// Send a message with a reply keyboard
    pub async fn send_message_with_keyboard(
        &self,
        chat_id: i64,
        text: impl Into<String>,
        markup: ReplyKeyboardMarkup,
    ) -> Result<()> {
        self.send(SendMessage {
            chat_id,
            text: text.into(),
            reply_markup: Some(markup),
        })
        .await
    }

    async fn send(&self, message: SendMessage) -> Result<()> {
        let body = serde_json::to_value(&message)?;
        let _: Value = self.call("sendMessage", &body).await?;
        Ok(())
    }

    /// Register the webhook URL with Telegram
    pub async fn set_webhook(&self, url: &str) -> Result<()> {
        let body = serde_json::json!({ "url": url });
        let _: Value = self.call("setWebhook", &body).await?;
        Ok(())
    }

    /// Remove the registered webhook
    pub async fn delete_webhook(&self) -> Result<()> {
        let body = serde_json::json!({});
        let _: Value = self.call("deleteWebhook", &body).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_rejected() {
        assert!(TelegramClient::new("").is_err());
    }

    #[test]
    fn test_method_url() {
        let client = TelegramClient::new("123:abc").unwrap();
        assert_eq!(
            client.method_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_envelope_error_parsing() {
        let json = r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#;
        let envelope: ApiResponse<Value> = serde_json::from_str(json).unwrap();
        assert!(!envelope.ok);
        assert_eq!(envelope.description.as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn test_envelope_ok_parsing() {
        let json = r#"{"ok":true,"result":{"message_id":5}}"#;
        let envelope: ApiResponse<Value> = serde_json::from_str(json).unwrap();
        assert!(envelope.ok);
        assert_eq!(envelope.result.unwrap()["message_id"], 5);
    }
}
