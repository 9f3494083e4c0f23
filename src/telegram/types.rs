//! Bot API payload types
//!
//! Only the fields this bot reads or sends; Telegram's many other fields
//! deserialize into nothing.

use serde::{Deserialize, Serialize};

/// An incoming update delivered to the webhook
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

/// A chat message
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
    pub web_app_data: Option<WebAppData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// Data sent back from a Mini App via `sendData`
#[derive(Debug, Clone, Deserialize)]
pub struct WebAppData {
    pub data: String,
    pub button_text: Option<String>,
}

/// Outgoing sendMessage request
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage {
    pub chat_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyKeyboardMarkup>,
}

/// A custom reply keyboard
#[derive(Debug, Clone, Serialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    pub resize_keyboard: bool,
}

/// One keyboard button, optionally opening a Mini App
#[derive(Debug, Clone, Serialize)]
pub struct KeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebAppInfo {
    pub url: String,
}

impl ReplyKeyboardMarkup {
    /// Single-button keyboard opening the given Mini App URL
    pub fn map_button(url: impl Into<String>) -> Self {
        Self {
            keyboard: vec![vec![KeyboardButton {
                text: "🗺️ Map".to_string(),
                web_app: Some(WebAppInfo { url: url.into() }),
            }]],
            resize_keyboard: true,
        }
    }
}
