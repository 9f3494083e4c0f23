//! Telegram Bot API integration
//!
//! A minimal client for the handful of Bot API methods the bot uses, the
//! serde subset of update payloads it consumes, and the update dispatch
//! logic (/start keyboard, Mini App selection handling).

pub mod client;
pub mod handlers;
pub mod types;

pub use client::TelegramClient;
pub use types::{Message, Update};
