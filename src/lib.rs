//! surfspot: Telegram Mini App surf-spot picker
//!
//! A library and CLI tool behind a Telegram bot that lets users pick a surf
//! location on a map (as a Mini App) and replies with a marine forecast.
//!
//! ## Features
//!
//! - Map picker core: one draggable marker, geolocation, host-bridge handoff
//! - Webhook server (axum) that also serves the Mini App assets
//! - Minimal Telegram Bot API client (sendMessage, webhooks, keyboards)
//! - Nominatim reverse geocoding
//! - StormGlass marine forecasts with a surfability score
//!
//! ## Quick Start
//!
//! ```rust
//! use surfspot::picker::bridge::StandaloneBridge;
//! use surfspot::picker::location::Unavailable;
//! use surfspot::picker::widget::MapPicker;
//! use surfspot::picker::Coordinates;
//!
//! let mut picker = MapPicker::new(StandaloneBridge::new(), Unavailable);
//! picker.map_clicked(Coordinates::new(43.3, -1.97)); // Biarritz-ish
//! assert_eq!(picker.readout(), "43.30000, -1.97000");
//!
//! // No host bridge: the selection falls back to a user-visible alert
//! picker.choose(Some("2024-05-01")).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod forecast;
pub mod geo;
pub mod picker;
pub mod server;
pub mod telegram;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use picker::{Coordinates, Selection};
