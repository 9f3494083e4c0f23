//! Update dispatch
//!
//! The bot reacts to exactly two things: /start (reply with the Mini App
//! keyboard) and a Mini App selection (reply with the forecast report).
//! Everything else is ignored.

use crate::config::Config;
use crate::error::Result;
use crate::forecast::forecast_window;
use crate::forecast::report::build_report;
use crate::forecast::stormglass::StormGlassClient;
use crate::geo::nominatim::NominatimBackend;
use crate::geo::{coordinate_label, GeoBackend};
use crate::picker::Selection;
use crate::telegram::types::{Message, ReplyKeyboardMarkup, Update};
use crate::telegram::TelegramClient;
use tracing::warn;

const GREETING: &str = "🌊 Hey surfer!\n\
    I'll help you find the right time and place to paddle out.\n\n\
    📍 Tap \"Map\" to pick a spot.";

/// What an incoming message asks for
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    Start,
    Selection(std::result::Result<Selection, String>),
    Other,
}

/// Classify a message without touching the network
pub fn classify(message: &Message) -> Inbound {
    if let Some(data) = &message.web_app_data {
        return Inbound::Selection(
            serde_json::from_str(&data.data).map_err(|e| e.to_string()),
        );
    }

    match message.text.as_deref() {
        Some(text) if text.split_whitespace().next() == Some("/start") => Inbound::Start,
        _ => Inbound::Other,
    }
}

/// The bot: Telegram client plus the collaborators one selection needs
pub struct Bot {
    telegram: TelegramClient,
    geocoder: NominatimBackend,
    stormglass: StormGlassClient,
    map_url: Option<String>,
    forecast_hours: u32,
}

impl Bot {
    /// Build the bot from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            telegram: TelegramClient::new(config.telegram.token.clone())?,
            geocoder: NominatimBackend::new(),
            stormglass: StormGlassClient::new(config.forecast.api_key.clone()),
            map_url: config.map_url(),
            forecast_hours: config.forecast.hours,
        })
    }

    pub fn telegram(&self) -> &TelegramClient {
        &self.telegram
    }

    /// Handle one webhook update
    pub async fn handle_update(&self, update: Update) -> Result<()> {
        let Some(message) = update.message else {
            return Ok(());
        };
        let chat_id = message.chat.id;

        match classify(&message) {
            Inbound::Start => self.handle_start(chat_id).await,
            Inbound::Selection(Ok(selection)) => self.handle_selection(chat_id, selection).await,
            Inbound::Selection(Err(reason)) => {
                warn!(chat_id, %reason, "Unparsable Mini App payload");
                self.telegram
                    .send_message(chat_id, "Couldn't read those coordinates, try again.")
                    .await
            }
            Inbound::Other => Ok(()),
        }
    }

    async fn handle_start(&self, chat_id: i64) -> Result<()> {
        match &self.map_url {
            Some(url) => {
                self.telegram
                    .send_message_with_keyboard(
                        chat_id,
                        GREETING,
                        ReplyKeyboardMarkup::map_button(url.clone()),
                    )
                    .await
            }
            None => {
                // No public domain configured, the Mini App can't be opened
                self.telegram
                    .send_message(chat_id, "The map isn't available yet, check back soon.")
                    .await
            }
        }
    }

    async fn handle_selection(&self, chat_id: i64, selection: Selection) -> Result<()> {
        self.telegram
            .send_message(chat_id, "🔎 Fetching the forecast and checking conditions…")
            .await?;

        let place = match self
            .geocoder
            .reverse_geocode(selection.lat, selection.lng)
            .await
        {
            Ok(Some(name)) => name,
            Ok(None) => coordinate_label(selection.lat, selection.lng),
            Err(e) => {
                warn!(error = %e, "Reverse geocoding failed");
                coordinate_label(selection.lat, selection.lng)
            }
        };

        let (start, end) = forecast_window(selection.date.as_deref(), self.forecast_hours);
        let hours = match self
            .stormglass
            .fetch(selection.lat, selection.lng, start, end)
            .await
        {
            Ok(hours) => hours,
            Err(e) => {
                warn!(error = %e, "Forecast fetch failed");
                self.telegram
                    .send_message(chat_id, format!("⚠️ Couldn't fetch the forecast: {}", e))
                    .await?;
                return Ok(());
            }
        };

        self.telegram
            .send_message(chat_id, build_report(&place, &hours))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telegram::types::Chat;

    fn message(text: Option<&str>, web_app_data: Option<&str>) -> Message {
        Message {
            message_id: 1,
            chat: Chat { id: 100 },
            text: text.map(str::to_string),
            web_app_data: web_app_data.map(|d| crate::telegram::types::WebAppData {
                data: d.to_string(),
                button_text: None,
            }),
        }
    }

    #[test]
    fn test_classify_start() {
        assert_eq!(classify(&message(Some("/start"), None)), Inbound::Start);
        assert_eq!(classify(&message(Some("/start surf"), None)), Inbound::Start);
    }

    #[test]
    fn test_classify_other_text() {
        assert_eq!(classify(&message(Some("hello"), None)), Inbound::Other);
        assert_eq!(classify(&message(None, None)), Inbound::Other);
    }

    #[test]
    fn test_classify_selection() {
        let inbound = classify(&message(None, Some(r#"{"lat":55,"lng":37}"#)));
        match inbound {
            Inbound::Selection(Ok(selection)) => {
                assert_eq!(selection.lat, 55.0);
                assert_eq!(selection.lng, 37.0);
                assert_eq!(selection.date, None);
            }
            other => panic!("expected selection, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_selection_with_date() {
        let inbound = classify(&message(
            None,
            Some(r#"{"lat":10.1,"lng":20.2,"date":"2024-05-01"}"#),
        ));
        match inbound {
            Inbound::Selection(Ok(selection)) => {
                assert_eq!(selection.date.as_deref(), Some("2024-05-01"));
            }
            other => panic!("expected selection, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_garbage_payload() {
        let inbound = classify(&message(None, Some("surf's up")));
        assert!(matches!(inbound, Inbound::Selection(Err(_))));
    }

    #[test]
    fn test_web_app_data_wins_over_text() {
        // Telegram never sends both, but the data path must take priority
        let inbound = classify(&message(Some("/start"), Some(r#"{"lat":1,"lng":2}"#)));
        assert!(matches!(inbound, Inbound::Selection(Ok(_))));
    }
}
