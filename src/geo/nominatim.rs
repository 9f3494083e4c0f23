//! Nominatim reverse geocoding backend (OpenStreetMap)
//!
//! Uses the free Nominatim API.
//! Rate limit: 1 request per second (enforced by User-Agent requirement)

use crate::constants::api::NOMINATIM_URL;
use crate::error::{Error, Result};
use crate::geo::GeoBackend;
use serde::Deserialize;

const USER_AGENT: &str = "surfspot/0.1.0";

/// Nominatim reverse geocoding backend
#[derive(Debug, Clone)]
pub struct NominatimBackend {
    client: reqwest::Client,
    base_url: String,
}

/// Nominatim reverse response
///
/// Only the display name is consumed; errors come back as an "error" field
/// with HTTP 200 on some deployments, so both are optional.
#[derive(Debug, Deserialize)]
struct NominatimResult {
    display_name: Option<String>,
    error: Option<String>,
}

impl NominatimBackend {
    /// Create a new Nominatim backend
    pub fn new() -> Self {
        Self::with_base_url(NOMINATIM_URL)
    }

    /// Create a backend against a specific endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl Default for NominatimBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoBackend for NominatimBackend {
    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Option<String>> {
        let url = format!("{}/reverse", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lng.to_string()),
                ("format", "json".to_string()),
            ])
            .send()
            .await
            .map_err(|e| Error::Geocoding(format!("Nominatim request failed: {}", e)))?;

        if !response.status().is_success() {
            if response.status() == reqwest::StatusCode::NOT_FOUND {
                return Ok(None);
            }
            return Err(Error::Geocoding(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let result: NominatimResult = response
            .json()
            .await
            .map_err(|e| Error::Geocoding(format!("Failed to parse Nominatim response: {}", e)))?;

        if result.error.is_some() {
            // "Unable to geocode" for positions out at sea
            return Ok(None);
        }

        Ok(result.display_name)
    }
}
