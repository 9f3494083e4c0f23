//! StormGlass marine weather client
//!
//! Calls the `weather/point` endpoint and normalizes the per-source values
//! into one number per parameter. Source preference: noaa, sg, gfs, icon,
//! nam; anything else wins only when none of those reported.

use crate::constants::api::STORMGLASS_URL;
use crate::constants::forecast::{PARAMS, SOURCE_PREFERENCE};
use crate::error::{Error, Result};
use crate::forecast::ForecastHour;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// StormGlass API client
#[derive(Debug, Clone)]
pub struct StormGlassClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    hours: Vec<RawHour>,
}

/// One raw hour: a timestamp plus arbitrary parameter objects
#[derive(Debug, Deserialize)]
struct RawHour {
    time: String,
    #[serde(flatten)]
    params: HashMap<String, Value>,
}

impl StormGlassClient {
    /// Create a client; an empty key means unauthenticated requests
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(STORMGLASS_URL, api_key)
    }

    /// Create a client against a specific endpoint (used by tests)
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetch normalized hourly forecast for a position and time window
    pub async fn fetch(
        &self,
        lat: f64,
        lng: f64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ForecastHour>> {
        let mut request = self.client.get(&self.base_url).query(&[
            ("lat", lat.to_string()),
            ("lng", lng.to_string()),
            ("params", PARAMS.join(",")),
            ("start", start.to_rfc3339()),
            ("end", end.to_rfc3339()),
        ]);

        if !self.api_key.is_empty() {
            request = request.header("Authorization", &self.api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Forecast(format!("StormGlass request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Forecast(format!(
                "StormGlass API error {}: {}",
                status, body
            )));
        }

        let raw: RawResponse = response
            .json()
            .await
            .map_err(|e| Error::Forecast(format!("Failed to parse StormGlass response: {}", e)))?;

        Ok(raw.hours.iter().filter_map(normalize_hour).collect())
    }
}

/// Collapse one raw hour into a `ForecastHour`
///
/// Hours with an unparsable timestamp are dropped.
fn normalize_hour(raw: &RawHour) -> Option<ForecastHour> {
    let time = DateTime::parse_from_rfc3339(&raw.time)
        .ok()?
        .with_timezone(&Utc);

    let get = |name: &str| raw.params.get(name).and_then(pick_source);

    Some(ForecastHour {
        time,
        wind_speed: get("windSpeed"),
        wind_direction: get("windDirection"),
        wave_height: get("waveHeight"),
        wave_period: get("wavePeriod"),
        wave_direction: get("waveDirection"),
        swell_height: get("swellHeight"),
        swell_period: get("swellPeriod"),
        swell_direction: get("swellDirection"),
        air_temperature: get("airTemperature"),
        water_temperature: get("waterTemperature"),
    })
}

/// Pick one value out of a per-source object (or accept a bare number)
fn pick_source(value: &Value) -> Option<f64> {
    match value {
        Value::Object(sources) => {
            for preferred in SOURCE_PREFERENCE {
                if let Some(v) = sources.get(preferred).and_then(Value::as_f64) {
                    return Some(v);
                }
            }
            sources.values().find_map(Value::as_f64)
        }
        _ => value.as_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_pick_source_preference_order() {
        let value = json!({"icon": 3.0, "sg": 1.5, "noaa": 1.1});
        assert_relative_eq!(pick_source(&value).unwrap(), 1.1);

        let value = json!({"icon": 3.0, "sg": 1.5});
        assert_relative_eq!(pick_source(&value).unwrap(), 1.5);
    }

    #[test]
    fn test_pick_source_unknown_source() {
        let value = json!({"dwd": 2.25});
        assert_relative_eq!(pick_source(&value).unwrap(), 2.25);
    }

    #[test]
    fn test_pick_source_bare_number_and_null() {
        assert_relative_eq!(pick_source(&json!(7.5)).unwrap(), 7.5);
        assert!(pick_source(&json!(null)).is_none());
    }

    #[test]
    fn test_normalize_hour() {
        let raw: RawHour = serde_json::from_value(json!({
            "time": "2024-05-01T06:00:00+00:00",
            "windSpeed": {"noaa": 4.2, "sg": 5.0},
            "waveHeight": {"sg": 1.4},
            "waterTemperature": {"noaa": 18.3}
        }))
        .unwrap();

        let hour = normalize_hour(&raw).unwrap();
        assert_relative_eq!(hour.wind_speed.unwrap(), 4.2);
        assert_relative_eq!(hour.wave_height.unwrap(), 1.4);
        assert_relative_eq!(hour.water_temperature.unwrap(), 18.3);
        assert!(hour.swell_period.is_none());
    }

    #[test]
    fn test_normalize_hour_bad_time_dropped() {
        let raw: RawHour = serde_json::from_value(json!({
            "time": "not-a-timestamp",
            "windSpeed": {"noaa": 4.2}
        }))
        .unwrap();

        assert!(normalize_hour(&raw).is_none());
    }

    #[test]
    fn test_parse_full_response() {
        let body = json!({
            "hours": [
                {"time": "2024-05-01T06:00:00+00:00", "waveHeight": {"noaa": 1.2}},
                {"time": "2024-05-01T07:00:00+00:00", "waveHeight": {"noaa": 1.3}}
            ],
            "meta": {"cost": 1}
        });

        let raw: RawResponse = serde_json::from_value(body).unwrap();
        let hours: Vec<_> = raw.hours.iter().filter_map(normalize_hour).collect();
        assert_eq!(hours.len(), 2);
        assert_relative_eq!(hours[1].wave_height.unwrap(), 1.3);
    }
}
