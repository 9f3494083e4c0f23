//! Marine forecast pipeline
//!
//! Fetches hourly marine weather from StormGlass, scores each hour for
//! surfability and renders the report the bot replies with.

pub mod report;
pub mod score;
pub mod stormglass;

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// One normalized forecast hour
///
/// StormGlass reports each parameter per source; after normalization every
/// field is a single value (or None when no source had one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastHour {
    pub time: DateTime<Utc>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<f64>,
    pub wave_height: Option<f64>,
    pub wave_period: Option<f64>,
    pub wave_direction: Option<f64>,
    pub swell_height: Option<f64>,
    pub swell_period: Option<f64>,
    pub swell_direction: Option<f64>,
    pub air_temperature: Option<f64>,
    pub water_temperature: Option<f64>,
}

impl ForecastHour {
    /// An hour with every parameter missing
    pub fn empty(time: DateTime<Utc>) -> Self {
        Self {
            time,
            wind_speed: None,
            wind_direction: None,
            wave_height: None,
            wave_period: None,
            wave_direction: None,
            swell_height: None,
            swell_period: None,
            swell_direction: None,
            air_temperature: None,
            water_temperature: None,
        }
    }
}

/// Forecast window: start at the requested date's midnight UTC, or at the
/// current hour when no date was picked
pub fn forecast_window(date: Option<&str>, hours: u32) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|| {
            let now = Utc::now();
            now.with_minute(0)
                .and_then(|t| t.with_second(0))
                .and_then(|t| t.with_nanosecond(0))
                .unwrap_or(now)
        });

    (start, start + Duration::hours(hours as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_window_from_date() {
        let (start, end) = forecast_window(Some("2024-05-01"), 24);
        assert_eq!(start.year(), 2024);
        assert_eq!(start.month(), 5);
        assert_eq!(start.day(), 1);
        assert_eq!(start.hour(), 0);
        assert_eq!(end - start, Duration::hours(24));
    }

    #[test]
    fn test_window_without_date_starts_on_the_hour() {
        let (start, end) = forecast_window(None, 12);
        assert_eq!(start.minute(), 0);
        assert_eq!(start.second(), 0);
        assert_eq!(end - start, Duration::hours(12));
    }

    #[test]
    fn test_window_bad_date_falls_back_to_now() {
        let (start, _) = forecast_window(Some("yesterday"), 24);
        assert!((Utc::now() - start) < Duration::hours(2));
    }
}
