//! Forecast report builder
//!
//! Renders the text message the bot sends back after the user picks a spot.

use crate::forecast::score::find_best_block;
use crate::forecast::ForecastHour;

/// Build the report for a named spot
///
/// The first hour is treated as "now"; the best 2-hour block over the next
/// day is appended when one exists.
pub fn build_report(place: &str, hours: &[ForecastHour]) -> String {
    let Some(now) = hours.first() else {
        return "No forecast data for this spot.".to_string();
    };

    let mut report = String::new();
    report.push_str(&format!("📍 Spot: {}\n\n", place));
    report.push_str(&format!(
        "💨 Wind: {} m/s ({})\n",
        number(now.wind_speed),
        direction(now.wind_direction)
    ));
    report.push_str(&format!("🌊 Wave: {} m\n", number(now.wave_height)));
    report.push_str(&format!("🌡️ Air: {}°C\n", number(now.air_temperature)));
    report.push_str(&format!("🐚 Water: {}°C", number(now.water_temperature)));

    match find_best_block(hours) {
        Some(block) => {
            report.push_str(&format!(
                "\n\n🕒 Best session: {}–{}\nRating: {:.2}",
                block.start.format("%H:%M"),
                block.end.format("%H:%M"),
                block.score
            ));
        }
        None => {
            report.push_str("\n\n🕒 No rideable window found.");
        }
    }

    report
}

fn number(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => "—".to_string(),
    }
}

fn direction(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}°", v.round() as i64),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_hours() -> Vec<ForecastHour> {
        (0..6)
            .map(|h| {
                let mut hour =
                    ForecastHour::empty(Utc.with_ymd_and_hms(2024, 5, 1, 6 + h, 0, 0).unwrap());
                hour.wind_speed = Some(4.5);
                hour.wind_direction = Some(270.4);
                hour.wave_height = Some(1.2);
                hour.swell_period = Some(11.0);
                hour.air_temperature = Some(21.0);
                hour.water_temperature = Some(18.5);
                hour
            })
            .collect()
    }

    #[test]
    fn test_report_contents() {
        let report = build_report("Praia do Norte, Nazaré", &sample_hours());

        assert!(report.contains("📍 Spot: Praia do Norte, Nazaré"));
        assert!(report.contains("💨 Wind: 4.5 m/s (270°)"));
        assert!(report.contains("🌊 Wave: 1.2 m"));
        assert!(report.contains("🐚 Water: 18.5°C"));
        assert!(report.contains("🕒 Best session: 06:00–07:00"));
        assert!(report.contains("Rating:"));
    }

    #[test]
    fn test_report_missing_values() {
        let hours = vec![ForecastHour::empty(
            Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap(),
        )];
        let report = build_report("Somewhere", &hours);

        assert!(report.contains("💨 Wind: — m/s (—)"));
        assert!(report.contains("🌊 Wave: — m"));
    }

    #[test]
    fn test_report_no_data() {
        assert_eq!(build_report("Nowhere", &[]), "No forecast data for this spot.");
    }
}
