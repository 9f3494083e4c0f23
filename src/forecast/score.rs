//! Surfability scoring heuristic
//!
//! Prefers wave heights around 1.2 m, low wind and a long swell period.
//! Scores feed the best-block search that picks the session window shown in
//! the report.

use crate::constants::forecast::{BEST_BLOCK_HOURS, BEST_BLOCK_WINDOW};
use crate::forecast::ForecastHour;
use chrono::{DateTime, Utc};

/// The best-scoring contiguous block of hours
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestBlock {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub score: f64,
}

/// Score a single hour
///
/// Missing data is punished: no wave reads as flat, no wind reads as a
/// blown-out 999 m/s. Swell period falls back to wave period.
pub fn score_hour(hour: &ForecastHour) -> f64 {
    let wave = hour.wave_height.unwrap_or(0.0);
    let wind = hour.wind_speed.unwrap_or(999.0);
    let period = hour
        .swell_period
        .filter(|p| *p != 0.0)
        .or(hour.wave_period)
        .unwrap_or(0.0);

    let mut wind_score = (10.0 - wind).max(0.0);
    if wind > 12.0 {
        wind_score *= 0.5;
    }

    let wave_score = if (0.5..=2.5).contains(&wave) {
        10.0 - (1.2 - wave).abs() * 4.0
    } else {
        (2.0 - (wave - 1.2).abs()).max(0.0)
    };

    let swell_score = period.min(14.0) / 14.0 * 10.0;

    wind_score * 0.35 + wave_score * 0.45 + swell_score * 0.2
}

/// Find the best contiguous block of `BEST_BLOCK_HOURS` hours within the
/// first `BEST_BLOCK_WINDOW` hours
pub fn find_best_block(hours: &[ForecastHour]) -> Option<BestBlock> {
    find_block(hours, BEST_BLOCK_HOURS, BEST_BLOCK_WINDOW)
}

/// Best block of `block_len` hours within the first `window` hours
///
/// Shorter inputs shrink the block rather than returning nothing.
pub fn find_block(hours: &[ForecastHour], block_len: usize, window: usize) -> Option<BestBlock> {
    let hours = &hours[..hours.len().min(window)];
    if hours.is_empty() {
        return None;
    }
    let block_len = block_len.min(hours.len()).max(1);

    let scores: Vec<f64> = hours.iter().map(score_hour).collect();

    let mut best_avg = f64::NEG_INFINITY;
    let mut best_i = 0;
    for i in 0..=(scores.len() - block_len) {
        let avg = scores[i..i + block_len].iter().sum::<f64>() / block_len as f64;
        if avg > best_avg {
            best_avg = avg;
            best_i = i;
        }
    }

    Some(BestBlock {
        start: hours[best_i].time,
        end: hours[best_i + block_len - 1].time,
        score: best_avg,
    })
}
