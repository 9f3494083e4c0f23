//! Geocoding module
//!
//! Turns a picked coordinate into a human-readable place name for the
//! forecast report. Falls back to a plain coordinate label when the
//! geocoder has nothing to say.

pub mod nominatim;

use crate::error::Result;
use std::future::Future;

/// Trait for reverse geocoding backends
pub trait GeoBackend: Send + Sync {
    /// Reverse geocode coordinates to a display name
    ///
    /// Returns None when the position resolves to nothing (open ocean is a
    /// common case for surf spots).
    fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
    ) -> impl Future<Output = Result<Option<String>>> + Send;
}

/// Get the default geocoding backend
pub fn get_geocoder() -> nominatim::NominatimBackend {
    nominatim::NominatimBackend::new()
}

/// Fallback label when no display name is available: "lat, lng" at 4 decimals
pub fn coordinate_label(lat: f64, lng: f64) -> String {
    format!("{:.4}, {:.4}", lat, lng)
}
