//! Map picker core
//!
//! Platform-independent model of the Mini App widget: coordinate and
//! selection types, the coordinate readout, the host bridge seam and the
//! event-driven picker itself. The browser rendition in `static/` mirrors
//! this module one to one; keeping the logic here lets the contract be
//! tested natively.

pub mod bridge;
pub mod location;
pub mod widget;

use crate::constants::map::READOUT_DECIMALS;
use serde::{Deserialize, Serialize, Serializer};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.lat < -90.0 || self.lat > 90.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if self.lng < -180.0 || self.lng > 180.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }

    /// Readout text shown next to the map: both axes at 5 decimal places
    pub fn readout(&self) -> String {
        format!(
            "{:.prec$}, {:.prec$}",
            self.lat,
            self.lng,
            prec = READOUT_DECIMALS
        )
    }
}

/// The payload handed to the host when the user confirms a position
///
/// Serializes exactly like the browser does: integral coordinates come out
/// as JSON integers (`{"lat":55,"lng":37}`) and a missing date is omitted,
/// so the bot parses the same bytes regardless of which side produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(serialize_with = "serialize_compact")]
    pub lat: f64,
    #[serde(serialize_with = "serialize_compact")]
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Selection {
    /// Build a selection; an empty or whitespace date degrades to None
    pub fn new(coords: Coordinates, date: Option<&str>) -> Self {
        let date = date
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        Self {
            lat: coords.lat,
            lng: coords.lng,
            date,
        }
    }

    /// Marker position carried by this selection
    pub fn coords(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Serialize an f64 the way JSON.stringify does: no trailing ".0"
fn serialize_compact<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.is_finite() && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
