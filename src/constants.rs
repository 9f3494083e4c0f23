//! Centralized constants for the surfspot crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// External API endpoints
pub mod api {
    /// Telegram Bot API base URL (token is appended per request)
    pub const TELEGRAM_URL: &str = "https://api.telegram.org";

    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// StormGlass marine weather API
    pub const STORMGLASS_URL: &str = "https://api.stormglass.io/v2/weather/point";

    /// OpenStreetMap raster tile template used by the Mini App
    pub const TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
}

/// Map view settings shared by the picker core and the shipped webapp
pub mod map {
    /// Initial map center latitude
    pub const DEFAULT_CENTER_LAT: f64 = 55.0;

    /// Initial map center longitude
    pub const DEFAULT_CENTER_LNG: f64 = 37.0;

    /// Initial zoom level
    pub const DEFAULT_ZOOM: u8 = 13;

    /// Zoom level applied after a successful geolocation
    pub const LOCATE_ZOOM: u8 = 12;

    /// Decimal places shown in the coordinate readout
    pub const READOUT_DECIMALS: usize = 5;
}

/// Forecast settings
pub mod forecast {
    /// Weather parameters requested from StormGlass
    pub const PARAMS: [&str; 10] = [
        "windSpeed",
        "windDirection",
        "waveHeight",
        "wavePeriod",
        "waveDirection",
        "swellHeight",
        "swellPeriod",
        "swellDirection",
        "airTemperature",
        "waterTemperature",
    ];

    /// Preferred data sources, first match wins
    pub const SOURCE_PREFERENCE: [&str; 5] = ["noaa", "sg", "gfs", "icon", "nam"];

    /// Consecutive hours averaged when searching for the best session
    pub const BEST_BLOCK_HOURS: usize = 2;

    /// Hours considered by the best-block search
    pub const BEST_BLOCK_WINDOW: usize = 24;
}
