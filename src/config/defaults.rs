//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default server host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_PORT: u16 = 8080;

/// Default directory holding the Mini App assets
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Default webhook path registered with Telegram
pub const DEFAULT_WEBHOOK_PATH: &str = "/webhook";

/// Default forecast window in hours
pub const DEFAULT_FORECAST_HOURS: u32 = 24;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "surfspot";
