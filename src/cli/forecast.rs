//! Forecast command handler
//!
//! Fetches a forecast for a position and prints the same report the bot
//! would send. Handy for tuning the scoring heuristic.

use crate::config::Config;
use crate::error::Result;
use crate::forecast::forecast_window;
use crate::forecast::report::build_report;
use crate::forecast::stormglass::StormGlassClient;
use crate::geo::{coordinate_label, get_geocoder, GeoBackend};
use crate::picker::Coordinates;
use clap::Args;

/// Forecast command arguments
#[derive(Args)]
pub struct ForecastArgs {
    /// Latitude
    #[arg(long)]
    pub lat: f64,

    /// Longitude
    #[arg(long)]
    pub lng: f64,

    /// Forecast date (YYYY-MM-DD, defaults to now)
    #[arg(long, short = 'd')]
    pub date: Option<String>,

    /// Forecast window in hours
    #[arg(long)]
    pub hours: Option<u32>,

    /// Skip reverse geocoding and label the spot with raw coordinates
    #[arg(long)]
    pub no_geocode: bool,
}

/// Run the forecast command
pub async fn run(args: ForecastArgs) -> Result<()> {
    let config = Config::load()?;

    let center = Coordinates::new(args.lat, args.lng);
    center.validate()?;

    let place = if args.no_geocode {
        coordinate_label(args.lat, args.lng)
    } else {
        let geocoder = get_geocoder();
        match geocoder.reverse_geocode(args.lat, args.lng).await {
            Ok(Some(name)) => name,
            Ok(None) => coordinate_label(args.lat, args.lng),
            Err(e) => {
                eprintln!("Reverse geocoding failed: {}", e);
                coordinate_label(args.lat, args.lng)
            }
        }
    };

    let hours = args.hours.unwrap_or(config.forecast.hours);
    let (start, end) = forecast_window(args.date.as_deref(), hours);

    let client = StormGlassClient::new(config.forecast.api_key.clone());
    let forecast = client.fetch(args.lat, args.lng, start, end).await?;

    println!("{}", build_report(&place, &forecast));

    Ok(())
}
