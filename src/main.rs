//! WeatherWave CLI
//!
//! Prints the insight bundle and a synthesized forecast for one location.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::Parser;
use tracing::info;

use weatherwave::forecast::{self, calendar};
use weatherwave::models::{Condition, Coordinates, Location, WeatherReading};
use weatherwave::{
    EvaluationContext, InsightEngine, LocalHour, OpenWeatherMapClient, RandomSource,
    SeededRandom, SimulatedIndices, ThreadRandom, WeatherProvider, WeatherWaveConfig, logging,
};

/// WeatherWave insight engine
#[derive(Parser)]
#[command(name = "weatherwave")]
#[command(author, version, about = "Derived weather insights for one location", long_about = None)]
struct Cli {
    /// Latitude, defaults to the configured location
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude, defaults to the configured location
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Configuration file
    #[arg(short, long, env = "WEATHERWAVE_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for the simulated index scores and forecast
    #[arg(long)]
    seed: Option<u64>,

    /// Use a built-in sample reading instead of calling the weather API
    #[arg(long)]
    offline: bool,

    /// Hour of day (0-23) to evaluate at instead of the local clock
    #[arg(long)]
    hour: Option<u32>,
}

fn sample_reading(coordinates: Coordinates) -> WeatherReading {
    WeatherReading::new(22.0, 55, 3.5, Condition::Clear)
        .with_feels_like(21.0)
        .with_visibility(10_000)
        .with_coordinates(coordinates)
        .with_description("clear sky")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = WeatherWaveConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    logging::init(&config.logging)?;

    let coordinates = Coordinates::checked(
        cli.lat.unwrap_or(config.defaults.latitude),
        cli.lon.unwrap_or(config.defaults.longitude),
    )?;
    let hour = match cli.hour {
        Some(h) => LocalHour::try_from(h)?,
        None => LocalHour::now(),
    };

    let reading = if cli.offline {
        info!("Offline mode, using sample reading");
        sample_reading(coordinates)
    } else {
        let client = OpenWeatherMapClient::new(&config.weather)?;
        let snapshot = client
            .snapshot(coordinates)
            .await
            .with_context(|| {
                format!(
                    "Failed to fetch weather for {}",
                    coordinates.format_coordinates()
                )
            })?;
        info!(outlook = snapshot.outlook.len(), "Fetched weather snapshot");
        snapshot.current
    };

    let location = match &reading.location_name {
        Some(name) => Location::new(coordinates, name.clone(), String::new()),
        None => Location::unnamed(coordinates),
    };

    let mut seeded;
    let mut thread = ThreadRandom;
    let mut rng: &mut dyn RandomSource = match cli.seed {
        Some(seed) => {
            seeded = SeededRandom::new(seed);
            &mut seeded
        }
        None => &mut thread,
    };

    let today = Local::now().date_naive();
    let indices = SimulatedIndices::new(&mut rng).sample(today);
    let context = EvaluationContext::new(hour, Utc::now())
        .with_uv(indices.uv)
        .with_aqi(indices.aqi, Some(indices.components.clone()))
        .with_pollen(indices.pollen);
    let bundle = InsightEngine::new().evaluate(&reading, &context);

    let range = config.defaults.forecast_range()?;
    let series = forecast::synthesize(range, today, &mut rng)?;
    let output = serde_json::json!({
        "location": location,
        "reading": reading,
        "insights": bundle,
        "forecast": {
            "days": series.days(),
            "trend": forecast::trend(&series),
            "highlights": forecast::highlights(&series).lines(),
            "events": calendar::events(&series),
        },
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
