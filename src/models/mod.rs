//! Data models for the WeatherWave insight engine
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and recently selected locations
//! - Weather: A single weather reading and its JSON source shape
//! - Forecast: Daily forecast entries and the series built from them

pub mod forecast;
pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use forecast::{ForecastDay, ForecastRange, ForecastSeries};
pub use location::{Coordinates, Location, LocationHistory};
pub use weather::{Condition, WeatherReading, openweather};
