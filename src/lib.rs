//! `WeatherWave` - derived weather insights for a dashboard
//!
//! This library turns a weather reading (plus optional UV, air quality and
//! pollen scores) into comfort insights, hazard alerts, index levels,
//! time-of-day notifications, clothing and activity suggestions, and a
//! synthesized extended forecast. A thin provider fetches readings from an
//! OpenWeatherMap-compatible API.

pub mod config;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod insights;
pub mod logging;
pub mod models;
pub mod provider;
pub mod random;
pub mod sources;

// Re-export core types for public API
pub use config::WeatherWaveConfig;
pub use engine::{EvaluationContext, InsightBundle, InsightEngine};
pub use error::WeatherWaveError;
pub use forecast::{Highlights, Trend};
pub use insights::{Alert, LocalHour, Severity, SmartNotification};
pub use models::{Condition, Coordinates, ForecastRange, ForecastSeries, Location, WeatherReading};
pub use provider::{OpenWeatherMapClient, WeatherProvider, WeatherSnapshot};
pub use random::{FixedSequence, RandomSource, SeededRandom, ThreadRandom};
pub use sources::SimulatedIndices;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherWaveError>;
