//! `WeatherWave` settings
//!
//! Settings come from an optional TOML file, then `WEATHERWAVE_*`
//! environment variables (`WEATHERWAVE_WEATHER__API_KEY`,
//! `WEATHERWAVE_DEFAULTS__FORECAST_DAYS`, ...). Every section can be
//! omitted; missing values fall back to the defaults below.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::WeatherWaveError;
use crate::models::{Coordinates, ForecastRange};

const ENV_PREFIX: &str = "WEATHERWAVE";
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
const LOG_FORMATS: [&str; 2] = ["pretty", "json"];
const API_KEY_LENGTH: std::ops::RangeInclusive<usize> = 8..=100;
const MAX_TIMEOUT_SECONDS: u32 = 300;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherWaveConfig {
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Location and forecast length used when the CLI gives none
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// OpenWeatherMap access
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Needed only for live requests; offline runs work without it
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`; `RUST_LOG` wins
    #[serde(default = "default_level")]
    pub level: String,
    /// `pretty` or `json`
    #[serde(default = "default_format")]
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// 7 or 14
    #[serde(default = "default_forecast_days")]
    pub forecast_days: usize,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_timeout_seconds() -> u32 {
    10
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

// London
fn default_latitude() -> f64 {
    51.5074
}

fn default_longitude() -> f64 {
    -0.1278
}

fn default_forecast_days() -> usize {
    ForecastRange::Week.days()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl WeatherConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    fn fill_blanks(&mut self) {
        if self.base_url.trim().is_empty() {
            self.base_url = default_base_url();
        }
        if self.timeout_seconds == 0 {
            self.timeout_seconds = default_timeout_seconds();
        }
    }

    fn check(&self) -> crate::Result<()> {
        if let Some(key) = &self.api_key {
            if key.is_empty() {
                return Err(WeatherWaveError::config(
                    "Weather API key is set but empty; remove it or provide a real key",
                ));
            }
            if !API_KEY_LENGTH.contains(&key.len()) {
                return Err(WeatherWaveError::config(format!(
                    "Weather API key has {} characters, expected {} to {}",
                    key.len(),
                    API_KEY_LENGTH.start(),
                    API_KEY_LENGTH.end()
                )));
            }
        }

        if self.timeout_seconds > MAX_TIMEOUT_SECONDS {
            return Err(WeatherWaveError::config(format!(
                "Weather API timeout cannot exceed {MAX_TIMEOUT_SECONDS} seconds"
            )));
        }

        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(WeatherWaveError::config(format!(
                "Weather API base URL '{}' is not an http(s) URL",
                self.base_url
            )));
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn fill_blanks(&mut self) {
        if self.level.is_empty() {
            self.level = default_level();
        }
        if self.format.is_empty() {
            self.format = default_format();
        }
    }

    fn check(&self) -> crate::Result<()> {
        one_of("log level", &self.level, &LOG_LEVELS)?;
        one_of("log format", &self.format, &LOG_FORMATS)
    }
}

impl DefaultsConfig {
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Configured forecast length
    pub fn forecast_range(&self) -> crate::Result<ForecastRange> {
        ForecastRange::try_from(self.forecast_days)
    }

    fn fill_blanks(&mut self) {
        if self.forecast_days == 0 {
            self.forecast_days = default_forecast_days();
        }
    }

    fn check(&self) -> crate::Result<()> {
        Coordinates::checked(self.latitude, self.longitude)
            .map_err(|e| WeatherWaveError::config(format!("Invalid default location: {e}")))?;
        self.forecast_range()
            .map_err(|e| WeatherWaveError::config(format!("Invalid forecast length: {e}")))?;
        Ok(())
    }
}

fn one_of(what: &str, value: &str, allowed: &[&str]) -> crate::Result<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(WeatherWaveError::config(format!(
            "Invalid {what} '{value}', expected one of: {}",
            allowed.join(", ")
        )))
    }
}

impl WeatherWaveConfig {
    /// Read the file at the platform config path plus the environment
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Read `path` (or the platform config path) plus the environment.
    /// A missing file is not an error.
    pub fn load_from_path(path: Option<PathBuf>) -> Result<Self> {
        let path = path
            .or_else(Self::get_config_path)
            .unwrap_or_else(|| PathBuf::from("weatherwave.toml"));

        let mut config: Self = Self::sources(&path)
            .build()
            .with_context(|| format!("Failed to read settings (file: {})", path.display()))?
            .try_deserialize()
            .context("Settings have an unexpected shape")?;

        config.apply_defaults();
        config.validate()?;

        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    fn sources(path: &Path) -> config::ConfigBuilder<config::builder::DefaultState> {
        let builder = Config::builder();
        let builder = if path.exists() {
            builder.add_source(File::from(path).format(FileFormat::Toml).required(false))
        } else {
            builder
        };
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
    }

    /// `<config dir>/weatherwave/config.toml`
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("weatherwave").join("config.toml"))
    }

    /// Replace blank values left by partial files or empty env vars
    pub fn apply_defaults(&mut self) {
        self.weather.fill_blanks();
        self.logging.fill_blanks();
        self.defaults.fill_blanks();
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.weather.check()?;
        self.logging.check()?;
        self.defaults.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = WeatherWaveConfig::default();
        assert_eq!(config.weather.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.weather.timeout(), Duration::from_secs(10));
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.defaults.forecast_range().unwrap(), ForecastRange::Week);
        assert!(config.weather.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_key_length_bounds() {
        let mut config = WeatherWaveConfig::default();
        config.weather.api_key = Some("abcd1234".to_string());
        assert!(config.validate().is_ok());

        config.weather.api_key = Some("abc".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("expected 8 to 100"));

        config.weather.api_key = Some(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_log_settings_rejected() {
        let mut config = WeatherWaveConfig::default();
        config.logging.level = "loud".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log level 'loud'"));

        let mut config = WeatherWaveConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_weather_section_limits() {
        let mut config = WeatherWaveConfig::default();
        config.weather.timeout_seconds = 301;
        assert!(config.validate().unwrap_err().to_string().contains("cannot exceed 300"));

        let mut config = WeatherWaveConfig::default();
        config.weather.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults_section_limits() {
        let mut config = WeatherWaveConfig::default();
        config.defaults.forecast_days = 10;
        assert!(config.validate().unwrap_err().to_string().contains("forecast length"));

        let mut config = WeatherWaveConfig::default();
        config.defaults.latitude = 95.0;
        assert!(config.validate().unwrap_err().to_string().contains("default location"));
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = WeatherWaveConfig::default();
        config.weather.base_url.clear();
        config.weather.timeout_seconds = 0;
        config.logging.level.clear();
        config.defaults.forecast_days = 0;

        config.apply_defaults();

        assert_eq!(config.weather.timeout_seconds, 10);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.forecast_days, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "weatherwave-config-test-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[weather]\napi_key = \"file_api_key_123\"\ntimeout_seconds = 20\n\n[defaults]\nforecast_days = 14"
        )
        .unwrap();

        let config = WeatherWaveConfig::load_from_path(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.weather.api_key.as_deref(), Some("file_api_key_123"));
        assert_eq!(config.weather.timeout_seconds, 20);
        assert_eq!(config.defaults.forecast_range().unwrap(), ForecastRange::Fortnight);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_path_is_under_weatherwave() {
        if let Some(path) = WeatherWaveConfig::get_config_path() {
            assert!(path.ends_with("weatherwave/config.toml"));
        }
    }
}
