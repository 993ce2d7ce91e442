//! Weather data provider
//!
//! Fetches current conditions and the short-range outlook from an
//! OpenWeatherMap-compatible API. Every failure comes back as a
//! [`WeatherWaveError`]; nothing is retried and nothing is defaulted.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::config::WeatherConfig;
use crate::models::openweather::{CurrentWeatherResponse, ForecastResponse};
use crate::models::{Coordinates, WeatherReading};
use crate::{Result, WeatherWaveError};

/// Current reading plus outlook, fetched together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: WeatherReading,
    /// Three-hourly outlook readings, oldest first
    pub outlook: Vec<WeatherReading>,
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, coordinates: Coordinates) -> Result<WeatherReading>;

    async fn outlook(&self, coordinates: Coordinates) -> Result<Vec<WeatherReading>>;

    /// Both legs at once; fails if either leg fails
    async fn snapshot(&self, coordinates: Coordinates) -> Result<WeatherSnapshot> {
        let (current, outlook) =
            tokio::try_join!(self.current(coordinates), self.outlook(coordinates))?;
        Ok(WeatherSnapshot { current, outlook })
    }
}

/// OpenWeatherMap HTTP client
#[derive(Debug, Clone)]
pub struct OpenWeatherMapClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherMapClient {
    /// Create a client from configuration; an API key is required
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| WeatherWaveError::config("Weather API key is not configured"))?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("WeatherWave/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WeatherWaveError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn endpoint(&self, path: &str, coordinates: Coordinates) -> String {
        format!(
            "{}/{path}?lat={}&lon={}&units=metric&appid={}",
            self.base_url,
            coordinates.latitude,
            coordinates.longitude,
            urlencoding::encode(&self.api_key)
        )
    }

    #[instrument(skip(self, url))]
    async fn fetch<T: DeserializeOwned>(&self, path: &str, url: String) -> Result<T> {
        let start = Instant::now();
        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(path, "Weather request failed: {e}");
            WeatherWaveError::api(format!("Weather request failed: {e}"))
        })?;

        let status = response.status();
        debug!(%status, "Weather response received in {:.3}s", start.elapsed().as_secs_f64());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, path, "Weather API returned an error");
            return Err(match status {
                StatusCode::UNAUTHORIZED => WeatherWaveError::api(
                    "Invalid API key. Please check your OpenWeatherMap API key.",
                ),
                StatusCode::NOT_FOUND => WeatherWaveError::api(
                    "Location not found. Please check the coordinates.",
                ),
                StatusCode::TOO_MANY_REQUESTS => {
                    WeatherWaveError::api("Weather API rate limit exceeded")
                }
                _ => WeatherWaveError::api(format!("Weather API error {status}: {body}")),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherMapClient {
    #[instrument(skip(self), fields(lat = coordinates.latitude, lon = coordinates.longitude))]
    async fn current(&self, coordinates: Coordinates) -> Result<WeatherReading> {
        let url = self.endpoint("weather", coordinates);
        let response: CurrentWeatherResponse = self.fetch("weather", url).await?;
        let reading = WeatherReading::try_from(response)?;
        info!(
            temperature = reading.temperature,
            condition = %reading.condition,
            "Fetched current weather"
        );
        Ok(reading)
    }

    #[instrument(skip(self), fields(lat = coordinates.latitude, lon = coordinates.longitude))]
    async fn outlook(&self, coordinates: Coordinates) -> Result<Vec<WeatherReading>> {
        let url = self.endpoint("forecast", coordinates);
        let response: ForecastResponse = self.fetch("forecast", url).await?;
        let city = response.city.map(|c| c.name);

        let readings = response
            .list
            .into_iter()
            .map(|entry| {
                WeatherReading::try_from(entry).map(|mut reading| {
                    if reading.location_name.is_none() {
                        reading.location_name.clone_from(&city);
                    }
                    reading
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!(entries = readings.len(), "Fetched weather outlook");
        Ok(readings)
    }
}
