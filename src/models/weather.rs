//! Weather reading model and current-weather JSON conversion

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Sky condition reported for a reading.
///
/// Parsing is keyword based and case-insensitive, so both the short API
/// group ("Rain") and a free-text description ("light rain") map onto the
/// same variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Haze,
    /// Anything the keyword table does not recognise, kept verbatim
    Other(String),
}

impl Condition {
    /// Parse a condition label such as `"Clear"` or `"light rain"`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        // Order matters: "thunderstorm with light rain" is a thunderstorm,
        // "light intensity drizzle rain" is drizzle.
        match lower.as_str() {
            l if l.contains("thunder") => Self::Thunderstorm,
            l if l.contains("drizzle") => Self::Drizzle,
            l if l.contains("rain") || l.contains("shower") => Self::Rain,
            l if l.contains("snow") || l.contains("sleet") => Self::Snow,
            l if l.contains("clear") || l.contains("sunny") => Self::Clear,
            l if l.contains("cloud") || l.contains("overcast") => Self::Clouds,
            l if l.contains("mist") => Self::Mist,
            l if l.contains("fog") => Self::Fog,
            l if l.contains("haze") || l.contains("smoke") || l.contains("dust") => Self::Haze,
            _ => Self::Other(label.trim().to_string()),
        }
    }

    /// Short label as used by the dashboard
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Drizzle => "Drizzle",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::Mist => "Mist",
            Self::Fog => "Fog",
            Self::Haze => "Haze",
            Self::Other(label) => label,
        }
    }

    #[must_use]
    pub fn is_rain(&self) -> bool {
        matches!(self, Self::Rain)
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Self::from_label(value)
    }
}

impl From<Condition> for String {
    fn from(value: Condition) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single point-in-time weather observation for one location.
///
/// Readings are immutable once received; a refresh replaces the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Apparent temperature in Celsius
    pub feels_like: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Sky condition group
    pub condition: Condition,
    /// Human-readable description of weather conditions
    pub description: String,
    /// Visibility in meters
    pub visibility: Option<u32>,
    /// Coordinates of the observation, when known
    pub coordinates: Option<Coordinates>,
    /// Location name reported by the provider
    pub location_name: Option<String>,
    /// Observation timestamp
    pub observed_at: DateTime<Utc>,
}

impl WeatherReading {
    /// Create a reading from the values every classifier needs.
    ///
    /// `feels_like` defaults to the temperature and the description to the
    /// condition label; optional fields start empty.
    #[must_use]
    pub fn new(temperature: f64, humidity: u8, wind_speed: f64, condition: Condition) -> Self {
        Self {
            temperature,
            feels_like: temperature,
            humidity: humidity.min(100),
            wind_speed: wind_speed.max(0.0),
            description: condition.label().to_lowercase(),
            condition,
            visibility: None,
            coordinates: None,
            location_name: None,
            observed_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_feels_like(mut self, feels_like: f64) -> Self {
        self.feels_like = feels_like;
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, meters: u32) -> Self {
        self.visibility = Some(meters);
        self
    }

    #[must_use]
    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    #[must_use]
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn observed_at(mut self, observed_at: DateTime<Utc>) -> Self {
        self.observed_at = observed_at;
        self
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature)
    }

    /// Format wind information
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{:.1} m/s", self.wind_speed)
    }
}

/// Current-weather JSON shapes as returned by OpenWeatherMap-compatible APIs
pub mod openweather {
    use super::{Condition, Coordinates, WeatherReading};
    use crate::WeatherWaveError;
    use chrono::{DateTime, Utc};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct CurrentWeatherResponse {
        pub dt: Option<i64>,
        pub name: Option<String>,
        pub coord: Option<CoordInfo>,
        pub main: Option<MainInfo>,
        #[serde(default)]
        pub weather: Vec<ConditionInfo>,
        pub wind: Option<WindInfo>,
        pub visibility: Option<u32>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CoordInfo {
        pub lat: f64,
        pub lon: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct MainInfo {
        pub temp: f64,
        pub feels_like: Option<f64>,
        pub humidity: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct ConditionInfo {
        pub main: String,
        #[serde(default)]
        pub description: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct WindInfo {
        pub speed: f64,
    }

    /// Five-day / three-hour forecast response
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        #[serde(default)]
        pub list: Vec<CurrentWeatherResponse>,
        pub city: Option<CityInfo>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CityInfo {
        pub name: String,
        pub coord: Option<CoordInfo>,
    }

    impl TryFrom<CurrentWeatherResponse> for WeatherReading {
        type Error = WeatherWaveError;

        fn try_from(response: CurrentWeatherResponse) -> Result<Self, Self::Error> {
            let main = response
                .main
                .ok_or_else(|| WeatherWaveError::validation("reading is missing `main`"))?;
            let sky = response
                .weather
                .into_iter()
                .next()
                .ok_or_else(|| WeatherWaveError::validation("reading is missing `weather[0]`"))?;
            let wind = response
                .wind
                .ok_or_else(|| WeatherWaveError::validation("reading is missing `wind`"))?;

            if !main.temp.is_finite() {
                return Err(WeatherWaveError::validation("temperature is not a number"));
            }

            let observed_at = response
                .dt
                .and_then(|dt| DateTime::from_timestamp(dt, 0))
                .unwrap_or_else(Utc::now);

            Ok(Self {
                temperature: main.temp,
                feels_like: main.feels_like.unwrap_or(main.temp),
                humidity: main.humidity.round().clamp(0.0, 100.0) as u8,
                wind_speed: wind.speed.max(0.0),
                condition: Condition::from_label(&sky.main),
                description: sky.description,
                visibility: response.visibility,
                coordinates: response
                    .coord
                    .map(|c| Coordinates::new(c.lat, c.lon)),
                location_name: response.name.filter(|n| !n.is_empty()),
                observed_at,
            })
        }
    }

    /// Parse a current-weather JSON document into a reading
    pub fn parse_reading(json: &str) -> crate::Result<WeatherReading> {
        let response: CurrentWeatherResponse = serde_json::from_str(json)?;
        WeatherReading::try_from(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Clear", Condition::Clear)]
    #[case("light rain", Condition::Rain)]
    #[case("Rain", Condition::Rain)]
    #[case("light intensity drizzle rain", Condition::Drizzle)]
    #[case("thunderstorm with light rain", Condition::Thunderstorm)]
    #[case("few clouds", Condition::Clouds)]
    #[case("Snow", Condition::Snow)]
    #[case("Tornado", Condition::Other("Tornado".to_string()))]
    fn test_condition_from_label(#[case] label: &str, #[case] expected: Condition) {
        assert_eq!(Condition::from_label(label), expected);
    }

    #[test]
    fn test_condition_serde_uses_label() {
        let json = serde_json::to_string(&Condition::Clouds).unwrap();
        assert_eq!(json, "\"Clouds\"");
        let parsed: Condition = serde_json::from_str("\"light rain\"").unwrap();
        assert_eq!(parsed, Condition::Rain);
    }

    #[test]
    fn test_parse_reading() {
        let json = r#"{
            "coord": {"lon": -0.13, "lat": 51.51},
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
            "main": {"temp": 12.4, "feels_like": 11.1, "humidity": 87, "pressure": 1011},
            "visibility": 8000,
            "wind": {"speed": 6.2, "deg": 230},
            "dt": 1700000000,
            "name": "London"
        }"#;

        let reading = openweather::parse_reading(json).unwrap();
        assert_eq!(reading.temperature, 12.4);
        assert_eq!(reading.feels_like, 11.1);
        assert_eq!(reading.humidity, 87);
        assert_eq!(reading.condition, Condition::Rain);
        assert_eq!(reading.description, "light rain");
        assert_eq!(reading.visibility, Some(8000));
        assert_eq!(reading.location_name.as_deref(), Some("London"));
        assert_eq!(reading.coordinates, Some(Coordinates::new(51.51, -0.13)));
        assert_eq!(reading.observed_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_parse_reading_missing_fields_is_validation_error() {
        let json = r#"{"main": {"temp": 20.0, "humidity": 50}, "wind": {"speed": 1.0}}"#;
        let err = openweather::parse_reading(json).unwrap_err();
        assert!(err.to_string().contains("weather[0]"));

        let json = r#"{"weather": [{"main": "Clear"}], "wind": {"speed": 1.0}}"#;
        let err = openweather::parse_reading(json).unwrap_err();
        assert!(err.to_string().contains("main"));
    }

    #[test]
    fn test_new_reading_clamps_inputs() {
        let reading = WeatherReading::new(20.0, 150, -3.0, Condition::Clear);
        assert_eq!(reading.humidity, 100);
        assert_eq!(reading.wind_speed, 0.0);
        assert_eq!(reading.feels_like, 20.0);
        assert_eq!(reading.format_temperature(), "20.0°C");
    }
}
