//! Error types and handling for `WeatherWave`

use thiserror::Error;

/// Main error type for the `WeatherWave` insight engine
#[derive(Error, Debug)]
pub enum WeatherWaveError {
    /// Bad or missing settings
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream weather API errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Readings, hours or forecast lengths outside their domain
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Malformed JSON payloads
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    /// Local file access
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WeatherWaveError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Short text suitable for the dashboard or the terminal
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherWaveError::Config { .. } => {
                "WeatherWave is misconfigured. Check the config file and the WEATHERWAVE_* variables.".to_string()
            }
            WeatherWaveError::Api { .. } => {
                "Unable to fetch weather data. Please check your internet connection.".to_string()
            }
            WeatherWaveError::Validation { message } => {
                format!("Cannot use this value: {message}")
            }
            WeatherWaveError::Parse { .. } => {
                "The weather service returned data we could not read.".to_string()
            }
            WeatherWaveError::Io { .. } => {
                "A local file could not be read or written.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for WeatherWaveError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::api(format!("upstream returned {status}")),
            None => Self::api(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = WeatherWaveError::config("missing API key");
        assert!(matches!(config_err, WeatherWaveError::Config { .. }));

        let api_err = WeatherWaveError::api("connection failed");
        assert!(matches!(api_err, WeatherWaveError::Api { .. }));

        let validation_err = WeatherWaveError::validation("hour out of range");
        assert!(matches!(validation_err, WeatherWaveError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = WeatherWaveError::config("test");
        assert!(config_err.user_message().contains("misconfigured"));

        let api_err = WeatherWaveError::api("test");
        assert!(api_err.user_message().contains("Unable to fetch"));

        let validation_err = WeatherWaveError::validation("hour 24");
        assert!(validation_err.user_message().contains("hour 24"));
    }

    #[test]
    fn test_parse_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: WeatherWaveError = json_err.into();
        assert!(matches!(err, WeatherWaveError::Parse { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::other("disk gone");
        let err: WeatherWaveError = io_err.into();
        assert!(matches!(err, WeatherWaveError::Io { .. }));
    }
}
