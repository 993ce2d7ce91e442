//! Daily forecast model and series container

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Condition;
use crate::WeatherWaveError;

/// One forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// Daytime temperature in Celsius
    pub temp_day: f64,
    /// Night temperature in Celsius
    pub temp_night: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Wind speed in m/s
    pub wind_speed: f64,
    pub condition: Condition,
    pub description: String,
    /// Precipitation in millimeters
    pub precipitation_mm: f64,
    pub uv_index: u8,
}

/// Supported forecast lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForecastRange {
    /// Seven days
    Week,
    /// Fourteen days
    Fortnight,
}

impl ForecastRange {
    #[must_use]
    pub fn days(self) -> usize {
        match self {
            Self::Week => 7,
            Self::Fortnight => 14,
        }
    }
}

impl TryFrom<usize> for ForecastRange {
    type Error = WeatherWaveError;

    fn try_from(days: usize) -> Result<Self, Self::Error> {
        match days {
            7 => Ok(Self::Week),
            14 => Ok(Self::Fortnight),
            other => Err(WeatherWaveError::validation(format!(
                "forecast length must be 7 or 14 days, got {other}"
            ))),
        }
    }
}

/// Forecast days ordered by date ascending, index 0 being today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    days: Vec<ForecastDay>,
}

impl ForecastSeries {
    /// Build a series, checking that dates are strictly increasing
    pub fn new(days: Vec<ForecastDay>) -> crate::Result<Self> {
        if let Some(pair) = days.windows(2).find(|pair| pair[1].date <= pair[0].date) {
            return Err(WeatherWaveError::validation(format!(
                "forecast dates must be ascending: {} is followed by {}",
                pair[0].date, pair[1].date
            )));
        }
        Ok(Self { days })
    }

    #[must_use]
    pub fn days(&self) -> &[ForecastDay] {
        &self.days
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&ForecastDay> {
        self.days.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ForecastDay> {
        self.days.last()
    }

    /// The first `count` days as a new series
    #[must_use]
    pub fn head(&self, count: usize) -> Self {
        Self {
            days: self.days.iter().take(count).cloned().collect(),
        }
    }
}
