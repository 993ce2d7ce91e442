//! Location model for geographic coordinates and the recent-location list

use serde::{Deserialize, Serialize};

use crate::WeatherWaveError;

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create coordinates, rejecting values outside the valid ranges
    pub fn checked(latitude: f64, longitude: f64) -> crate::Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(WeatherWaveError::validation(format!(
                "latitude {latitude} must be between -90 and 90"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherWaveError::validation(format!(
                "longitude {longitude} must be between -180 and 180"
            )));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A selected location: coordinates plus display names
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    pub coordinates: Coordinates,
    /// City name
    pub city: String,
    /// Country name
    pub country: String,
}

impl Location {
    #[must_use]
    pub fn new<S: Into<String>>(coordinates: Coordinates, city: S, country: S) -> Self {
        Self {
            coordinates,
            city: city.into(),
            country: country.into(),
        }
    }

    /// Location named after its own coordinates, used when reverse geocoding fails
    #[must_use]
    pub fn unnamed(coordinates: Coordinates) -> Self {
        Self {
            city: format!("{:.2}, {:.2}", coordinates.latitude, coordinates.longitude),
            country: "Unknown".to_string(),
            coordinates,
        }
    }
}

/// Most recently selected locations, newest first.
///
/// Only location identifiers are retained, never weather snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationHistory {
    entries: Vec<Location>,
}

impl LocationHistory {
    /// Maximum number of locations kept
    pub const CAPACITY: usize = 5;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection. An entry with identical coordinates moves to the front.
    pub fn push(&mut self, location: Location) {
        self.entries
            .retain(|existing| existing.coordinates != location.coordinates);
        self.entries.insert(0, location);
        self.entries.truncate(Self::CAPACITY);
    }

    #[must_use]
    pub fn entries(&self) -> &[Location] {
        &self.entries
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Location> {
        self.entries.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
