//! Insight classifiers
//!
//! Each submodule is a stateless rule set that turns a [`WeatherReading`]
//! (or a bare index score) into typed results:
//! - `comfort`: temperature, humidity and wind comfort insights
//! - `alerts`: severity-tagged hazard alerts
//! - `indices`: UV, air quality and pollen level lookup
//! - `notifications`: time-of-day reminders with stable ids
//! - `activities`: clothing and activity suggestions
//! - `health`: health advisories across all of the above
//!
//! [`WeatherReading`]: crate::models::WeatherReading

pub mod activities;
pub mod alerts;
pub mod buckets;
pub mod comfort;
pub mod health;
pub mod indices;
pub mod notifications;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use activities::{ActivityImpact, ActivityPlan};
pub use alerts::{Alert, Severity};
pub use comfort::ComfortReport;
pub use health::IndexScores;
pub use indices::{AqiLevel, IndexResult, PollenLevel, UvLevel};
pub use notifications::{
    DismissedNotifications, LocalHour, NotificationKind, Priority, SmartNotification,
};

/// Which rule axis produced an insight or recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    Temperature,
    Humidity,
    Wind,
    Sky,
    Visibility,
    Health,
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightCategory::Temperature => write!(f, "Temperature"),
            InsightCategory::Humidity => write!(f, "Humidity"),
            InsightCategory::Wind => write!(f, "Wind"),
            InsightCategory::Sky => write!(f, "Sky"),
            InsightCategory::Visibility => write!(f, "Visibility"),
            InsightCategory::Health => write!(f, "Health"),
        }
    }
}

/// Informational statement about the current conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub category: InsightCategory,
    pub text: String,
}

/// Suggested action for the current conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: InsightCategory,
    pub text: String,
}

impl Insight {
    pub fn new<S: Into<String>>(category: InsightCategory, text: S) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

impl Recommendation {
    pub fn new<S: Into<String>>(category: InsightCategory, text: S) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
