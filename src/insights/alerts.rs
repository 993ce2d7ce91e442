//! Hazard alert classifier
//!
//! Unlike the comfort axes, every matching rule produces an alert. The
//! append order is fixed: temperature, wind, humidity.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::WeatherReading;

/// Alert severity, ordered `Low < Medium < High`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A severity-tagged hazard alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub generated_at: DateTime<Utc>,
}

/// Static part of an alert rule
#[derive(Debug, Clone, Copy)]
struct AlertRule {
    title: &'static str,
    description: &'static str,
    severity: Severity,
}

const HEAT_WARNING: AlertRule = AlertRule {
    title: "Heat Warning",
    description: "Extreme heat conditions. Risk of heat exhaustion.",
    severity: Severity::High,
};

const WIND_ADVISORY: AlertRule = AlertRule {
    title: "Wind Advisory",
    description: "Strong winds may cause travel difficulties.",
    severity: Severity::Medium,
};

const HIGH_HUMIDITY: AlertRule = AlertRule {
    title: "High Humidity",
    description: "Uncomfortable conditions for sensitive individuals.",
    severity: Severity::Low,
};

impl AlertRule {
    fn raise(self, generated_at: DateTime<Utc>) -> Alert {
        Alert {
            title: self.title.to_string(),
            description: self.description.to_string(),
            severity: self.severity,
            generated_at,
        }
    }
}

/// Produce every alert the reading triggers, stamped with `generated_at`
#[must_use]
pub fn classify(reading: &WeatherReading, generated_at: DateTime<Utc>) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if reading.temperature > 35.0 {
        alerts.push(HEAT_WARNING.raise(generated_at));
    }

    if reading.wind_speed > 15.0 {
        alerts.push(WIND_ADVISORY.raise(generated_at));
    }

    if reading.humidity > 90 {
        alerts.push(HIGH_HUMIDITY.raise(generated_at));
    }

    tracing::debug!(count = alerts.len(), "Classified hazard alerts");
    alerts
}

/// Highest severity among `alerts`, if any
#[must_use]
pub fn max_severity(alerts: &[Alert]) -> Option<Severity> {
    alerts.iter().map(|a| a.severity).max()
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}
