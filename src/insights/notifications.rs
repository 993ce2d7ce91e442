//! Time-of-day smart notifications
//!
//! Rules are independent; every applicable one fires, in a fixed order.
//! Ids are constant strings so callers can dismiss by id. The generator
//! keeps no state: dismissal lives in [`DismissedNotifications`], which the
//! caller owns and applies to each freshly generated list.

use std::collections::BTreeSet;
use std::fmt;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::error::WeatherWaveError;
use crate::models::{Condition, WeatherReading};

/// Hour of day in the evaluating client's local time, 0-23
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct LocalHour(u8);

impl LocalHour {
    pub const MORNING: std::ops::RangeInclusive<u8> = 6..=10;
    pub const EVENING: std::ops::RangeInclusive<u8> = 17..=21;

    /// Read the current hour from the host's local clock
    #[must_use]
    pub fn now() -> Self {
        // chrono guarantees 0..=23
        Self(chrono::Local::now().hour() as u8)
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_morning(self) -> bool {
        Self::MORNING.contains(&self.0)
    }

    #[must_use]
    pub fn is_evening(self) -> bool {
        Self::EVENING.contains(&self.0)
    }
}

impl TryFrom<u32> for LocalHour {
    type Error = WeatherWaveError;

    fn try_from(hour: u32) -> Result<Self, Self::Error> {
        match u8::try_from(hour) {
            Ok(h) if h <= 23 => Ok(Self(h)),
            _ => Err(WeatherWaveError::validation(format!(
                "hour must be between 0 and 23, got {hour}"
            ))),
        }
    }
}

impl From<LocalHour> for u32 {
    fn from(hour: LocalHour) -> Self {
        u32::from(hour.0)
    }
}

impl fmt::Display for LocalHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartNotification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub action: String,
    pub priority: Priority,
}

struct Template {
    id: &'static str,
    kind: NotificationKind,
    title: &'static str,
    message: &'static str,
    action: &'static str,
    priority: Priority,
}

impl Template {
    fn build(&self) -> SmartNotification {
        SmartNotification {
            id: self.id.to_string(),
            kind: self.kind,
            title: self.title.to_string(),
            message: self.message.to_string(),
            action: self.action.to_string(),
            priority: self.priority,
        }
    }
}

pub const MORNING_COLD: &str = "morning-cold";
pub const MORNING_HOT: &str = "morning-hot";
pub const MORNING_RAIN: &str = "morning-rain";
pub const EVENING_WIND: &str = "evening-wind";
pub const HEALTH_HUMIDITY: &str = "health-humidity";
pub const AIR_QUALITY: &str = "air-quality";
pub const PERFECT_WEATHER: &str = "perfect-weather";

const COLD_MORNING: Template = Template {
    id: MORNING_COLD,
    kind: NotificationKind::Warning,
    title: "Chilly Morning",
    message: "Bundle up before heading out! Consider wearing extra layers.",
    action: "Set Reminder",
    priority: Priority::Medium,
};

const WARM_MORNING: Template = Template {
    id: MORNING_HOT,
    kind: NotificationKind::Info,
    title: "Warm Start",
    message: "Perfect weather for morning activities! Don't forget sunscreen.",
    action: "Plan Activity",
    priority: Priority::Low,
};

const RAIN_WARNING: Template = Template {
    id: MORNING_RAIN,
    kind: NotificationKind::Warning,
    title: "Rain Expected",
    message: "Grab an umbrella before leaving home!",
    action: "Weather Radar",
    priority: Priority::High,
};

const WINDY_EVENING: Template = Template {
    id: EVENING_WIND,
    kind: NotificationKind::Warning,
    title: "Windy Evening",
    message: "Strong winds expected. Secure outdoor items.",
    action: "Check Forecast",
    priority: Priority::Medium,
};

const HEAT_INDEX: Template = Template {
    id: HEALTH_HUMIDITY,
    kind: NotificationKind::Warning,
    title: "High Heat Index",
    message: "Hot and humid conditions. Stay hydrated and take breaks.",
    action: "Health Tips",
    priority: Priority::High,
};

const POOR_AIR: Template = Template {
    id: AIR_QUALITY,
    kind: NotificationKind::Warning,
    title: "Poor Air Quality",
    message: "Consider wearing a mask outdoors and limit outdoor exercise.",
    action: "AQI Details",
    priority: Priority::High,
};

const PERFECT: Template = Template {
    id: PERFECT_WEATHER,
    kind: NotificationKind::Success,
    title: "Perfect Weather!",
    message: "Ideal conditions for outdoor activities. Make the most of it!",
    action: "Find Activities",
    priority: Priority::Low,
};

/// Generate notifications for a reading at `hour`.
///
/// `aqi` is optional; the air-quality rule only fires when a score is given.
#[must_use]
pub fn generate(
    reading: &WeatherReading,
    hour: LocalHour,
    aqi: Option<f64>,
) -> Vec<SmartNotification> {
    let mut notifications = Vec::new();
    let temp = reading.temperature;

    if hour.is_morning() {
        if temp < 5.0 {
            notifications.push(COLD_MORNING.build());
        }
        if temp > 25.0 {
            notifications.push(WARM_MORNING.build());
        }
        if reading.condition.is_rain() {
            notifications.push(RAIN_WARNING.build());
        }
    }

    if hour.is_evening() && reading.wind_speed > 15.0 {
        notifications.push(WINDY_EVENING.build());
    }

    if reading.humidity > 85 && temp > 25.0 {
        notifications.push(HEAT_INDEX.build());
    }

    if aqi.is_some_and(|score| score > 150.0) {
        notifications.push(POOR_AIR.build());
    }

    if reading.condition == Condition::Clear && (18.0..=26.0).contains(&temp) {
        notifications.push(PERFECT.build());
    }

    tracing::debug!(%hour, count = notifications.len(), "Generated notifications");
    notifications
}

/// Ids the user has dismissed.
///
/// Regenerating notifications does not touch this set, so an id that
/// reappears stays hidden until [`reset`](Self::reset).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismissedNotifications {
    ids: BTreeSet<String>,
}

impl DismissedNotifications {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dismiss `id`. Returns `false` if it was already dismissed.
    pub fn dismiss(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    #[must_use]
    pub fn is_dismissed(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn reset(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Notifications from `generated` that have not been dismissed
    #[must_use]
    pub fn active<'a>(&self, generated: &'a [SmartNotification]) -> Vec<&'a SmartNotification> {
        generated
            .iter()
            .filter(|n| !self.is_dismissed(&n.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hour(h: u32) -> LocalHour {
        LocalHour::try_from(h).unwrap()
    }

    fn ids(notifications: &[SmartNotification]) -> Vec<&str> {
        notifications.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_cold_rainy_morning() {
        let reading = WeatherReading::new(3.0, 70, 4.0, Condition::from("light rain"));
        let generated = generate(&reading, hour(7), None);
        assert_eq!(ids(&generated), vec![MORNING_COLD, MORNING_RAIN]);

        let rain = &generated[1];
        assert_eq!(rain.kind, NotificationKind::Warning);
        assert_eq!(rain.priority, Priority::High);
        assert_eq!(generated[0].priority, Priority::Medium);
    }

    #[test]
    fn test_dismissal_survives_regeneration() {
        let reading = WeatherReading::new(3.0, 70, 4.0, Condition::from("light rain"));
        let mut dismissed = DismissedNotifications::new();
        assert!(dismissed.dismiss(MORNING_COLD));
        assert!(!dismissed.dismiss(MORNING_COLD));

        let regenerated = generate(&reading, hour(7), None);
        let active: Vec<_> = dismissed
            .active(&regenerated)
            .into_iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(active, vec![MORNING_RAIN]);

        dismissed.reset();
        assert_eq!(dismissed.active(&regenerated).len(), 2);
    }

    #[test]
    fn test_ids_are_stable() {
        let reading = WeatherReading::new(30.0, 90, 20.0, Condition::Clouds);
        assert_eq!(generate(&reading, hour(8), None), generate(&reading, hour(8), None));
    }

    #[rstest]
    #[case(5, false)]
    #[case(6, true)]
    #[case(10, true)]
    #[case(11, false)]
    fn test_morning_window(#[case] h: u32, #[case] fires: bool) {
        let reading = WeatherReading::new(0.0, 50, 2.0, Condition::Clouds);
        let generated = generate(&reading, hour(h), None);
        assert_eq!(ids(&generated).contains(&MORNING_COLD), fires);
    }

    #[rstest]
    #[case(16, false)]
    #[case(17, true)]
    #[case(21, true)]
    #[case(22, false)]
    fn test_evening_window(#[case] h: u32, #[case] fires: bool) {
        let reading = WeatherReading::new(15.0, 50, 16.0, Condition::Clouds);
        let generated = generate(&reading, hour(h), None);
        assert_eq!(ids(&generated) == vec![EVENING_WIND], fires);
    }

    #[test]
    fn test_hour_independent_rules() {
        let muggy = WeatherReading::new(28.0, 90, 2.0, Condition::Clouds);
        assert_eq!(ids(&generate(&muggy, hour(14), None)), vec![HEALTH_HUMIDITY]);

        let perfect = WeatherReading::new(22.0, 50, 2.0, Condition::Clear);
        let generated = generate(&perfect, hour(2), Some(180.0));
        assert_eq!(ids(&generated), vec![AIR_QUALITY, PERFECT_WEATHER]);
        assert_eq!(generated[1].kind, NotificationKind::Success);
    }

    #[test]
    fn test_aqi_rule_needs_score() {
        let reading = WeatherReading::new(15.0, 50, 2.0, Condition::Clouds);
        assert!(generate(&reading, hour(13), None).is_empty());
        assert!(generate(&reading, hour(13), Some(150.0)).is_empty());
        assert_eq!(ids(&generate(&reading, hour(13), Some(151.0))), vec![AIR_QUALITY]);
    }

    #[test]
    fn test_hour_validation() {
        assert!(LocalHour::try_from(23).is_ok());
        let err = LocalHour::try_from(24).unwrap_err();
        assert!(matches!(err, WeatherWaveError::Validation { .. }));
        assert_eq!(hour(7).to_string(), "07:00");
        assert!(LocalHour::now().get() <= 23);
    }
}
