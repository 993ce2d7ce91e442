//! Weather calendar events derived from a forecast series

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Condition, ForecastDay, ForecastSeries};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Reminder,
    Suggestion,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherEvent {
    /// `{rule}-{day index}`, stable for the same series
    pub id: String,
    pub kind: EventKind,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub condition: Condition,
    pub temperature: f64,
}

struct EventRule {
    prefix: &'static str,
    kind: EventKind,
    title: &'static str,
    description: &'static str,
    applies: fn(&ForecastDay) -> bool,
}

const RULES: [EventRule; 5] = [
    EventRule {
        prefix: "rain",
        kind: EventKind::Reminder,
        title: "Rain Expected - Take Umbrella",
        description: "Don't forget your umbrella and raincoat!",
        applies: |day| day.condition.is_rain(),
    },
    EventRule {
        prefix: "sunny",
        kind: EventKind::Suggestion,
        title: "Perfect Weather for Outdoor Activities",
        description: "Great day for hiking, picnics, or sports!",
        applies: |day| day.condition == Condition::Clear && day.temp_max > 25.0,
    },
    EventRule {
        prefix: "storm",
        kind: EventKind::Warning,
        title: "Storm Warning - Stay Indoors",
        description: "Severe weather expected. Avoid unnecessary travel.",
        applies: |day| day.condition == Condition::Thunderstorm,
    },
    EventRule {
        prefix: "freeze",
        kind: EventKind::Warning,
        title: "Freezing Alert - Protect Pipes",
        description: "Temperature below freezing. Check heating and pipes.",
        applies: |day| day.temp_min < 0.0,
    },
    EventRule {
        prefix: "heat",
        kind: EventKind::Warning,
        title: "Heat Advisory - Stay Hydrated",
        description: "High temperatures expected. Drink plenty of water.",
        applies: |day| day.temp_max > 30.0,
    },
];

/// Events for every day of `series`, grouped by day in date order
#[must_use]
pub fn events(series: &ForecastSeries) -> Vec<WeatherEvent> {
    let mut events = Vec::new();

    for (index, day) in series.days().iter().enumerate() {
        for rule in RULES.iter().filter(|rule| (rule.applies)(day)) {
            events.push(WeatherEvent {
                id: format!("{}-{index}", rule.prefix),
                kind: rule.kind,
                title: rule.title.to_string(),
                description: rule.description.to_string(),
                date: day.date,
                condition: day.condition.clone(),
                temperature: day.temp_day,
            });
        }
    }

    tracing::debug!(count = events.len(), "Derived calendar events");
    events
}

/// Events scheduled on `date`
#[must_use]
pub fn events_on(events: &[WeatherEvent], date: NaiveDate) -> Vec<&WeatherEvent> {
    events.iter().filter(|e| e.date == date).collect()
}
