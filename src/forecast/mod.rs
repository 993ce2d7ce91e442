//! Extended forecast synthesis and summaries
//!
//! Builds a plausible multi-day series around a seasonal base temperature
//! and derives a trend plus weekly highlights from any series. All random
//! draws go through a [`RandomSource`]; the shape of the series (length,
//! dates, ranges) does not depend on the draws.

pub mod calendar;

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Condition, ForecastDay, ForecastRange, ForecastSeries};
use crate::random::RandomSource;
use crate::{Result, WeatherWaveError};

/// Condition weights, scanned cumulatively
const CONDITION_WEIGHTS: [(Condition, f64); 4] = [
    (Condition::Clear, 0.4),
    (Condition::Clouds, 0.3),
    (Condition::Rain, 0.2),
    (Condition::Drizzle, 0.1),
];

/// Days considered by [`highlights`]
pub const HIGHLIGHT_WINDOW: usize = 7;

/// Seasonal base temperature for a month (1-12), northern hemisphere
#[must_use]
pub fn base_temperature(month: u32) -> f64 {
    match month {
        12 | 1 | 2 => 5.0,
        3..=5 => 15.0,
        6..=8 => 25.0,
        _ => 18.0,
    }
}

fn pick_condition(draw: f64) -> Condition {
    let mut cumulative = 0.0;
    for (condition, weight) in &CONDITION_WEIGHTS {
        cumulative += weight;
        if draw <= cumulative {
            return condition.clone();
        }
    }
    Condition::Clear
}

fn precipitation(condition: &Condition, rng: &mut impl RandomSource) -> f64 {
    match condition {
        Condition::Rain => rng.next_unit() * 10.0 + 5.0,
        Condition::Drizzle => rng.next_unit() * 3.0 + 1.0,
        Condition::Clouds if rng.next_unit() > 0.7 => rng.next_unit() * 2.0,
        _ => 0.0,
    }
}

/// Description text for a synthesized day
#[must_use]
pub fn describe(condition: &Condition, precipitation_mm: f64) -> &'static str {
    match condition {
        Condition::Clear => "Clear sky",
        Condition::Clouds if precipitation_mm > 0.0 => "Cloudy skies",
        Condition::Clouds => "Partly cloudy",
        Condition::Rain if precipitation_mm >= 10.0 => "Heavy rain",
        Condition::Rain => "Light rain",
        Condition::Drizzle if precipitation_mm >= 3.0 => "Misty rain",
        Condition::Drizzle => "Light drizzle",
        _ => "Mild weather",
    }
}

fn synthesize_day(date: NaiveDate, base: f64, rng: &mut impl RandomSource) -> ForecastDay {
    let day_temp = base + (rng.next_unit() - 0.5) * 10.0;
    let night_temp = day_temp - (rng.next_unit() * 8.0 + 2.0);
    let condition = pick_condition(rng.next_unit());
    let precipitation_mm = precipitation(&condition, rng);
    let humidity = 40 + rng.next_below(40);
    let wind_speed = rng.next_unit() * 15.0 + 2.0;
    let uv_index = 1 + rng.next_below(8);

    ForecastDay {
        date,
        temp_day: day_temp.round(),
        temp_night: night_temp.round(),
        temp_min: (day_temp.min(night_temp) - 2.0).round(),
        temp_max: (day_temp.max(night_temp) + 2.0).round(),
        // both below 100 by construction
        humidity: humidity as u8,
        wind_speed,
        description: describe(&condition, precipitation_mm).to_string(),
        condition,
        precipitation_mm,
        uv_index: uv_index as u8,
    }
}

/// Synthesize a forecast starting at `today` (index 0)
pub fn synthesize(
    range: ForecastRange,
    today: NaiveDate,
    rng: &mut impl RandomSource,
) -> Result<ForecastSeries> {
    let base = base_temperature(today.month());
    let mut days = Vec::with_capacity(range.days());

    for offset in 0..range.days() {
        let date = today
            .checked_add_days(Days::new(offset as u64))
            .ok_or_else(|| {
                WeatherWaveError::validation(format!("forecast date out of range: {today} + {offset}"))
            })?;
        days.push(synthesize_day(date, base, rng));
    }

    tracing::debug!(days = days.len(), base, "Synthesized forecast");
    ForecastSeries::new(days)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Warming,
    Cooling,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Warming => write!(f, "warming"),
            Trend::Cooling => write!(f, "cooling"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// Compare the first and last daytime temperature
#[must_use]
pub fn trend(series: &ForecastSeries) -> Trend {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Trend::Stable;
    };
    if series.len() < 2 {
        return Trend::Stable;
    }

    match last.temp_day - first.temp_day {
        diff if diff > 3.0 => Trend::Warming,
        diff if diff < -3.0 => Trend::Cooling,
        _ => Trend::Stable,
    }
}

/// A notable day and the value that made it notable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayHighlight {
    pub date: NaiveDate,
    pub value: f64,
}

/// Weekly summary over the first [`HIGHLIGHT_WINDOW`] days
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Highlights {
    pub hottest: Option<DayHighlight>,
    pub coolest: Option<DayHighlight>,
    pub rainiest: Option<DayHighlight>,
    pub high_uv_days: usize,
}

impl Highlights {
    /// Display lines, e.g. `Hottest: 27°C on Tue`
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let (Some(hot), Some(cool)) = (self.hottest, self.coolest) {
            lines.push(format!("Hottest: {:.0}°C on {}", hot.value, hot.date.format("%a")));
            lines.push(format!("Coolest: {:.0}°C on {}", cool.value, cool.date.format("%a")));
        } else {
            return lines;
        }

        match self.rainiest {
            Some(rain) => lines.push(format!(
                "Rainiest: {:.1}mm on {}",
                rain.value,
                rain.date.format("%a")
            )),
            None => lines.push("No rain expected this week".to_string()),
        }

        if self.high_uv_days > 0 {
            lines.push(format!("High UV expected on {} day(s)", self.high_uv_days));
        }
        lines
    }
}

/// First day whose key beats every earlier one under `better`
fn first_extreme(
    days: &[ForecastDay],
    key: impl Fn(&ForecastDay) -> f64,
    better: impl Fn(f64, f64) -> bool,
) -> Option<DayHighlight> {
    days.iter().fold(None, |best: Option<DayHighlight>, day| {
        let value = key(day);
        match best {
            Some(current) if !better(value, current.value) => Some(current),
            _ => Some(DayHighlight {
                date: day.date,
                value,
            }),
        }
    })
}

/// Hottest/coolest by `temp_max`, rainiest wet day, count of UV >= 6 days.
///
/// Ties go to the earliest day.
#[must_use]
pub fn highlights(series: &ForecastSeries) -> Highlights {
    let window = &series.days()[..series.len().min(HIGHLIGHT_WINDOW)];
    let wet: Vec<ForecastDay> = window
        .iter()
        .filter(|d| d.precipitation_mm > 0.0)
        .cloned()
        .collect();

    Highlights {
        hottest: first_extreme(window, |d| d.temp_max, |a, b| a > b),
        coolest: first_extreme(window, |d| d.temp_max, |a, b| a < b),
        rainiest: first_extreme(&wet, |d| d.precipitation_mm, |a, b| a > b),
        high_uv_days: window.iter().filter(|d| d.uv_index >= 6).count(),
    }
}
