//! Temperature / comfort classifier
//!
//! Temperature, humidity and wind are independent axes. Within an axis the
//! first matching bucket wins; every axis is evaluated, so one reading can
//! produce an entry per axis. Each bucket pairs exactly one insight with
//! exactly one recommendation.

use serde::{Deserialize, Serialize};

use super::buckets::{Bound, BucketTable, first_match};
use super::{Insight, InsightCategory, Recommendation};
use crate::models::{Condition, WeatherReading};

/// Fixed insight/recommendation pair attached to a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRule {
    pub insight: &'static str,
    pub recommendation: &'static str,
}

pub const TEMPERATURE_RULES: &BucketTable<AxisRule> = &[
    (
        Bound::Above(35.0),
        AxisRule {
            insight: "Extreme heat warning! Heat stroke risk is high today.",
            recommendation: "Stay indoors during peak hours (10am-4pm), drink water every 15 minutes",
        },
    ),
    (
        Bound::Above(30.0),
        AxisRule {
            insight: "It's quite hot today! Heat index suggests staying hydrated.",
            recommendation: "Wear light, breathable clothing and seek shade during peak hours",
        },
    ),
    (
        Bound::Below(-10.0),
        AxisRule {
            insight: "Extreme cold! Frostbite can occur in minutes of exposure.",
            recommendation: "Limit outdoor time to essentials, cover all exposed skin",
        },
    ),
    (
        Bound::Below(0.0),
        AxisRule {
            insight: "Freezing temperatures detected! Risk of hypothermia if outdoors too long.",
            recommendation: "Layer up with thermal underwear and waterproof outer layers",
        },
    ),
    (
        Bound::Below(10.0),
        AxisRule {
            insight: "Quite chilly today - don't underestimate the cold!",
            recommendation: "Wear warm layers and don't forget gloves and a hat",
        },
    ),
];

pub const HUMIDITY_RULES: &BucketTable<AxisRule> = &[
    (
        Bound::Above(90.0),
        AxisRule {
            insight: "Extremely high humidity - sweat won't evaporate properly!",
            recommendation: "Stay in air-conditioned spaces, avoid strenuous outdoor activities",
        },
    ),
    (
        Bound::Above(80.0),
        AxisRule {
            insight: "Very high humidity levels may cause discomfort and affect cooling.",
            recommendation: "Use air conditioning or fans, and wear moisture-wicking fabrics",
        },
    ),
    (
        Bound::Below(20.0),
        AxisRule {
            insight: "Low humidity detected - your skin and respiratory system may feel dry.",
            recommendation: "Use a humidifier and apply moisturizer regularly",
        },
    ),
    (
        Bound::Below(30.0),
        AxisRule {
            insight: "Dry air conditions - stay hydrated and moisturized.",
            recommendation: "Drink extra water and use lip balm to prevent chapping",
        },
    ),
];

pub const WIND_RULES: &BucketTable<AxisRule> = &[
    (
        Bound::Above(20.0),
        AxisRule {
            insight: "Very strong winds! Potentially dangerous conditions for driving.",
            recommendation: "Avoid high-profile vehicles, secure all outdoor items",
        },
    ),
    (
        Bound::Above(15.0),
        AxisRule {
            insight: "Strong winds detected! This may affect outdoor activities.",
            recommendation: "Secure loose objects, be cautious when driving or walking",
        },
    ),
    (
        Bound::Above(10.0),
        AxisRule {
            insight: "Moderate winds detected! This may affect outdoor activities.",
            recommendation: "Secure loose objects and be cautious when driving or walking",
        },
    ),
];

const RAIN_RULE: AxisRule = AxisRule {
    insight: "Rain expected - visibility may be reduced and roads slippery.",
    recommendation: "Carry an umbrella and drive slowly with headlights on",
};

const SNOW_RULE: AxisRule = AxisRule {
    insight: "Snow conditions - travel times may increase significantly.",
    recommendation: "Allow extra travel time and keep emergency supplies in your car",
};

const CLEAR_RULE: AxisRule = AxisRule {
    insight: "Clear skies provide excellent visibility and pleasant conditions.",
    recommendation: "Perfect weather for outdoor activities - don't forget sunscreen!",
};

const POOR_VISIBILITY_RULE: AxisRule = AxisRule {
    insight: "Poor visibility conditions detected - be extra cautious!",
    recommendation: "Use fog lights when driving and maintain safe following distances",
};

pub const HEAT_HUMIDITY_RECOMMENDATION: &str =
    "High heat and humidity - take frequent breaks if exercising outdoors";

/// Visibility in meters under which the fog rule fires
pub const POOR_VISIBILITY_METERS: f64 = 1000.0;

/// Insights and recommendations for one reading, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComfortReport {
    pub insights: Vec<Insight>,
    pub recommendations: Vec<Recommendation>,
}

impl ComfortReport {
    fn push(&mut self, category: InsightCategory, rule: &AxisRule) {
        self.insights.push(Insight::new(category, rule.insight));
        self.recommendations
            .push(Recommendation::new(category, rule.recommendation));
    }

    /// The temperature-axis insight, if one fired
    #[must_use]
    pub fn temperature_insight(&self) -> Option<&Insight> {
        self.insights
            .iter()
            .find(|i| i.category == InsightCategory::Temperature)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.insights.is_empty() && self.recommendations.is_empty()
    }
}

/// Classify a reading into comfort insights.
///
/// Order: temperature, humidity, wind, sky condition, heat+humidity
/// recommendation, visibility.
#[must_use]
pub fn classify(reading: &WeatherReading) -> ComfortReport {
    let mut report = ComfortReport::default();

    if let Some(rule) = first_match(TEMPERATURE_RULES, reading.temperature) {
        report.push(InsightCategory::Temperature, rule);
    }
    if let Some(rule) = first_match(HUMIDITY_RULES, f64::from(reading.humidity)) {
        report.push(InsightCategory::Humidity, rule);
    }
    if let Some(rule) = first_match(WIND_RULES, reading.wind_speed) {
        report.push(InsightCategory::Wind, rule);
    }

    let sky_rule = match reading.condition {
        Condition::Rain => Some(&RAIN_RULE),
        Condition::Snow => Some(&SNOW_RULE),
        Condition::Clear => Some(&CLEAR_RULE),
        _ => None,
    };
    if let Some(rule) = sky_rule {
        report.push(InsightCategory::Sky, rule);
    }

    if reading.temperature > 25.0 && reading.humidity > 70 {
        report.recommendations.push(Recommendation::new(
            InsightCategory::Health,
            HEAT_HUMIDITY_RECOMMENDATION,
        ));
    }

    // a zero reading means the station reported nothing
    if reading
        .visibility
        .filter(|&meters| meters > 0)
        .is_some_and(|meters| Bound::Below(POOR_VISIBILITY_METERS).matches(f64::from(meters)))
    {
        report.push(InsightCategory::Visibility, &POOR_VISIBILITY_RULE);
    }

    tracing::debug!(
        insights = report.insights.len(),
        recommendations = report.recommendations.len(),
        "Classified comfort insights"
    );
    report
}
