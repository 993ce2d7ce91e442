//! Health advisories
//!
//! Combines the reading with whichever index scores are available.
//! Axes: temperature, UV, air quality, humidity, pollen.

use super::buckets::{Bound, BucketTable, first_match};
use super::{Insight, InsightCategory};
use crate::models::WeatherReading;

const TEMPERATURE: &BucketTable<&str> = &[
    (
        Bound::Above(35.0),
        "Extreme heat warning: Risk of heat stroke. Stay indoors, drink water frequently.",
    ),
    (
        Bound::Above(30.0),
        "High temperature: Take frequent breaks, avoid prolonged sun exposure.",
    ),
    (
        Bound::Below(-5.0),
        "Extreme cold: Risk of frostbite. Limit outdoor exposure, cover all skin.",
    ),
];

const UV: &BucketTable<&str> = &[
    (
        Bound::AtLeast(8.0),
        "Very high UV: Wear SPF 30+, hat, and sunglasses. Seek shade 10am-4pm.",
    ),
    (
        Bound::AtLeast(6.0),
        "High UV: Sunscreen recommended, wear protective clothing.",
    ),
];

const AIR_QUALITY: &BucketTable<&str> = &[
    (
        Bound::Above(150.0),
        "Unhealthy air quality: Wear mask outdoors, limit physical activities.",
    ),
    (
        Bound::Above(100.0),
        "Moderate air quality: Sensitive individuals should limit outdoor exposure.",
    ),
];

const POLLEN: &BucketTable<&str> = &[(
    Bound::AtLeast(8.0),
    "High pollen count: Allergy sufferers should take precautions.",
)];

const MUGGY: &str = "High humidity + heat: Increased risk of dehydration and heat exhaustion.";
const DRY: &str = "Low humidity: May cause dry skin, eyes, and respiratory irritation.";

/// Index scores that accompany a reading; any may be missing
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndexScores {
    pub uv: Option<f64>,
    pub aqi: Option<f64>,
    pub pollen: Option<f64>,
}

fn lookup(table: &BucketTable<&'static str>, value: Option<f64>) -> Option<&'static str> {
    value.and_then(|v| first_match(table, v).copied())
}

/// Health advisories for the reading and scores, in axis order
#[must_use]
pub fn assess(reading: &WeatherReading, scores: IndexScores) -> Vec<Insight> {
    let humidity = if reading.humidity > 85 && reading.temperature > 25.0 {
        Some(MUGGY)
    } else if reading.humidity < 30 {
        Some(DRY)
    } else {
        None
    };

    let advisories: Vec<Insight> = [
        lookup(TEMPERATURE, Some(reading.temperature)),
        lookup(UV, scores.uv),
        lookup(AIR_QUALITY, scores.aqi),
        humidity,
        lookup(POLLEN, scores.pollen),
    ]
    .into_iter()
    .flatten()
    .map(|text| Insight::new(InsightCategory::Health, text))
    .collect();

    tracing::debug!(count = advisories.len(), "Assessed health advisories");
    advisories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Condition;

    fn texts(insights: &[Insight]) -> Vec<&str> {
        insights.iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn test_every_axis_fires_in_order() {
        let reading = WeatherReading::new(36.0, 90, 3.0, Condition::Clear);
        let scores = IndexScores {
            uv: Some(9.0),
            aqi: Some(160.0),
            pollen: Some(8.0),
        };
        let advisories = assess(&reading, scores);
        let prefixes: Vec<_> = texts(&advisories)
            .into_iter()
            .map(|t| t.split(':').next().unwrap_or_default())
            .collect();
        assert_eq!(
            prefixes,
            vec![
                "Extreme heat warning",
                "Very high UV",
                "Unhealthy air quality",
                "High humidity + heat",
                "High pollen count",
            ]
        );
        assert!(advisories.iter().all(|i| i.category == InsightCategory::Health));
    }

    #[test]
    fn test_missing_scores_are_skipped() {
        let reading = WeatherReading::new(20.0, 50, 3.0, Condition::Clouds);
        assert!(assess(&reading, IndexScores::default()).is_empty());
    }

    #[test]
    fn test_second_tier_thresholds() {
        let reading = WeatherReading::new(31.0, 20, 3.0, Condition::Clear);
        let scores = IndexScores {
            uv: Some(6.0),
            aqi: Some(101.0),
            pollen: Some(7.9),
        };
        let advisories = assess(&reading, scores);
        assert_eq!(advisories.len(), 4);
        assert!(advisories[0].text.starts_with("High temperature"));
        assert!(advisories[1].text.starts_with("High UV"));
        assert!(advisories[2].text.starts_with("Moderate air quality"));
        assert!(advisories[3].text.starts_with("Low humidity"));
    }

    #[test]
    fn test_cold_threshold_is_strict() {
        let at_limit = WeatherReading::new(-5.0, 50, 3.0, Condition::Snow);
        assert!(assess(&at_limit, IndexScores::default()).is_empty());

        let below = WeatherReading::new(-5.5, 50, 3.0, Condition::Snow);
        assert_eq!(texts(&assess(&below, IndexScores::default())).len(), 1);
    }
}
