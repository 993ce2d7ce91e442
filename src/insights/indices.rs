//! Environmental index classifiers (UV, air quality, pollen)
//!
//! All three share one shape: a raw score is scanned against an ascending
//! table of inclusive upper bounds and the first match gives the level.
//! Scores below the scale land in the lowest level, scores above it in the
//! highest. The classifiers never generate scores themselves; see
//! [`crate::sources`] for demo data.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::buckets::{Bound, BucketTable, first_match};

/// Common behaviour of an index level
pub trait IndexLevel: Copy {
    /// Level used when no bucket matches
    const TOP: Self;

    /// Human-readable level name
    fn label(self) -> &'static str;
    /// Display color tag
    fn color_tag(self) -> &'static str;
    /// Protective-action advice
    fn advice(self) -> &'static str;
}

/// Classified index score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexResult<L> {
    pub raw_value: f64,
    pub level: L,
    pub label: String,
    pub color_tag: String,
    pub advice: String,
    /// Pollutant concentrations (µg/m³) when the source reports them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<BTreeMap<String, f64>>,
}

impl<L: IndexLevel> IndexResult<L> {
    fn from_level(raw_value: f64, level: L) -> Self {
        Self {
            raw_value,
            level,
            label: level.label().to_string(),
            color_tag: level.color_tag().to_string(),
            advice: level.advice().to_string(),
            components: None,
        }
    }
}

fn classify_with<L: IndexLevel>(table: &BucketTable<L>, value: f64) -> IndexResult<L> {
    let level = first_match(table, value).copied().unwrap_or(L::TOP);
    IndexResult::from_level(value, level)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UvLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

pub const UV_TABLE: &BucketTable<UvLevel> = &[
    (Bound::AtMost(2.0), UvLevel::Low),
    (Bound::AtMost(5.0), UvLevel::Moderate),
    (Bound::AtMost(7.0), UvLevel::High),
    (Bound::AtMost(10.0), UvLevel::VeryHigh),
    (Bound::Otherwise, UvLevel::Extreme),
];

impl IndexLevel for UvLevel {
    const TOP: Self = UvLevel::Extreme;

    fn label(self) -> &'static str {
        match self {
            UvLevel::Low => "Low",
            UvLevel::Moderate => "Moderate",
            UvLevel::High => "High",
            UvLevel::VeryHigh => "Very High",
            UvLevel::Extreme => "Extreme",
        }
    }

    fn color_tag(self) -> &'static str {
        match self {
            UvLevel::Low => "green",
            UvLevel::Moderate => "yellow",
            UvLevel::High => "orange",
            UvLevel::VeryHigh => "red",
            UvLevel::Extreme => "purple",
        }
    }

    fn advice(self) -> &'static str {
        match self {
            UvLevel::Low => "No protection needed. Safe for outdoor activities.",
            UvLevel::Moderate => "Some protection required. Wear sunscreen SPF 15+.",
            UvLevel::High => "Protection essential. SPF 30+, hat, sunglasses.",
            UvLevel::VeryHigh => "Extra protection needed. Avoid sun 10am-4pm.",
            UvLevel::Extreme => "Stay indoors. UV radiation is dangerous.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AqiLevel {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

pub const AQI_TABLE: &BucketTable<AqiLevel> = &[
    (Bound::AtMost(50.0), AqiLevel::Good),
    (Bound::AtMost(100.0), AqiLevel::Moderate),
    (Bound::AtMost(150.0), AqiLevel::UnhealthyForSensitive),
    (Bound::AtMost(200.0), AqiLevel::Unhealthy),
    (Bound::AtMost(300.0), AqiLevel::VeryUnhealthy),
    (Bound::Otherwise, AqiLevel::Hazardous),
];

impl IndexLevel for AqiLevel {
    const TOP: Self = AqiLevel::Hazardous;

    fn label(self) -> &'static str {
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            AqiLevel::Unhealthy => "Unhealthy",
            AqiLevel::VeryUnhealthy => "Very Unhealthy",
            AqiLevel::Hazardous => "Hazardous",
        }
    }

    fn color_tag(self) -> &'static str {
        match self {
            AqiLevel::Good => "green",
            AqiLevel::Moderate => "yellow",
            AqiLevel::UnhealthyForSensitive => "orange",
            AqiLevel::Unhealthy => "red",
            AqiLevel::VeryUnhealthy => "purple",
            AqiLevel::Hazardous => "maroon",
        }
    }

    fn advice(self) -> &'static str {
        match self {
            AqiLevel::Good => "Air quality is excellent. Perfect for outdoor activities.",
            AqiLevel::Moderate => "Air quality is acceptable for most people.",
            AqiLevel::UnhealthyForSensitive => {
                "Sensitive individuals should limit prolonged outdoor exposure."
            }
            AqiLevel::Unhealthy => "Everyone should limit outdoor activities.",
            AqiLevel::VeryUnhealthy => "Health warnings. Everyone should avoid outdoor exposure.",
            AqiLevel::Hazardous => "Emergency conditions. Stay indoors with air purification.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PollenLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

pub const POLLEN_TABLE: &BucketTable<PollenLevel> = &[
    (Bound::AtMost(2.0), PollenLevel::Low),
    (Bound::AtMost(5.0), PollenLevel::Moderate),
    (Bound::AtMost(7.0), PollenLevel::High),
    (Bound::Otherwise, PollenLevel::VeryHigh),
];

impl IndexLevel for PollenLevel {
    const TOP: Self = PollenLevel::VeryHigh;

    fn label(self) -> &'static str {
        match self {
            PollenLevel::Low => "Low",
            PollenLevel::Moderate => "Moderate",
            PollenLevel::High => "High",
            PollenLevel::VeryHigh => "Very High",
        }
    }

    fn color_tag(self) -> &'static str {
        match self {
            PollenLevel::Low => "green",
            PollenLevel::Moderate => "yellow",
            PollenLevel::High => "orange",
            PollenLevel::VeryHigh => "red",
        }
    }

    fn advice(self) -> &'static str {
        match self {
            PollenLevel::Low => "Pollen levels are low. Enjoy the outdoors.",
            PollenLevel::Moderate => "Allergy sufferers may notice mild symptoms.",
            PollenLevel::High => "Allergy sufferers should take precautions outdoors.",
            PollenLevel::VeryHigh => {
                "Keep windows closed and limit time outdoors if you have allergies."
            }
        }
    }
}

/// Classify a UV index score (1-11+ scale)
#[must_use]
pub fn classify_uv(value: f64) -> IndexResult<UvLevel> {
    classify_with(UV_TABLE, value)
}

/// Classify an air quality index score (0-500 scale)
#[must_use]
pub fn classify_aqi(value: f64) -> IndexResult<AqiLevel> {
    classify_with(AQI_TABLE, value)
}

/// Classify an AQI score and attach the pollutant breakdown reported with it
#[must_use]
pub fn classify_aqi_with_components(
    value: f64,
    components: BTreeMap<String, f64>,
) -> IndexResult<AqiLevel> {
    let mut result = classify_aqi(value);
    result.components = Some(components);
    result
}

/// Classify a pollen count (0-10 scale)
#[must_use]
pub fn classify_pollen(value: f64) -> IndexResult<PollenLevel> {
    classify_with(POLLEN_TABLE, value)
}

macro_rules! display_via_label {
    ($($level:ty),*) => {
        $(impl fmt::Display for $level {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        })*
    };
}

display_via_label!(UvLevel, AqiLevel, PollenLevel);
