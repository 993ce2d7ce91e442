//! One-call evaluation of every insight classifier
//!
//! The engine holds no state. It exists so callers get every classifier's
//! output for a reading in one bundle, and so the "no reading yet" case has
//! a single explicit answer (an empty bundle).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::insights::{
    self, ActivityImpact, ActivityPlan, Alert, AqiLevel, ComfortReport, IndexResult, IndexScores,
    Insight, LocalHour, PollenLevel, SmartNotification, UvLevel, indices,
};
use crate::models::WeatherReading;

/// Caller-supplied inputs besides the reading itself
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationContext {
    pub hour: LocalHour,
    pub generated_at: DateTime<Utc>,
    pub uv: Option<f64>,
    pub aqi: Option<f64>,
    pub aqi_components: Option<BTreeMap<String, f64>>,
    pub pollen: Option<f64>,
}

impl EvaluationContext {
    /// Context without any index scores
    #[must_use]
    pub fn new(hour: LocalHour, generated_at: DateTime<Utc>) -> Self {
        Self {
            hour,
            generated_at,
            uv: None,
            aqi: None,
            aqi_components: None,
            pollen: None,
        }
    }

    /// Context for the current local hour and time
    #[must_use]
    pub fn now() -> Self {
        Self::new(LocalHour::now(), Utc::now())
    }

    #[must_use]
    pub fn with_uv(mut self, uv: f64) -> Self {
        self.uv = Some(uv);
        self
    }

    #[must_use]
    pub fn with_aqi(mut self, aqi: f64, components: Option<BTreeMap<String, f64>>) -> Self {
        self.aqi = Some(aqi);
        self.aqi_components = components;
        self
    }

    #[must_use]
    pub fn with_pollen(mut self, pollen: f64) -> Self {
        self.pollen = Some(pollen);
        self
    }

    fn scores(&self) -> IndexScores {
        IndexScores {
            uv: self.uv,
            aqi: self.aqi,
            pollen: self.pollen,
        }
    }
}

/// Every classifier's output for one reading
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightBundle {
    pub comfort: ComfortReport,
    pub alerts: Vec<Alert>,
    pub uv: Option<IndexResult<UvLevel>>,
    pub air_quality: Option<IndexResult<AqiLevel>>,
    pub pollen: Option<IndexResult<PollenLevel>>,
    pub notifications: Vec<SmartNotification>,
    pub activities: ActivityPlan,
    pub impact: Option<ActivityImpact>,
    pub health: Vec<Insight>,
}

impl InsightBundle {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InsightEngine;

impl InsightEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Run every classifier against `reading`
    #[must_use]
    pub fn evaluate(&self, reading: &WeatherReading, context: &EvaluationContext) -> InsightBundle {
        let air_quality = context.aqi.map(|aqi| match &context.aqi_components {
            Some(components) => indices::classify_aqi_with_components(aqi, components.clone()),
            None => indices::classify_aqi(aqi),
        });

        let bundle = InsightBundle {
            comfort: insights::comfort::classify(reading),
            alerts: insights::alerts::classify(reading, context.generated_at),
            uv: context.uv.map(indices::classify_uv),
            air_quality,
            pollen: context.pollen.map(indices::classify_pollen),
            notifications: insights::notifications::generate(reading, context.hour, context.aqi),
            activities: insights::activities::recommend(reading, context.hour),
            impact: Some(ActivityImpact::assess(reading)),
            health: insights::health::assess(reading, context.scores()),
        };

        tracing::info!(
            hour = %context.hour,
            alerts = bundle.alerts.len(),
            notifications = bundle.notifications.len(),
            "Evaluated insights"
        );
        bundle
    }

    /// Evaluate when a reading is present; an absent reading yields an empty bundle
    #[must_use]
    pub fn evaluate_optional(
        &self,
        reading: Option<&WeatherReading>,
        context: &EvaluationContext,
    ) -> InsightBundle {
        match reading {
            Some(reading) => self.evaluate(reading, context),
            None => {
                tracing::debug!("No reading available, returning empty insights");
                InsightBundle::default()
            }
        }
    }
}
