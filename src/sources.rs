//! Simulated UV, air quality and pollen scores
//!
//! The dashboard shows index tiles even without a UV/AQI/pollen API, so the
//! demo scores are drawn here and handed to the classifiers like any other
//! score.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::insights::IndexScores;
use crate::random::RandomSource;

/// One draw of every index score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSample {
    pub uv: f64,
    pub aqi: f64,
    /// Pollutant concentrations in µg/m³ keyed by pollutant
    pub components: BTreeMap<String, f64>,
    pub pollen: f64,
}

impl IndexSample {
    #[must_use]
    pub fn scores(&self) -> IndexScores {
        IndexScores {
            uv: Some(self.uv),
            aqi: Some(self.aqi),
            pollen: Some(self.pollen),
        }
    }
}

/// Seasonal pollen baseline for a month (1-12)
#[must_use]
pub fn pollen_baseline(month: u32) -> u32 {
    match month {
        3..=6 => 8,
        7..=9 => 6,
        10 | 11 => 4,
        _ => 1,
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedIndices<R> {
    rng: R,
}

impl<R: RandomSource> SimulatedIndices<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// UV index 1-11
    pub fn uv(&mut self) -> f64 {
        f64::from(self.rng.next_below(11) + 1)
    }

    /// AQI 1-300 with a pollutant breakdown
    pub fn air_quality(&mut self) -> (f64, BTreeMap<String, f64>) {
        let aqi = f64::from(self.rng.next_below(300) + 1);
        let mut components = BTreeMap::new();
        for (pollutant, span, floor) in [
            ("pm2_5", 50, 10),
            ("pm10", 100, 20),
            ("no2", 200, 50),
            ("o3", 300, 100),
        ] {
            let value = self.rng.next_below(span) + floor;
            components.insert(pollutant.to_string(), f64::from(value));
        }
        (aqi, components)
    }

    /// Pollen count 1-10 around the seasonal baseline for `month`
    pub fn pollen(&mut self, month: u32) -> f64 {
        let count = (pollen_baseline(month) + self.rng.next_below(5)).min(10);
        f64::from(count)
    }

    pub fn sample(&mut self, today: NaiveDate) -> IndexSample {
        let uv = self.uv();
        let (aqi, components) = self.air_quality();
        let pollen = self.pollen(today.month());
        tracing::debug!(uv, aqi, pollen, "Drew simulated index scores");
        IndexSample {
            uv,
            aqi,
            components,
            pollen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedSequence, SeededRandom};
    use rstest::rstest;

    #[rstest]
    #[case(1, 1)]
    #[case(3, 8)]
    #[case(6, 8)]
    #[case(8, 6)]
    #[case(10, 4)]
    #[case(12, 1)]
    fn test_pollen_baseline(#[case] month: u32, #[case] expected: u32) {
        assert_eq!(pollen_baseline(month), expected);
    }

    #[test]
    fn test_extreme_draws() {
        let mut low = SimulatedIndices::new(FixedSequence::constant(0.0));
        assert_eq!(low.uv(), 1.0);
        let (aqi, components) = low.air_quality();
        assert_eq!(aqi, 1.0);
        assert_eq!(components["pm2_5"], 10.0);
        assert_eq!(components["o3"], 100.0);

        let mut high = SimulatedIndices::new(FixedSequence::constant(1.0));
        assert_eq!(high.uv(), 11.0);
        assert_eq!(high.air_quality().0, 300.0);
        assert_eq!(high.pollen(4), 10.0);
        assert_eq!(high.pollen(1), 5.0);
    }

    #[test]
    fn test_sample_in_range() {
        let mut source = SimulatedIndices::new(SeededRandom::new(3));
        let today = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();
        for _ in 0..50 {
            let sample = source.sample(today);
            assert!((1.0..=11.0).contains(&sample.uv));
            assert!((1.0..=300.0).contains(&sample.aqi));
            assert!((8.0..=10.0).contains(&sample.pollen));
            assert_eq!(sample.components.len(), 4);
            assert_eq!(sample.scores().aqi, Some(sample.aqi));
        }
    }
}
