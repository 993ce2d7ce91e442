//! Clothing and activity suggestions
//!
//! Rules only ever append. Clothing checks run temperature band, rain,
//! humidity; activity checks run weather band, then hour-of-day band.

use serde::{Deserialize, Serialize};

use super::notifications::LocalHour;
use crate::models::{Condition, WeatherReading};

/// Suggestions for one reading at one hour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityPlan {
    pub clothing: Vec<String>,
    pub activities: Vec<String>,
}

/// Short per-activity verdicts shown as quick tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityImpact {
    pub running: String,
    pub driving: String,
    pub gardening: String,
    pub photography: String,
}

impl ActivityImpact {
    #[must_use]
    pub fn assess(reading: &WeatherReading) -> Self {
        let raining = reading.condition.is_rain();

        let running = match reading.temperature {
            t if t > 30.0 => "Indoor Exercise",
            t if t < 0.0 => "Bundle Up",
            _ => "Perfect for Running",
        };

        let driving = match reading.wind_speed {
            w if w > 10.0 => "Drive Carefully",
            _ if raining => "Use Headlights",
            _ => "Good Driving",
        };

        let gardening = if raining {
            "No Watering Needed"
        } else {
            "Water Plants"
        };

        let photography = if reading.condition == Condition::Clear {
            "Perfect Photos"
        } else {
            "Indoor Photography"
        };

        Self {
            running: running.to_string(),
            driving: driving.to_string(),
            gardening: gardening.to_string(),
            photography: photography.to_string(),
        }
    }
}

fn push_all(target: &mut Vec<String>, lines: &[&str]) {
    target.extend(lines.iter().map(|line| (*line).to_string()));
}

fn clothing(reading: &WeatherReading) -> Vec<String> {
    let mut out = Vec::new();
    let temp = reading.temperature;

    match temp {
        t if t < 0.0 => push_all(
            &mut out,
            &[
                "Heavy winter coat, thermal layers essential",
                "Gloves, scarf, and warm hat are must-haves",
                "Insulated boots to keep feet warm",
            ],
        ),
        t if t < 10.0 => {
            push_all(
                &mut out,
                &["Warm jacket or heavy sweater needed", "Long pants, avoid shorts"],
            );
            if reading.wind_speed > 5.0 {
                push_all(&mut out, &["Scarf recommended due to wind"]);
            }
        }
        t if t < 20.0 => {
            push_all(
                &mut out,
                &["Light jacket or cardigan perfect", "Jeans or long pants comfortable"],
            );
            if (t - reading.feels_like).abs() > 3.0 {
                out.push(format!(
                    "Feels like {:.0}°C, dress accordingly",
                    reading.feels_like.round()
                ));
            }
        }
        t if t < 30.0 => push_all(
            &mut out,
            &[
                "Light clothing, t-shirt or blouse ideal",
                "Shorts or light pants work great",
                "Sunglasses recommended for bright conditions",
            ],
        ),
        _ => push_all(
            &mut out,
            &[
                "Minimal, breathable clothing essential",
                "Hat to protect from intense sun",
                "Stay hydrated, avoid dark colors",
            ],
        ),
    }

    if reading.condition.is_rain() {
        push_all(
            &mut out,
            &[
                "Umbrella essential, waterproof jacket ideal",
                "Waterproof shoes to keep feet dry",
            ],
        );
    }

    if reading.humidity > 80 {
        push_all(&mut out, &["Moisture-wicking fabrics recommended"]);
    }

    out
}

fn activities(reading: &WeatherReading, hour: LocalHour) -> Vec<String> {
    let mut out = Vec::new();
    let temp = reading.temperature;
    let clear = reading.condition == Condition::Clear;

    if clear && (18.0..=26.0).contains(&temp) {
        push_all(
            &mut out,
            &[
                "Perfect weather for outdoor jogging or cycling",
                "Ideal conditions for a picnic in the park",
                "Great lighting for outdoor photography",
            ],
        );
    } else if reading.condition.is_rain() {
        push_all(
            &mut out,
            &[
                "Cozy indoor activities: coffee shop, museum, reading",
                "Indoor workout session at home or gym",
                "Perfect movie marathon weather",
            ],
        );
    } else if temp > 30.0 {
        push_all(
            &mut out,
            &[
                "Swimming or water activities to cool down",
                "Indoor shopping malls for air conditioning",
                "Seek shaded parks for outdoor activities",
            ],
        );
    } else if temp < 5.0 {
        push_all(
            &mut out,
            &[
                "Indoor activities: cooking, board games, crafts",
                "Hot beverages and warm indoor spaces",
                "Reading by a warm fireplace",
            ],
        );
    }

    if hour.is_morning() {
        if temp >= 15.0 && clear {
            push_all(&mut out, &["Morning walk to start the day energized"]);
        }
        push_all(&mut out, &["Morning coffee with weather check"]);
    } else if hour.is_evening() && reading.wind_speed < 10.0 && temp >= 12.0 {
        push_all(&mut out, &["Evening stroll to unwind"]);
    }

    out
}

/// Build clothing and activity suggestions for `reading` at `hour`
#[must_use]
pub fn recommend(reading: &WeatherReading, hour: LocalHour) -> ActivityPlan {
    let plan = ActivityPlan {
        clothing: clothing(reading),
        activities: activities(reading, hour),
    };
    tracing::debug!(
        clothing = plan.clothing.len(),
        activities = plan.activities.len(),
        "Built activity plan"
    );
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hour(h: u32) -> LocalHour {
        LocalHour::try_from(h).unwrap()
    }

    #[rstest]
    #[case(-5.0, "Heavy winter coat")]
    #[case(5.0, "Warm jacket")]
    #[case(15.0, "Light jacket")]
    #[case(25.0, "Light clothing")]
    #[case(35.0, "Minimal, breathable")]
    fn test_clothing_band(#[case] temperature: f64, #[case] first: &str) {
        let reading = WeatherReading::new(temperature, 50, 2.0, Condition::Clouds);
        let plan = recommend(&reading, hour(13));
        assert!(plan.clothing[0].starts_with(first));
    }

    #[test]
    fn test_clothing_rules_concatenate() {
        let reading = WeatherReading::new(5.0, 90, 8.0, Condition::Rain);
        let plan = recommend(&reading, hour(13));
        assert_eq!(
            plan.clothing,
            vec![
                "Warm jacket or heavy sweater needed",
                "Long pants, avoid shorts",
                "Scarf recommended due to wind",
                "Umbrella essential, waterproof jacket ideal",
                "Waterproof shoes to keep feet dry",
                "Moisture-wicking fabrics recommended",
            ]
        );
    }

    #[test]
    fn test_feels_like_note() {
        let reading = WeatherReading::new(15.0, 50, 2.0, Condition::Clouds).with_feels_like(10.6);
        let plan = recommend(&reading, hour(13));
        assert_eq!(plan.clothing.last().map(String::as_str), Some("Feels like 11°C, dress accordingly"));

        let close = WeatherReading::new(15.0, 50, 2.0, Condition::Clouds).with_feels_like(13.0);
        assert_eq!(recommend(&close, hour(13)).clothing.len(), 2);
    }

    #[test]
    fn test_clear_morning() {
        let reading = WeatherReading::new(20.0, 50, 2.0, Condition::Clear);
        let plan = recommend(&reading, hour(8));
        assert_eq!(plan.activities.len(), 5);
        assert_eq!(plan.activities[3], "Morning walk to start the day energized");
        assert_eq!(plan.activities[4], "Morning coffee with weather check");
    }

    #[rstest]
    #[case(21, 5.0, 14.0, true)]
    #[case(22, 5.0, 14.0, false)]
    #[case(18, 12.0, 14.0, false)]
    #[case(18, 5.0, 11.0, false)]
    fn test_evening_stroll(
        #[case] h: u32,
        #[case] wind: f64,
        #[case] temperature: f64,
        #[case] expected: bool,
    ) {
        let reading = WeatherReading::new(temperature, 50, wind, Condition::Clouds);
        let plan = recommend(&reading, hour(h));
        assert_eq!(plan.activities.contains(&"Evening stroll to unwind".to_string()), expected);
    }

    #[test]
    fn test_rain_beats_heat_band() {
        let reading = WeatherReading::new(32.0, 60, 2.0, Condition::Rain);
        let plan = recommend(&reading, hour(13));
        assert!(plan.activities[0].starts_with("Cozy indoor"));
        assert_eq!(plan.activities.len(), 3);
    }

    #[test]
    fn test_activity_impact() {
        let hot = ActivityImpact::assess(&WeatherReading::new(32.0, 40, 12.0, Condition::Clear));
        assert_eq!(hot.running, "Indoor Exercise");
        assert_eq!(hot.driving, "Drive Carefully");
        assert_eq!(hot.gardening, "Water Plants");
        assert_eq!(hot.photography, "Perfect Photos");

        let wet = ActivityImpact::assess(&WeatherReading::new(-2.0, 90, 3.0, Condition::Rain));
        assert_eq!(wet.running, "Bundle Up");
        assert_eq!(wet.driving, "Use Headlights");
        assert_eq!(wet.gardening, "No Watering Needed");
        assert_eq!(wet.photography, "Indoor Photography");
    }
}
