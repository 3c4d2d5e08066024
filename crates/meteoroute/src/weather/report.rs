use serde::Serialize;

use super::{MeasurementError, WeatherCondition, WeatherMeasurements, WeatherScoreCategory};

pub const BEST_SCORE: u8 = 100;

/// The scored conditions at one checkpoint and their composite score.
///
/// The score is computed once, when the report is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    conditions: Vec<WeatherCondition>,
    score: u8,
}

impl WeatherReport {
    pub fn new(conditions: Vec<WeatherCondition>) -> Self {
        let score = composite_score(&conditions);
        Self { conditions, score }
    }

    pub fn from_measurements(measurements: &WeatherMeasurements) -> Result<Self, MeasurementError> {
        Ok(Self::new(measurements.conditions()?))
    }

    pub fn conditions(&self) -> &[WeatherCondition] {
        &self.conditions
    }

    /// 100 is the best possible weather, 0 the worst.
    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn category(&self) -> WeatherScoreCategory {
        WeatherScoreCategory::for_score(self.score)
    }
}

/// `(1 - Σ weighted / Σ worst weighted) * 100`, rounded and clamped to
/// `0..=100`. No conditions means the best score.
pub fn composite_score(conditions: &[WeatherCondition]) -> u8 {
    let worst: f64 = conditions.iter().map(WeatherCondition::worst_weighted_score).sum();
    if worst <= 0.0 {
        return BEST_SCORE;
    }

    let raw: f64 = conditions.iter().map(WeatherCondition::weighted_score).sum();
    let score = ((1.0 - raw / worst) * 100.0).round();

    score.clamp(0.0, f64::from(BEST_SCORE)) as u8
}
