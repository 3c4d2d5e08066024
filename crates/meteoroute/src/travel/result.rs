use jiff::{SignedDuration, Zoned};
use serde::Serialize;

use crate::{
    directions::{Route, hours_minutes},
    weather::{CheckpointWithWeather, WeatherScoreCategory},
};

use super::TravelError;

/// Outcome of one analyzed route.
///
/// `duration` comes from the route legs, not from the checkpoints, so it can
/// differ slightly from `arrival_time - departure`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelModeResult {
    checkpoints: Vec<CheckpointWithWeather>,
    summary: String,
    duration: SignedDuration,
    arrival_time: Zoned,
    polyline: String,
    average_score: u8,
}

impl TravelModeResult {
    pub fn new(
        checkpoints: Vec<CheckpointWithWeather>,
        summary: impl Into<String>,
        duration: SignedDuration,
        polyline: impl Into<String>,
    ) -> Result<Self, TravelError> {
        let average_score = average_score(&checkpoints)?;
        let arrival_time = checkpoints
            .last()
            .map(|checkpoint| checkpoint.arrival_time().clone())
            .ok_or(TravelError::EmptyCheckpoints)?;

        Ok(Self {
            checkpoints,
            summary: summary.into(),
            duration,
            arrival_time,
            polyline: polyline.into(),
            average_score,
        })
    }

    pub fn checkpoints(&self) -> &[CheckpointWithWeather] {
        &self.checkpoints
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn duration(&self) -> SignedDuration {
        self.duration
    }

    pub fn arrival_time(&self) -> &Zoned {
        &self.arrival_time
    }

    pub fn polyline(&self) -> &str {
        &self.polyline
    }

    pub fn average_score(&self) -> u8 {
        self.average_score
    }

    pub fn category(&self) -> WeatherScoreCategory {
        WeatherScoreCategory::for_score(self.average_score)
    }

    /// e.g. `"2 h 5 min"`.
    pub fn duration_text(&self) -> String {
        hours_minutes(self.duration.as_secs())
    }
}

/// Mean checkpoint score, rounded.
pub fn average_score(checkpoints: &[CheckpointWithWeather]) -> Result<u8, TravelError> {
    if checkpoints.is_empty() {
        return Err(TravelError::EmptyCheckpoints);
    }

    let total: u32 = checkpoints.iter().map(|c| u32::from(c.score())).sum();
    let mean = f64::from(total) / checkpoints.len() as f64;

    Ok(mean.round() as u8)
}

/// Sum of the leg durations as reported by the directions service,
/// truncated to whole seconds.
pub fn route_duration(route: &Route) -> Result<SignedDuration, TravelError> {
    let seconds: f64 = route.legs.iter().map(|leg| leg.duration_value()).sum();
    Ok(SignedDuration::try_from_secs_f64(seconds.trunc())?)
}
