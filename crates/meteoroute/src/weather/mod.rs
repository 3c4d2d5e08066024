//! Weather risk scoring for checkpoints.
//!
//! A [`WeatherProvider`] supplies raw [`WeatherMeasurements`] for a place and
//! time. They become five [`WeatherCondition`]s, each scored on a threshold
//! ladder, and a [`WeatherReport`] folds them into one composite score.

mod checkpoint_with_weather;
mod condition;
mod measurements;
mod provider;
mod report;
mod score_category;
mod service;

use thiserror::Error;

pub use checkpoint_with_weather::CheckpointWithWeather;
pub use condition::WeatherCondition;
pub use measurements::{MeasurementError, WeatherMeasurements};
pub use provider::{ProviderError, WeatherProvider};
pub use report::{WeatherReport, composite_score};
pub use score_category::WeatherScoreCategory;
pub use service::WeatherService;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("No weather data for checkpoint ({lat}, {lng})")]
    Unavailable { lat: f64, lng: f64 },

    #[error("Incomplete weather data for checkpoint ({lat}, {lng}): {source}")]
    IncompleteData {
        lat: f64,
        lng: f64,
        source: MeasurementError,
    },

    #[error("Weather provider failed for checkpoint ({lat}, {lng}): {source}")]
    Provider {
        lat: f64,
        lng: f64,
        source: ProviderError,
    },

    #[error("Score must be between 0 and 100, got {0}")]
    ScoreOutOfRange(i32),
}
