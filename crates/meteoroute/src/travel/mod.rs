//! End-to-end route analysis: segmentation, checkpoints, weather enrichment
//! and route-level scores.

mod planner;
mod result;

use thiserror::Error;

use crate::{analysis::AnalysisError, weather::WeatherError};

pub use planner::{TravelOutcome, TravelPlanner};
pub use result::{TravelModeResult, average_score, route_duration};

#[derive(Debug, Error)]
pub enum TravelError {
    #[error("Directions request failed with status {0}")]
    Status(String),

    #[error("Directions response has no routes")]
    NoRoutes,

    #[error("Cannot score a route without checkpoints")]
    EmptyCheckpoints,

    #[error("Invalid route duration: {0}")]
    Duration(#[from] jiff::Error),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Weather(#[from] WeatherError),
}
