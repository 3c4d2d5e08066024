use jiff::Zoned;
use serde::Serialize;

use crate::{analysis::Checkpoint, directions::Coordinate};

use super::{WeatherReport, WeatherScoreCategory};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointWithWeather {
    pub checkpoint: Checkpoint,
    pub report: WeatherReport,
}

impl CheckpointWithWeather {
    pub fn new(checkpoint: Checkpoint, report: WeatherReport) -> Self {
        Self { checkpoint, report }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.checkpoint.coordinate
    }

    pub fn arrival_time(&self) -> &Zoned {
        &self.checkpoint.arrival_time
    }

    pub fn score(&self) -> u8 {
        self.report.score()
    }

    pub fn category(&self) -> WeatherScoreCategory {
        self.report.category()
    }
}
