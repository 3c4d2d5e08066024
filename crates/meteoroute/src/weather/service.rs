use rayon::prelude::*;
use tracing::{debug, warn};

use crate::analysis::Checkpoint;

use super::{CheckpointWithWeather, WeatherError, WeatherProvider, WeatherReport};

/// Attaches a weather report to checkpoints using a [`WeatherProvider`].
#[derive(Debug, Clone)]
pub struct WeatherService<P> {
    provider: P,
}

impl<P: WeatherProvider> WeatherService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn enrich(&self, checkpoint: &Checkpoint) -> Result<CheckpointWithWeather, WeatherError> {
        let coordinate = checkpoint.coordinate;
        let (lat, lng) = (coordinate.lat, coordinate.lng);

        let measurements = self
            .provider
            .measurements(coordinate, &checkpoint.arrival_time)
            .map_err(|source| WeatherError::Provider { lat, lng, source })?
            .ok_or(WeatherError::Unavailable { lat, lng })?;

        let report = WeatherReport::from_measurements(&measurements)
            .map_err(|source| WeatherError::IncompleteData { lat, lng, source })?;

        debug!(
            "WeatherService: {} at {} scored {}",
            coordinate,
            checkpoint.arrival_time,
            report.score()
        );

        Ok(CheckpointWithWeather::new(checkpoint.clone(), report))
    }

    /// Enriches every checkpoint in parallel, keeping their order. When some
    /// checkpoints cannot be enriched, the error of the earliest one in route
    /// order is returned.
    pub fn enrich_all(&self, checkpoints: &[Checkpoint]) -> Result<Vec<CheckpointWithWeather>, WeatherError> {
        let results: Vec<_> = checkpoints
            .par_iter()
            .map(|checkpoint| self.enrich(checkpoint))
            .collect();

        results
            .into_iter()
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| warn!("WeatherService: {}", err))
    }
}
