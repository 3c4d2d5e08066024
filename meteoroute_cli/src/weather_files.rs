use std::path::Path;

use jiff::{
    RoundMode, Unit, Zoned, ZonedRound,
    civil::DateTime,
    tz::{Offset, TimeZone},
};
use meteoroute::{
    directions::Coordinate,
    geo_math,
    meters::Meters,
    weather::{ProviderError, WeatherMeasurements, WeatherProvider},
};
use rstar::{RTree, primitives::GeomWithData};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::file_utils::{read_folder, read_json};

const SAMPLE_MINUTES: i64 = 15;

/// Quarter-hourly series of a forecast response. `null` entries are gaps.
#[derive(Debug, Deserialize)]
pub struct QuarterHourly {
    /// Local time at the forecast's UTC offset.
    pub time: Vec<DateTime>,
    pub precipitation: Vec<Option<f64>>,
    pub snowfall: Vec<Option<f64>>,
    pub freezing_level_height: Vec<Option<f64>>,
    pub wind_gusts_10m: Vec<Option<f64>>,
    pub visibility: Vec<Option<f64>>,
}

/// A saved forecast response for one location.
#[derive(Debug, Deserialize)]
pub struct Forecast {
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset_seconds: i32,
    pub minutely_15: QuarterHourly,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ForecastDocument {
    Single(Forecast),
    Many(Vec<Forecast>),
}

impl Forecast {
    pub fn location(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Measurements of the quarter hour closest to `arrival`, or `None` when
    /// the forecast does not cover that time.
    pub fn measurements_at(&self, arrival: &Zoned) -> Result<Option<WeatherMeasurements>, jiff::Error> {
        let offset = Offset::from_seconds(self.utc_offset_seconds)?;
        let local = arrival
            .with_time_zone(TimeZone::fixed(offset))
            .round(
                ZonedRound::new()
                    .smallest(Unit::Minute)
                    .increment(SAMPLE_MINUTES)
                    .mode(RoundMode::HalfExpand),
            )?
            .datetime();

        let series = &self.minutely_15;
        let Some(index) = series.time.iter().position(|time| *time == local) else {
            return Ok(None);
        };

        let at = |values: &[Option<f64>]| values.get(index).copied().flatten();

        Ok(Some(WeatherMeasurements {
            freezing_level_height: at(&series.freezing_level_height),
            precipitation: at(&series.precipitation),
            snowfall: at(&series.snowfall),
            visibility: at(&series.visibility),
            wind_gusts: at(&series.wind_gusts_10m),
        }))
    }
}

type ForecastLocation = GeomWithData<[f64; 2], usize>;

/// Weather provider backed by saved forecast responses, answering each
/// checkpoint from the closest forecast location.
pub struct ForecastIndex {
    forecasts: Vec<Forecast>,
    tree: RTree<ForecastLocation>,
    max_distance: Meters,
}

impl ForecastIndex {
    pub fn new(forecasts: Vec<Forecast>, max_distance: Meters) -> Self {
        let tree = RTree::bulk_load(
            forecasts
                .iter()
                .enumerate()
                .map(|(index, forecast)| ForecastLocation::new([forecast.longitude, forecast.latitude], index))
                .collect(),
        );

        Self {
            forecasts,
            tree,
            max_distance,
        }
    }

    /// Loads one response file, or every `.json` response under a folder.
    pub fn load(path: &Path, max_distance: Meters) -> Result<Self, anyhow::Error> {
        let paths = if path.is_file() {
            vec![path.to_path_buf()]
        } else {
            read_folder(path)?
        };

        let mut forecasts = Vec::new();
        for path in &paths {
            match read_json::<ForecastDocument>(path)? {
                ForecastDocument::Single(forecast) => forecasts.push(forecast),
                ForecastDocument::Many(many) => forecasts.extend(many),
            }
        }

        let index = Self::new(forecasts, max_distance);
        if index.is_empty() {
            warn!("No forecast found in {}", path.display());
        }
        info!("Loaded {} forecast locations from {} files", index.len(), paths.len());

        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.forecasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecasts.is_empty()
    }

    /// Closest forecast in degree space, if within the maximum distance.
    pub fn nearest(&self, coordinate: Coordinate) -> Option<&Forecast> {
        let location = self.tree.nearest_neighbor(&[coordinate.lng, coordinate.lat])?;
        let forecast = &self.forecasts[location.data];

        let distance = geo_math::distance(&coordinate, &forecast.location());
        if distance > self.max_distance {
            debug!("Closest forecast to {} is {} away", coordinate, distance);
            return None;
        }

        Some(forecast)
    }
}

impl WeatherProvider for ForecastIndex {
    fn measurements(&self, coordinate: Coordinate, arrival: &Zoned) -> Result<Option<WeatherMeasurements>, ProviderError> {
        match self.nearest(coordinate) {
            Some(forecast) => Ok(forecast.measurements_at(arrival)?),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use jiff::{civil::date, tz::offset};

    use super::*;

    fn index() -> ForecastIndex {
        let folder = env::current_dir().unwrap().join("tests/fixtures/weather");
        ForecastIndex::load(&folder, Meters::new(50_000.0)).unwrap()
    }

    fn at(hour: i8, minute: i8) -> Zoned {
        date(2024, 2, 3)
            .at(hour, minute, 0, 0)
            .to_zoned(TimeZone::fixed(offset(1)))
            .unwrap()
    }

    #[test]
    fn test_load_folder() {
        assert_eq!(index().len(), 3);
    }

    #[test]
    fn test_load_single_file() {
        let path = env::current_dir().unwrap().join("tests/fixtures/weather/bologna.json");

        let index = ForecastIndex::load(&path, Meters::new(50_000.0)).unwrap();

        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_nearest() {
        let index = index();

        let forecast = index.nearest(Coordinate::new(44.25, 12.0)).unwrap();
        assert_eq!(forecast.location(), Coordinate::new(44.22, 12.04));

        let forecast = index.nearest(Coordinate::new(44.48, 11.3)).unwrap();
        assert_eq!(forecast.location(), Coordinate::new(44.5, 11.34));
    }

    #[test]
    fn test_too_far() {
        // Florence, ~80 km from the closest forecast.
        assert!(index().nearest(Coordinate::new(43.77, 11.25)).is_none());
    }

    #[test]
    fn test_rounds_to_quarter_hour() {
        let index = index();
        let bologna = index.nearest(Coordinate::new(44.5, 11.34)).unwrap();

        // 07:52 rounds to 07:45, still dry.
        let dry = bologna.measurements_at(&at(7, 52)).unwrap().unwrap();
        assert_eq!(dry.precipitation, Some(0.0));

        // 07:53 rounds to 08:00, when the rain starts.
        let wet = bologna.measurements_at(&at(7, 53)).unwrap().unwrap();
        assert_eq!(wet.precipitation, Some(4.5));
        assert_eq!(wet.freezing_level_height, Some(900.0));
    }

    #[test]
    fn test_converts_to_forecast_offset() {
        let index = index();
        let bologna = index.nearest(Coordinate::new(44.5, 11.34)).unwrap();
        let utc = date(2024, 2, 3).at(7, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();

        // 07:00 UTC is 08:00 at the forecast offset.
        let measurements = bologna.measurements_at(&utc).unwrap().unwrap();
        assert_eq!(measurements.precipitation, Some(4.5));
    }

    #[test]
    fn test_gap_is_missing_measurement() {
        let index = index();
        let bologna = index.nearest(Coordinate::new(44.5, 11.34)).unwrap();

        let measurements = bologna.measurements_at(&at(12, 0)).unwrap().unwrap();

        assert_eq!(measurements.visibility, None);
        assert!(measurements.conditions().is_err());
    }

    #[test]
    fn test_outside_forecast_window() {
        let index = index();
        let bologna = index.nearest(Coordinate::new(44.5, 11.34)).unwrap();
        let next_day = date(2024, 2, 4)
            .at(10, 0, 0, 0)
            .to_zoned(TimeZone::fixed(offset(1)))
            .unwrap();

        assert!(bologna.measurements_at(&next_day).unwrap().is_none());
    }

    #[test]
    fn test_provider() {
        let index = index();

        assert!(index.measurements(Coordinate::new(44.23, 12.03), &at(9, 0)).unwrap().is_some());
        assert!(index.measurements(Coordinate::new(43.77, 11.25), &at(9, 0)).unwrap().is_none());
    }
}
