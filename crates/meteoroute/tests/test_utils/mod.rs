use jiff::{
    Zoned,
    civil::date,
    tz::{TimeZone, offset},
};
use meteoroute::{
    directions::{Coordinate, DirectionsResponse},
    weather::{ProviderError, WeatherMeasurements, WeatherProvider},
};

pub fn directions() -> DirectionsResponse {
    serde_json::from_str(include_str!("../fixtures/directions.json")).unwrap()
}

pub fn departure() -> Zoned {
    date(2024, 2, 3)
        .at(7, 30, 0, 0)
        .to_zoned(TimeZone::fixed(offset(1)))
        .unwrap()
}

/// Dry until `rain_from`, then steady rain with a low freezing level.
pub struct WorseningWeather {
    pub rain_from: Zoned,
}

impl WeatherProvider for WorseningWeather {
    fn measurements(&self, _coordinate: Coordinate, arrival: &Zoned) -> Result<Option<WeatherMeasurements>, ProviderError> {
        let measurements = if arrival < &self.rain_from {
            WeatherMeasurements::new(2_400.0, 0.0, 0.0, 24_000.0, 8.0)
        } else {
            WeatherMeasurements::new(900.0, 4.5, 0.0, 6_000.0, 22.0)
        };

        Ok(Some(measurements))
    }
}

/// Fails for points west of `lng`.
pub struct FailingWest {
    pub lng: f64,
}

impl WeatherProvider for FailingWest {
    fn measurements(&self, coordinate: Coordinate, _arrival: &Zoned) -> Result<Option<WeatherMeasurements>, ProviderError> {
        if coordinate.lng < self.lng {
            return Err("station offline".into());
        }

        Ok(Some(WeatherMeasurements::new(2_400.0, 0.0, 0.0, 24_000.0, 8.0)))
    }
}
