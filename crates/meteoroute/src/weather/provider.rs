use jiff::Zoned;

use crate::directions::Coordinate;

use super::WeatherMeasurements;

pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// Source of raw weather measurements.
///
/// Implementations are called from several threads at once, one call per
/// checkpoint. `Ok(None)` means there is no data for that place and time.
pub trait WeatherProvider: Sync {
    fn measurements(&self, coordinate: Coordinate, arrival: &Zoned) -> Result<Option<WeatherMeasurements>, ProviderError>;
}

impl<P: WeatherProvider + ?Sized> WeatherProvider for &P {
    fn measurements(&self, coordinate: Coordinate, arrival: &Zoned) -> Result<Option<WeatherMeasurements>, ProviderError> {
        (**self).measurements(coordinate, arrival)
    }
}
