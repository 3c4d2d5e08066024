use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::WeatherCondition;

pub const MIN_FREEZING_LEVEL_HEIGHT: f64 = -500.0;

#[derive(Debug, Error, PartialEq)]
pub enum MeasurementError {
    #[error("Missing {0}")]
    Missing(&'static str),

    #[error("{name} is not a finite number: {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("{name} {value} is below the minimum of {minimum}")]
    BelowMinimum {
        name: &'static str,
        value: f64,
        minimum: f64,
    },
}

/// Raw measurements for one place and time, as a weather service reports them.
///
/// Every field is required for scoring; `None` is a gap in the upstream data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct WeatherMeasurements {
    /// Meters above sea level.
    pub freezing_level_height: Option<f64>,
    /// Millimeters over the last hour.
    pub precipitation: Option<f64>,
    /// Centimeters over the last hour.
    pub snowfall: Option<f64>,
    /// Meters.
    pub visibility: Option<f64>,
    /// km/h.
    pub wind_gusts: Option<f64>,
}

impl WeatherMeasurements {
    pub fn new(
        freezing_level_height: f64,
        precipitation: f64,
        snowfall: f64,
        visibility: f64,
        wind_gusts: f64,
    ) -> Self {
        Self {
            freezing_level_height: Some(freezing_level_height),
            precipitation: Some(precipitation),
            snowfall: Some(snowfall),
            visibility: Some(visibility),
            wind_gusts: Some(wind_gusts),
        }
    }

    /// Validates every measurement and builds the five conditions, in report
    /// order.
    pub fn conditions(&self) -> Result<Vec<WeatherCondition>, MeasurementError> {
        Ok(vec![
            WeatherCondition::FreezingRisk(checked(
                "freezing level height",
                self.freezing_level_height,
                MIN_FREEZING_LEVEL_HEIGHT,
            )?),
            WeatherCondition::Snowfall(checked("snowfall", self.snowfall, 0.0)?),
            WeatherCondition::Precipitation(checked("precipitation", self.precipitation, 0.0)?),
            WeatherCondition::Visibility(checked("visibility", self.visibility, 0.0)?),
            WeatherCondition::WindGust(checked("wind gusts", self.wind_gusts, 0.0)?),
        ])
    }
}

fn checked(name: &'static str, value: Option<f64>, minimum: f64) -> Result<f64, MeasurementError> {
    let value = value.ok_or(MeasurementError::Missing(name))?;

    if !value.is_finite() {
        return Err(MeasurementError::NotFinite { name, value });
    }
    if value < minimum {
        return Err(MeasurementError::BelowMinimum { name, value, minimum });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditions_in_report_order() {
        let measurements = WeatherMeasurements::new(2_000.0, 1.2, 0.0, 15_000.0, 12.0);

        let conditions = measurements.conditions().unwrap();

        assert_eq!(
            conditions,
            vec![
                WeatherCondition::FreezingRisk(2_000.0),
                WeatherCondition::Snowfall(0.0),
                WeatherCondition::Precipitation(1.2),
                WeatherCondition::Visibility(15_000.0),
                WeatherCondition::WindGust(12.0),
            ]
        );
    }

    #[test]
    fn test_missing_measurement() {
        let measurements = WeatherMeasurements {
            visibility: None,
            ..WeatherMeasurements::new(2_000.0, 0.0, 0.0, 15_000.0, 0.0)
        };

        assert_eq!(measurements.conditions(), Err(MeasurementError::Missing("visibility")));
    }

    #[test]
    fn test_freezing_level_may_be_negative() {
        let measurements = WeatherMeasurements::new(-500.0, 0.0, 0.0, 15_000.0, 0.0);
        assert!(measurements.conditions().is_ok());

        let measurements = WeatherMeasurements::new(-500.5, 0.0, 0.0, 15_000.0, 0.0);
        assert!(matches!(
            measurements.conditions(),
            Err(MeasurementError::BelowMinimum { minimum, .. }) if minimum == MIN_FREEZING_LEVEL_HEIGHT
        ));
    }

    #[test]
    fn test_negative_precipitation() {
        let measurements = WeatherMeasurements::new(2_000.0, -0.1, 0.0, 15_000.0, 0.0);

        assert!(matches!(
            measurements.conditions(),
            Err(MeasurementError::BelowMinimum { name: "precipitation", .. })
        ));
    }

    #[test]
    fn test_non_finite_measurement() {
        let measurements = WeatherMeasurements::new(2_000.0, 0.0, f64::NAN, 15_000.0, 0.0);

        assert!(matches!(
            measurements.conditions(),
            Err(MeasurementError::NotFinite { name: "snowfall", .. })
        ));
    }

    #[test]
    fn test_deserialize_with_gaps() {
        let measurements: WeatherMeasurements =
            serde_json::from_str(r#"{"freezing_level_height": 1800.0, "precipitation": null}"#).unwrap();

        assert_eq!(measurements.freezing_level_height, Some(1800.0));
        assert_eq!(measurements.precipitation, None);
        assert_eq!(measurements.wind_gusts, None);
    }
}
