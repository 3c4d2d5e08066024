use anyhow::Context;
use jiff::tz::TimeZone;
use meteoroute::meters::Meters;

pub const TIMEZONE_ENV_VAR: &str = "METEOROUTE_TIMEZONE";
pub const MAX_STATION_DISTANCE_ENV_VAR: &str = "METEOROUTE_MAX_STATION_DISTANCE_KM";

pub const DEFAULT_MAX_STATION_DISTANCE_KM: f64 = 50.0;

pub struct Config {
    /// Zone for departure times given without one.
    pub time_zone: TimeZone,
    /// How far a checkpoint may be from the forecast location used for it.
    pub max_station_distance: Meters,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, anyhow::Error> {
        let time_zone = match lookup(TIMEZONE_ENV_VAR) {
            Some(name) => TimeZone::get(&name).with_context(|| format!("Unknown time zone {name:?}"))?,
            None => TimeZone::system(),
        };

        let max_station_distance_km = match lookup(MAX_STATION_DISTANCE_ENV_VAR) {
            Some(value) => value
                .parse::<f64>()
                .ok()
                .filter(|km| km.is_finite() && *km > 0.0)
                .with_context(|| format!("{MAX_STATION_DISTANCE_ENV_VAR} must be a positive number, got {value:?}"))?,
            None => DEFAULT_MAX_STATION_DISTANCE_KM,
        };

        Ok(Self {
            time_zone,
            max_station_distance: Meters::new(max_station_distance_km * 1000.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, tz::Offset};

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config.max_station_distance, Meters::new(50_000.0));
    }

    #[test]
    fn test_max_station_distance() {
        let config = Config::from_lookup(|key| (key == MAX_STATION_DISTANCE_ENV_VAR).then(|| "12.5".to_string())).unwrap();

        assert_eq!(config.max_station_distance, Meters::new(12_500.0));
    }

    #[test]
    fn test_invalid_max_station_distance() {
        assert!(Config::from_lookup(|key| (key == MAX_STATION_DISTANCE_ENV_VAR).then(|| "-3".to_string())).is_err());
        assert!(Config::from_lookup(|key| (key == MAX_STATION_DISTANCE_ENV_VAR).then(|| "far".to_string())).is_err());
    }

    #[test]
    fn test_time_zone() {
        let config = Config::from_lookup(|key| (key == TIMEZONE_ENV_VAR).then(|| "UTC".to_string())).unwrap();

        assert_eq!(config.time_zone.to_offset(Timestamp::UNIX_EPOCH), Offset::UTC);
        assert!(Config::from_lookup(|key| (key == TIMEZONE_ENV_VAR).then(|| "Nowhere/Atlantis".to_string())).is_err());
    }
}
