use jiff::{
    Zoned,
    civil::date,
    tz::{TimeZone, offset},
};

use crate::{
    directions::{Coordinate, RouteLeg, RouteStep},
    geo_math,
    meters::Meters,
    weather::{ProviderError, WeatherMeasurements, WeatherProvider},
};

/// Meters per degree of latitude on the sphere used by `geo_math`.
const METERS_PER_DEGREE: f64 = 111_226.0;

/// `n` points starting at `start`, each offset by `(dlat, dlng)` degrees from
/// the previous one. Coordinates are snapped to the 1e-5 polyline grid so that
/// encoding then decoding them yields identical values.
pub fn straight_line(start: Coordinate, dlat: f64, dlng: f64, n: usize) -> Vec<Coordinate> {
    let snap = |value: f64| (value * 1e5).round() as i64;
    let (lat, lng) = (snap(start.lat), snap(start.lng));
    let (dlat, dlng) = (snap(dlat), snap(dlng));

    (0..n as i64)
        .map(|i| Coordinate::new((lat + i * dlat) as f64 / 1e5, (lng + i * dlng) as f64 / 1e5))
        .collect()
}

pub fn total_distance(points: &[Coordinate]) -> Meters {
    points
        .windows(2)
        .map(|w| geo_math::distance(&w[0], &w[1]))
        .sum()
}

/// A leg heading north from (44.0, 12.0) with one step per `(distance, duration)`
/// pair. Step endpoints are spaced roughly by the given distance; the
/// reported step distance is exactly the given one.
pub fn leg_from_distances(steps: &[(f64, f64)]) -> RouteLeg {
    let mut start = Coordinate::new(44.0, 12.0);
    let steps = steps
        .iter()
        .map(|&(distance, duration)| {
            let end = Coordinate::new(start.lat + distance / METERS_PER_DEGREE, start.lng);
            let step = RouteStep::new(start, end, distance, duration);
            start = end;
            step
        })
        .collect();

    RouteLeg::from_steps(steps).unwrap()
}

/// 2024-01-15 08:00 at UTC+1.
pub fn departure() -> Zoned {
    date(2024, 1, 15)
        .at(8, 0, 0, 0)
        .to_zoned(TimeZone::fixed(offset(1)))
        .unwrap()
}

type Lookup = dyn Fn(f64) -> Option<WeatherMeasurements> + Send + Sync;

/// In-memory provider answering from the checkpoint latitude alone.
pub struct TableProvider {
    lookup: Box<Lookup>,
}

impl TableProvider {
    pub fn uniform(measurements: WeatherMeasurements) -> Self {
        Self {
            lookup: Box::new(move |_| Some(measurements)),
        }
    }

    pub fn by_latitude(lookup: impl Fn(f64) -> WeatherMeasurements + Send + Sync + 'static) -> Self {
        Self {
            lookup: Box::new(move |lat| Some(lookup(lat))),
        }
    }

    pub fn empty() -> Self {
        Self {
            lookup: Box::new(|_| None),
        }
    }
}

impl WeatherProvider for TableProvider {
    fn measurements(&self, coordinate: Coordinate, _arrival: &Zoned) -> Result<Option<WeatherMeasurements>, ProviderError> {
        Ok((self.lookup)(coordinate.lat))
    }
}
