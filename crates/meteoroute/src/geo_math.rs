//! Great-circle distance on a spherical Earth.

use crate::{directions::Coordinate, meters::Meters};

pub const EARTH_RADIUS_KM: f64 = 6372.795477598;

/// Distance between two coordinates with the spherical law of cosines,
/// rounded to one decimal (half up).
///
/// NaN coordinates produce a NaN distance.
pub fn distance(a: &Coordinate, b: &Coordinate) -> Meters {
    if a == b {
        return Meters::ZERO;
    }

    let lat_a = a.lat.to_radians();
    let lng_a = a.lng.to_radians();
    let lat_b = b.lat.to_radians();
    let lng_b = b.lng.to_radians();

    // Rounding can push the cosine slightly above 1 for points a few
    // centimeters apart.
    let cosine = (lat_a.sin() * lat_b.sin() + lat_a.cos() * lat_b.cos() * (lng_a - lng_b).cos())
        .clamp(-1.0, 1.0);

    Meters::new(round_half_up(EARTH_RADIUS_KM * cosine.acos() * 1000.0, 1))
}

/// Rounds to `decimals` places, ties away from zero.
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
