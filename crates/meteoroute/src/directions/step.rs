use serde::{Deserialize, Serialize};

use super::{Coordinate, EncodedPolyline, TextValue};

/// The smallest routing unit of a leg.
///
/// `polyline` and `travel_mode` are optional: the segmentation only needs
/// the endpoints, distance and duration. The polyline is read when a step
/// has to be split into sub-steps.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteStep {
    pub start_location: Coordinate,
    pub end_location: Coordinate,
    pub distance: TextValue,
    pub duration: TextValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polyline: Option<EncodedPolyline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_mode: Option<String>,
}

impl RouteStep {
    pub fn new(start: Coordinate, end: Coordinate, distance_m: f64, duration_s: f64) -> Self {
        Self {
            start_location: start,
            end_location: end,
            distance: TextValue::meters(distance_m),
            duration: TextValue::seconds(duration_s),
            polyline: None,
            travel_mode: None,
        }
    }

    pub fn with_polyline(mut self, points: impl Into<String>) -> Self {
        self.polyline = Some(EncodedPolyline::new(points));
        self
    }

    /// Distance in meters.
    pub fn distance_value(&self) -> f64 {
        self.distance.value
    }

    /// Duration in seconds.
    pub fn duration_value(&self) -> f64 {
        self.duration.value
    }

    pub fn encoded_polyline(&self) -> Option<&str> {
        self.polyline.as_ref().map(|polyline| polyline.points.as_str())
    }
}
