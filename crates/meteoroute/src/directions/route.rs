use serde::{Deserialize, Serialize};

use super::{Coordinate, RouteLeg};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EncodedPolyline {
    pub points: String,
}

impl EncodedPolyline {
    pub fn new(points: impl Into<String>) -> Self {
        Self {
            points: points.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Bounds {
    pub northeast: Coordinate,
    pub southwest: Coordinate,
}

/// A complete route: legs, bounding box, overview geometry and summary.
///
/// The overview polyline is only carried through for rendering, the analysis
/// works from the steps.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Route {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    pub legs: Vec<RouteLeg>,
    pub overview_polyline: EncodedPolyline,
    #[serde(default)]
    pub summary: String,
}

impl Route {
    pub fn new(legs: Vec<RouteLeg>, overview_polyline: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            bounds: None,
            legs,
            overview_polyline: EncodedPolyline::new(overview_polyline),
            summary: summary.into(),
        }
    }

    pub fn steps_count(&self) -> usize {
        self.legs.iter().map(|leg| leg.steps.len()).sum()
    }
}
