use serde::{Deserialize, Serialize};

use super::{Coordinate, RouteStep, TextValue};

/// One origin-to-destination portion of a route.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteLeg {
    pub start_location: Coordinate,
    pub end_location: Coordinate,
    pub steps: Vec<RouteStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<TextValue>,
    pub duration: TextValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_address: Option<String>,
}

impl RouteLeg {
    /// Builds a leg from its steps, deriving endpoints and totals from them.
    ///
    /// Returns `None` when `steps` is empty.
    pub fn from_steps(steps: Vec<RouteStep>) -> Option<Self> {
        let start_location = steps.first()?.start_location;
        let end_location = steps.last()?.end_location;
        let distance: f64 = steps.iter().map(RouteStep::distance_value).sum();
        let duration: f64 = steps.iter().map(RouteStep::duration_value).sum();

        Some(Self {
            start_location,
            end_location,
            steps,
            distance: Some(TextValue::meters(distance)),
            duration: TextValue::seconds(duration),
            start_address: None,
            end_address: None,
        })
    }

    /// Duration in seconds as reported by the directions service.
    pub fn duration_value(&self) -> f64 {
        self.duration.value
    }

    /// Whether the leg endpoints match the first step's start and the last step's end.
    pub fn has_consistent_endpoints(&self) -> bool {
        match (self.steps.first(), self.steps.last()) {
            (Some(first), Some(last)) => {
                first.start_location == self.start_location
                    && last.end_location == self.end_location
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_steps() {
        let a = Coordinate::new(44.0, 12.0);
        let b = Coordinate::new(44.1, 12.0);
        let c = Coordinate::new(44.2, 12.0);

        let leg = RouteLeg::from_steps(vec![
            RouteStep::new(a, b, 1000.0, 60.0),
            RouteStep::new(b, c, 2000.0, 90.0),
        ])
        .unwrap();

        assert_eq!(leg.start_location, a);
        assert_eq!(leg.end_location, c);
        assert_eq!(leg.duration_value(), 150.0);
        assert_eq!(leg.distance.as_ref().unwrap().value, 3000.0);
        assert!(leg.has_consistent_endpoints());
    }

    #[test]
    fn test_from_no_steps() {
        assert!(RouteLeg::from_steps(vec![]).is_none());
    }
}
