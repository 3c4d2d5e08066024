use jiff::Zoned;
use serde::Serialize;

use crate::directions::Coordinate;

/// A point along the route and the time the traveller is expected there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checkpoint {
    pub coordinate: Coordinate,
    pub arrival_time: Zoned,
}

impl Checkpoint {
    pub fn new(coordinate: Coordinate, arrival_time: Zoned) -> Self {
        Self {
            coordinate,
            arrival_time,
        }
    }
}
