use jiff::SignedDuration;
use serde::Serialize;

use crate::{directions::Coordinate, meters::Meters};

/// A candidate stretch between two future checkpoints.
///
/// Distance and duration are never negative. A zero duration is valid and
/// marks a zero-length tail at the end of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Coordinate,
    pub end: Coordinate,
    pub distance: Meters,
    pub duration: SignedDuration,
}

impl Segment {
    pub fn new(start: Coordinate, end: Coordinate, distance: Meters, duration: SignedDuration) -> Self {
        Self {
            start,
            end,
            distance,
            duration,
        }
    }

    pub fn is_zero_length(&self) -> bool {
        self.distance.is_zero() && self.duration.is_zero()
    }
}
