use serde::{Deserialize, Serialize};

use crate::meters::Meters;

pub const TARGET_DISTANCE_METERS: f64 = 30_000.0;
pub const DELTA_METERS: f64 = 2_000.0;
pub const SUB_STEP_DISTANCE_METERS: f64 = 1_000.0;

/// Segmentation tuning. A segment is cut as soon as the accumulated distance
/// falls strictly inside `target_distance ± delta`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct AnalysisParams {
    pub target_distance: Meters,
    pub delta: Meters,
    pub sub_step_distance: Meters,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            target_distance: Meters::new(TARGET_DISTANCE_METERS),
            delta: Meters::new(DELTA_METERS),
            sub_step_distance: Meters::new(SUB_STEP_DISTANCE_METERS),
        }
    }
}

impl AnalysisParams {
    pub fn lower_bound(&self) -> Meters {
        self.target_distance - self.delta
    }

    pub fn upper_bound(&self) -> Meters {
        self.target_distance + self.delta
    }

    pub fn is_within_window(&self, distance: Meters) -> bool {
        distance > self.lower_bound() && distance < self.upper_bound()
    }

    pub fn overshoots(&self, distance: Meters) -> bool {
        distance >= self.upper_bound()
    }
}
