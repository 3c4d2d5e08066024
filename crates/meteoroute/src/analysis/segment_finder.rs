use jiff::SignedDuration;
use tracing::debug;

use crate::{
    directions::{Coordinate, RouteLeg, RouteStep},
    meters::Meters,
};

use super::{AnalysisError, AnalysisParams, Segment, split_step};

enum Advance {
    Emitted,
    Accumulated,
    Overshoot,
}

/// Running state of one leg walk: the distance and duration accumulated since
/// the last cut, where that cut happened, and the segments emitted so far.
struct LegAccumulator<'a> {
    params: &'a AnalysisParams,
    cut: Coordinate,
    distance: Meters,
    duration: SignedDuration,
    segments: Vec<Segment>,
}

impl<'a> LegAccumulator<'a> {
    fn new(params: &'a AnalysisParams, start: Coordinate) -> Self {
        Self {
            params,
            cut: start,
            distance: Meters::ZERO,
            duration: SignedDuration::ZERO,
            segments: Vec::new(),
        }
    }

    fn reset(&mut self, cut: Coordinate) {
        self.cut = cut;
        self.distance = Meters::ZERO;
        self.duration = SignedDuration::ZERO;
    }

    fn emit(&mut self, end: Coordinate, distance: Meters, duration: SignedDuration) {
        self.segments.push(Segment::new(self.cut, end, distance, duration));
        self.reset(end);
    }

    /// Adds a stretch ending at `end`. On overshoot nothing is added.
    fn advance(&mut self, distance: Meters, duration: SignedDuration, end: Coordinate) -> Advance {
        let total_distance = self.distance + distance;
        let total_duration = self.duration + duration;

        if self.params.is_within_window(total_distance) {
            self.emit(end, total_distance, total_duration);
            Advance::Emitted
        } else if self.params.overshoots(total_distance) {
            Advance::Overshoot
        } else {
            self.distance = total_distance;
            self.duration = total_duration;
            Advance::Accumulated
        }
    }

    fn replay(&mut self, sub_steps: &[Segment]) {
        for sub_step in sub_steps {
            if let Advance::Overshoot = self.advance(sub_step.distance, sub_step.duration, sub_step.end) {
                self.force(sub_step);
            }
        }
    }

    /// Places a sub-step that jumps past the window and cannot be split any
    /// further. The pending stretch and the sub-step become one oversized
    /// segment ending at the sub-step end.
    fn force(&mut self, sub_step: &Segment) {
        let distance = self.distance + sub_step.distance;
        let duration = self.duration + sub_step.duration;
        debug!("Sub-step ending at {} forces an oversized segment of {}", sub_step.end, distance);
        self.emit(sub_step.end, distance, duration);
    }

    fn finish(mut self, leg: &RouteLeg) -> Vec<Segment> {
        if self.cut != leg.end_location || leg.steps.len() == 1 {
            let (distance, duration) = (self.distance, self.duration);
            self.emit(leg.end_location, distance, duration);
        }

        self.segments
    }
}

/// Walks one leg and cuts it into segments of roughly `params.target_distance`.
///
/// A segment ends at the first step end where the accumulated distance falls
/// inside the acceptance window. A step that would jump past the window is
/// split into sub-steps which are then replayed one by one. Whatever remains
/// after the last cut becomes a final segment ending at the leg end; a
/// single-step leg always gets that final segment, even when it is empty.
pub fn find_segments(leg: &RouteLeg, params: &AnalysisParams) -> Result<Vec<Segment>, AnalysisError> {
    let mut accumulator = LegAccumulator::new(params, leg.start_location);

    for (index, step) in leg.steps.iter().enumerate() {
        let (distance, duration) = step_totals(index, step)?;

        if let Advance::Overshoot = accumulator.advance(distance, duration, step.end_location) {
            debug!(
                "Step {} ({}) overshoots the window from {}, splitting",
                index, distance, accumulator.distance
            );
            let sub_steps = split_step(step, params)?;
            accumulator.replay(&sub_steps);
        }
    }

    let segments = accumulator.finish(leg);
    debug!("Leg of {} steps cut into {} segments", leg.steps.len(), segments.len());

    Ok(segments)
}

fn step_totals(index: usize, step: &RouteStep) -> Result<(Meters, SignedDuration), AnalysisError> {
    let distance = step.distance_value();
    let duration = step.duration_value();

    if !distance.is_finite() || distance < 0.0 {
        return Err(AnalysisError::InvalidStep {
            step: index,
            reason: format!("distance {distance} is not a non-negative number"),
        });
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(AnalysisError::InvalidStep {
            step: index,
            reason: format!("duration {duration} is not a non-negative number"),
        });
    }

    Ok((Meters::new(distance), SignedDuration::try_from_secs_f64(duration)?))
}
