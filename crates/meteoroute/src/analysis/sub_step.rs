use jiff::SignedDuration;
use tracing::debug;

use crate::{
    directions::{Coordinate, RouteStep},
    geo_math::{self, round_half_up},
    meters::Meters,
    polyline,
};

use super::{AnalysisError, AnalysisParams, Segment};

/// Splits one step along its geometry into sub-steps of at least
/// `params.sub_step_distance`, plus a shorter closing sub-step when the last
/// cut is not the final point.
///
/// Durations are proportional to distance, i.e. the speed is assumed uniform
/// across the step. A step without a polyline is treated as a straight line
/// between its endpoints.
pub fn split_step(step: &RouteStep, params: &AnalysisParams) -> Result<Vec<Segment>, AnalysisError> {
    let mut points = match step.encoded_polyline() {
        Some(encoded) => polyline::decode(encoded)?,
        None => Vec::new(),
    };
    if points.is_empty() {
        points = vec![step.start_location, step.end_location];
    }

    let mut sub_steps = Vec::new();
    let mut cut = points[0];
    let mut accumulated = Meters::ZERO;

    for window in points.windows(2) {
        let (previous, current) = (window[0], window[1]);
        accumulated += geo_math::distance(&previous, &current);

        if accumulated >= params.sub_step_distance {
            sub_steps.push(sub_segment(step, cut, current, accumulated)?);
            cut = current;
            accumulated = Meters::ZERO;
        }
    }

    let last = points[points.len() - 1];
    if cut != last {
        sub_steps.push(sub_segment(step, cut, last, accumulated)?);
    }

    debug!(
        "Split step of {} into {} sub-steps ({} points)",
        step.distance_value(),
        sub_steps.len(),
        points.len()
    );

    Ok(sub_steps)
}

fn sub_segment(
    step: &RouteStep,
    start: Coordinate,
    end: Coordinate,
    distance: Meters,
) -> Result<Segment, AnalysisError> {
    let duration = SignedDuration::try_from_secs_f64(sub_step_duration(distance, step))?;
    Ok(Segment::new(start, end, distance, duration))
}

/// Share of the step duration matching `sub_distance`, in seconds, rounded to
/// one decimal. A step with no distance yields zero.
pub fn sub_step_duration(sub_distance: Meters, step: &RouteStep) -> f64 {
    let step_distance = step.distance_value();
    if step_distance <= 0.0 {
        return 0.0;
    }

    round_half_up(sub_distance.value() * step.duration_value() / step_distance, 1)
}
