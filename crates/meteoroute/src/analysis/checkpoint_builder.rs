use jiff::Zoned;
use tracing::debug;

use super::{AnalysisError, Checkpoint, Segment};

/// Turns consecutive segments into checkpoints with absolute arrival times.
///
/// The first checkpoint is the start of the first segment at `departure`.
/// Every following checkpoint is the end of the previous segment, reached
/// after that segment's duration. Sub-second durations are kept, so a
/// checkpoint only shares its predecessor's time when the segment between
/// them takes no time at all. `N` segments give `N + 1` checkpoints.
pub fn build_checkpoints(segments: &[Segment], departure: &Zoned) -> Result<Vec<Checkpoint>, AnalysisError> {
    let first = segments.first().ok_or(AnalysisError::EmptySegments)?;

    let mut checkpoints = Vec::with_capacity(segments.len() + 1);
    checkpoints.push(Checkpoint::new(first.start, departure.clone()));

    let mut arrival = departure.clone();
    for segment in segments {
        arrival = arrival.checked_add(segment.duration)?;
        checkpoints.push(Checkpoint::new(segment.end, arrival.clone()));
    }

    debug!(
        "Built {} checkpoints, arriving at {}",
        checkpoints.len(),
        arrival
    );

    Ok(checkpoints)
}
