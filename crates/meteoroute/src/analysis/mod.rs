//! Route segmentation: from directions legs to timestamped checkpoints.
//!
//! [`RouteAnalyzer`] walks every leg with [`find_segments`], which splits
//! oversized steps with [`split_step`]. [`build_checkpoints`] then turns the
//! flattened segment list into checkpoints with absolute arrival times.

mod analysis_params;
mod checkpoint;
mod checkpoint_builder;
mod route_analyzer;
mod segment;
mod segment_finder;
mod sub_step;

use thiserror::Error;

use crate::polyline::PolylineError;

pub use analysis_params::AnalysisParams;
pub use checkpoint::Checkpoint;
pub use checkpoint_builder::build_checkpoints;
pub use route_analyzer::RouteAnalyzer;
pub use segment::Segment;
pub use segment_finder::find_segments;
pub use sub_step::{split_step, sub_step_duration};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid polyline: {0}")]
    Polyline(#[from] PolylineError),

    #[error("Invalid step {step}: {reason}")]
    InvalidStep { step: usize, reason: String },

    #[error("Cannot build checkpoints from an empty segment list")]
    EmptySegments,

    #[error("Arrival time out of range: {0}")]
    Time(#[from] jiff::Error),
}
