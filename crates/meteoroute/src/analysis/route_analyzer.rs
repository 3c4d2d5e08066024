use tracing::debug;

use crate::directions::Route;

use super::{AnalysisError, AnalysisParams, Segment, find_segments};

/// Cuts a whole route into segments, leg after leg.
///
/// An analyzer is good for one route: [`RouteAnalyzer::analyze`] takes it by
/// value, so a second call does not compile.
///
/// ```compile_fail
/// use meteoroute::{analysis::RouteAnalyzer, directions::Route};
///
/// let route = Route::new(vec![], "", "");
/// let analyzer = RouteAnalyzer::default();
/// let _ = analyzer.analyze(&route);
/// let _ = analyzer.analyze(&route);
/// ```
#[derive(Debug, Default)]
pub struct RouteAnalyzer {
    params: AnalysisParams,
}

impl RouteAnalyzer {
    pub fn new(params: AnalysisParams) -> Self {
        Self { params }
    }

    /// Segments of every leg in route order, flattened into one list.
    pub fn analyze(self, route: &Route) -> Result<Vec<Segment>, AnalysisError> {
        let mut segments = Vec::new();

        for (index, leg) in route.legs.iter().enumerate() {
            let leg_segments = find_segments(leg, &self.params)?;
            debug!("RouteAnalyzer: leg {} gave {} segments", index, leg_segments.len());
            segments.extend(leg_segments);
        }

        debug!(
            "RouteAnalyzer: {} segments over {} legs ({})",
            segments.len(),
            route.legs.len(),
            route.summary
        );

        Ok(segments)
    }
}
