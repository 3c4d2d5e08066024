use jiff::Zoned;
use serde::Serialize;
use tracing::info;

use crate::{
    analysis::{AnalysisParams, RouteAnalyzer, build_checkpoints},
    directions::{DirectionsResponse, Route},
    weather::{WeatherProvider, WeatherService},
};

use super::{TravelError, TravelModeResult, route_duration};

/// Results for the recommended route and each alternative.
#[derive(Debug, Clone, Serialize)]
pub struct TravelOutcome {
    pub main: TravelModeResult,
    pub alternatives: Vec<TravelModeResult>,
}

/// Runs the whole pipeline on directions routes: segmentation, checkpoints,
/// weather enrichment and scoring.
pub struct TravelPlanner<P> {
    weather: WeatherService<P>,
    params: AnalysisParams,
}

impl<P: WeatherProvider> TravelPlanner<P> {
    pub fn new(provider: P) -> Self {
        Self {
            weather: WeatherService::new(provider),
            params: AnalysisParams::default(),
        }
    }

    pub fn with_params(mut self, params: AnalysisParams) -> Self {
        self.params = params;
        self
    }

    pub fn analyze_route(&self, route: &Route, departure: &Zoned) -> Result<TravelModeResult, TravelError> {
        let segments = RouteAnalyzer::new(self.params).analyze(route)?;
        let checkpoints = build_checkpoints(&segments, departure)?;
        let enriched = self.weather.enrich_all(&checkpoints)?;

        let result = TravelModeResult::new(
            enriched,
            route.summary.clone(),
            route_duration(route)?,
            route.overview_polyline.points.clone(),
        )?;

        info!(
            "Route '{}': {} checkpoints, arrival {}, score {} ({})",
            result.summary(),
            result.checkpoints().len(),
            result.arrival_time(),
            result.average_score(),
            result.category()
        );

        Ok(result)
    }

    /// Analyzes the recommended route and every alternative of a response.
    pub fn analyze_response(&self, response: &DirectionsResponse, departure: &Zoned) -> Result<TravelOutcome, TravelError> {
        if !response.is_ok() {
            return Err(TravelError::Status(response.status.clone()));
        }

        let main = response.main_route().ok_or(TravelError::NoRoutes)?;
        let main = self.analyze_route(main, departure)?;
        let alternatives = response
            .alternatives()
            .iter()
            .map(|route| self.analyze_route(route, departure))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TravelOutcome { main, alternatives })
    }
}
