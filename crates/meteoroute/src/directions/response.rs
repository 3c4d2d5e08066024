use serde::{Deserialize, Serialize};

use super::Route;

pub const STATUS_OK: &str = "OK";

/// Body of a directions-service response. The first route is the
/// recommended one, the others are alternatives.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<Route>,
    pub status: String,
}

impl DirectionsResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    pub fn main_route(&self) -> Option<&Route> {
        self.routes.first()
    }

    pub fn alternatives(&self) -> &[Route] {
        self.routes.get(1..).unwrap_or(&[])
    }

    pub fn has_alternatives(&self) -> bool {
        self.routes.len() > 1
    }
}
