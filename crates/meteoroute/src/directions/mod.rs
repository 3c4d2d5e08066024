//! Route data as returned by a directions service.
//!
//! Field names follow the directions-service JSON layout so a response body
//! can be deserialized directly into [`DirectionsResponse`].

mod coordinate;
mod leg;
mod response;
mod route;
mod step;
mod text_value;

pub use coordinate::Coordinate;
pub use leg::RouteLeg;
pub use response::{DirectionsResponse, STATUS_OK};
pub use route::{Bounds, EncodedPolyline, Route};
pub use step::RouteStep;
pub use text_value::{TextValue, hours_minutes};
