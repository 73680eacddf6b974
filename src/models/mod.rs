pub mod bearing;
pub mod distance;
pub mod geo_point;
pub mod route;

pub use bearing::Bearing;
pub use distance::DistanceKm;
pub use geo_point::GeoPoint;
pub use route::{LoopRouteRequest, LoopRouteResponse, Route, RouteResult, Waypoint};
