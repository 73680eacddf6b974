use crate::models::{DistanceKm, Route};
use crate::services::geodesic;

/// Total geodesic length of the route, summed leg by leg on the same sphere
/// the destinations were projected on.
pub fn route_length(route: &Route) -> DistanceKm {
    route
        .segments()
        .map(|(from, to)| DistanceKm::from_raw(geodesic::distance_km(from, to)))
        .sum()
}
