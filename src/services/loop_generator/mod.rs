//! Geometric loop synthesis.
//!
//! A loop of length P is modelled as the equilateral triangle whose
//! circumcircle, centred on the origin, has radius R = P / (3 * sqrt(3)).
//! The three vertices are projected from the origin along bearings 0, 120 and
//! 240 degrees, and the path runs origin -> N -> SE -> SW -> origin. The
//! achieved length therefore differs from P (by about +5.2% at city scale,
//! since the path goes out to and back from the centre instead of tracing the
//! full triangle); it is measured and reported, never corrected.
//!
//! Everything here is a pure function of its inputs.

mod assembler;
mod length;
mod radius;

pub use assembler::{assemble_route, label_waypoints};
pub use length::route_length;
pub use radius::{estimate_radius, TRIANGLE_PERIMETER_PER_RADIUS};

use crate::constants::{
    EARTH_RADIUS_KM, LOOP_BEARINGS_DEG, LOOP_WAYPOINT_COUNT, MIN_WAYPOINT_SEPARATION_KM,
};
use crate::error::LoopError;
use crate::models::{Bearing, DistanceKm, GeoPoint, RouteResult};
use crate::services::geodesic;

/// Build a closed loop starting and ending at `origin` whose length
/// approximates `target_distance_km`.
///
/// Fails with [`LoopError::InvalidInput`] for a non-positive or non-finite
/// target or an out-of-range origin, before any geodesic work. Fails with
/// [`LoopError::Generation`] when the origin is on a pole, when the loop
/// radius reaches half the Earth's circumference, or when two loop vertices
/// coincide.
pub fn generate_loop(origin: GeoPoint, target_distance_km: f64) -> Result<RouteResult, LoopError> {
    origin.validate().map_err(LoopError::InvalidInput)?;
    let radius = estimate_radius(target_distance_km)?;

    let half_circumference_km = std::f64::consts::PI * EARTH_RADIUS_KM;
    if radius.as_km() >= half_circumference_km {
        return Err(LoopError::Generation(format!(
            "loop radius {} reaches the antipode of the origin",
            radius
        )));
    }

    let bearings = LOOP_BEARINGS_DEG.map(Bearing::wrapping);
    let mut destinations = [origin; LOOP_WAYPOINT_COUNT];
    for (slot, bearing) in destinations.iter_mut().zip(bearings) {
        *slot = geodesic::destination(&origin, radius, bearing)?;
    }

    ensure_distinct(&origin, &destinations)?;

    let route = assemble_route(origin, &destinations)?;
    let achieved = route_length(&route);

    Ok(RouteResult {
        waypoints: label_waypoints(&destinations, &bearings),
        route,
        target_distance_km: DistanceKm::from_raw(target_distance_km),
        radius_km: radius,
        achieved_distance_km: achieved,
    })
}

/// Reject loops whose vertices collapsed onto each other or onto the origin
fn ensure_distinct(
    origin: &GeoPoint,
    destinations: &[GeoPoint; LOOP_WAYPOINT_COUNT],
) -> Result<(), LoopError> {
    let vertices: Vec<&GeoPoint> = std::iter::once(origin).chain(destinations).collect();

    for (i, a) in vertices.iter().enumerate() {
        for b in &vertices[i + 1..] {
            if geodesic::distance_km(a, b) < MIN_WAYPOINT_SEPARATION_KM {
                return Err(LoopError::Generation(format!(
                    "loop vertices ({}) and ({}) coincide",
                    a, b
                )));
            }
        }
    }

    Ok(())
}
