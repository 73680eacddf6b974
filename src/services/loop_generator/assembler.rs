use crate::constants::{LOOP_PATH_LEN, LOOP_WAYPOINT_COUNT};
use crate::error::LoopError;
use crate::models::{Bearing, GeoPoint, Route, Waypoint};

/// Close the loop: origin, each destination in the given order, origin again.
/// The caller supplies destinations already in visiting order.
pub fn assemble_route(
    origin: GeoPoint,
    destinations: &[GeoPoint; LOOP_WAYPOINT_COUNT],
) -> Result<Route, LoopError> {
    let mut points = Vec::with_capacity(LOOP_PATH_LEN);
    points.push(origin);
    points.extend_from_slice(destinations);
    points.push(origin);

    Route::closed(points).map_err(LoopError::Generation)
}

/// Pair each destination with a display label naming its position in the
/// loop and the compass direction it was projected along.
pub fn label_waypoints(
    destinations: &[GeoPoint; LOOP_WAYPOINT_COUNT],
    bearings: &[Bearing; LOOP_WAYPOINT_COUNT],
) -> Vec<Waypoint> {
    destinations
        .iter()
        .zip(bearings)
        .enumerate()
        .map(|(index, (point, bearing))| {
            Waypoint::new(
                format!("Waypoint {} ({})", index + 1, bearing.compass_point()),
                *point,
                *bearing,
            )
        })
        .collect()
}
