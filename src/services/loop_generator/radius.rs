use crate::error::LoopError;
use crate::models::DistanceKm;

/// Perimeter of an equilateral triangle per unit circumradius: P = 3 * sqrt(3) * R
pub const TRIANGLE_PERIMETER_PER_RADIUS: f64 = 5.196_152_422_706_632;

/// Circumradius of the equilateral triangle whose perimeter is `target_distance_km`.
///
/// This is a planar approximation; curvature is only accounted for when the
/// vertices are projected onto the sphere.
pub fn estimate_radius(target_distance_km: f64) -> Result<DistanceKm, LoopError> {
    let target = DistanceKm::positive(target_distance_km).map_err(|e| {
        LoopError::InvalidInput(format!(
            "target distance {} km rejected: {}",
            target_distance_km, e
        ))
    })?;

    Ok(target / TRIANGLE_PERIMETER_PER_RADIUS)
}
