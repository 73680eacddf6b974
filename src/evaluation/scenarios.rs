use crate::evaluation::EvalScenario;
use crate::models::GeoPoint;

fn scenario(name: &str, lat: f64, lng: f64, distance_km: f64) -> Option<EvalScenario> {
    GeoPoint::new(lat, lng).ok().map(|start| EvalScenario {
        name: name.to_string(),
        start,
        distance_km,
    })
}

/// Default evaluation scenarios covering latitudes, scales and the awkward
/// spots of the sphere
pub fn default_scenarios() -> Vec<EvalScenario> {
    [
        // --- Beijing (fallback origin) ---
        scenario("beijing_3km", 39.908823, 116.39747, 3.0),
        scenario("beijing_5km", 39.908823, 116.39747, 5.0),
        scenario("beijing_21km", 39.908823, 116.39747, 21.0975),
        // --- Mid latitudes ---
        scenario("paris_5km", 48.8566, 2.3522, 5.0),
        scenario("sydney_10km", -33.8688, 151.2093, 10.0),
        scenario("quito_5km_equator", -0.1807, -78.4678, 5.0),
        // --- High latitudes ---
        scenario("reykjavik_10km", 64.1466, -21.9426, 10.0),
        scenario("longyearbyen_42km", 78.2232, 15.6267, 42.195),
        scenario("near_north_pole_5km", 89.99, 0.0, 5.0),
        scenario("near_south_pole_5km", -89.99, 120.0, 5.0),
        // --- Antimeridian ---
        scenario("fiji_antimeridian_10km", -16.5, 179.999, 10.0),
        // --- Long loops where curvature dominates ---
        scenario("continental_2000km", 45.0, 10.0, 2000.0),
    ]
    .into_iter()
    .flatten()
    .collect()
}
