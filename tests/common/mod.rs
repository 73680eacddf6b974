use loopexplorer::config::LoopConfig;
use loopexplorer::models::GeoPoint;
use loopexplorer::AppState;
use std::sync::Arc;

/// Fallback origin used by the app when no position fix is available
#[allow(dead_code)]
pub fn beijing() -> GeoPoint {
    GeoPoint::new(39.908823, 116.397470).unwrap()
}

#[allow(dead_code)]
pub fn point(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng).unwrap()
}

/// Smallest absolute difference between two bearings in degrees
#[allow(dead_code)]
pub fn angle_between(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

/// Router without the outer CORS/trace layers, using default loop settings
#[allow(dead_code)]
pub fn test_app() -> axum::Router {
    let state = Arc::new(AppState {
        loop_config: LoopConfig::default(),
    });
    loopexplorer::routes::create_router(state)
}
