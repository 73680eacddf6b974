use crate::error::{AppError, Result};
use crate::models::{LoopRouteRequest, LoopRouteResponse};
use crate::services::loop_generator::generate_loop;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /routes/loop
/// Generate a geometric loop that starts and ends at the same point
pub async fn create_loop_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoopRouteRequest>,
) -> Result<Json<LoopRouteResponse>> {
    let config = &state.loop_config;
    let (start, distance_km) = request.resolve(config).map_err(AppError::InvalidRequest)?;

    tracing::info!(
        lat = start.lat,
        lng = start.lng,
        distance_km,
        fallback_origin = request.start_point.is_none(),
        "Loop route request: ({:.4}, {:.4}), {:.1}km",
        start.lat,
        start.lng,
        distance_km
    );

    let route = generate_loop(start, distance_km)?;
    let response = LoopRouteResponse::new(route, config.distance_tolerance_pct);

    if response.within_tolerance {
        tracing::info!(
            achieved_km = response.route.achieved_distance_km.as_km(),
            radius_km = response.route.radius_km.as_km(),
            "Loop generated: {} (target: {}km)",
            response.route.achieved_distance_km,
            distance_km
        );
    } else {
        tracing::warn!(
            achieved_km = response.route.achieved_distance_km.as_km(),
            deviation_pct = response.deviation_pct,
            tolerance_pct = config.distance_tolerance_pct,
            "Loop length {} deviates {:.1}% from target {}km",
            response.route.achieved_distance_km,
            response.deviation_pct * 100.0,
            distance_km
        );
    }

    Ok(Json(response))
}
