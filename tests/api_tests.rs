use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use loopexplorer::models::LoopRouteRequest;
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn post_loop(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/routes/loop")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = common::test_app();

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_loop_route_endpoint() {
    let (status, json) = post_loop(
        common::test_app(),
        json!({
            "start_point": {"lat": 39.908823, "lng": 116.397470},
            "distance_km": 5.0
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let route = &json["route"];
    assert_eq!(route["route"].as_array().unwrap().len(), 5);
    assert_eq!(route["route"][0], route["route"][4]);
    assert_eq!(route["waypoints"].as_array().unwrap().len(), 3);
    assert_eq!(route["waypoints"][0]["label"], "Waypoint 1 (N)");
    assert_eq!(route["target_distance_km"], 5.0);

    let achieved = route["achieved_distance_km"].as_f64().unwrap();
    assert!(achieved > 5.0 && achieved < 5.5);
    assert_eq!(json["within_tolerance"], true);
    assert_eq!(json["message"], format!("Route generated ({:.1} km)", achieved));

    assert_eq!(json["geojson"]["type"], "FeatureCollection");
    assert_eq!(json["geojson"]["features"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_loop_route_falls_back_to_default_origin() {
    let (status, json) = post_loop(common::test_app(), json!({})).await;

    assert_eq!(status, StatusCode::OK);
    let start = &json["route"]["route"][0];
    assert!((start["lat"].as_f64().unwrap() - 39.908823).abs() < 1e-9);
    assert!((start["lng"].as_f64().unwrap() - 116.397470).abs() < 1e-9);
    assert_eq!(json["route"]["target_distance_km"], 5.0);
}

#[tokio::test]
async fn test_loop_route_endpoint_validation() {
    for distance in [0.0, -2.0, 1000.0] {
        let (status, json) = post_loop(
            common::test_app(),
            json!({
                "start_point": {"lat": 48.8566, "lng": 2.3522},
                "distance_km": distance
            }),
        )
        .await;

        assert_eq!(
            status,
            StatusCode::BAD_REQUEST,
            "Should reject distance {}",
            distance
        );
        assert!(json["message"].as_str().unwrap().contains("distance_km"));
    }

    let (status, _) = post_loop(
        common::test_app(),
        json!({"start_point": {"lat": 95.0, "lng": 0.0}, "distance_km": 5.0}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_loop_route_at_pole_is_unprocessable() {
    let (status, json) = post_loop(
        common::test_app(),
        json!({"start_point": {"lat": 90.0, "lng": 0.0}, "distance_km": 5.0}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "Unprocessable Entity");
}

#[tokio::test]
async fn test_loop_route_request_deserialization() {
    let request: LoopRouteRequest = serde_json::from_value(json!({
        "start_point": {"lat": 48.8566, "lng": 2.3522},
        "distance_km": 5.0
    }))
    .unwrap();

    assert_eq!(request.start_point.unwrap().lat, 48.8566);
    assert_eq!(request.distance_km, Some(5.0));

    let empty: LoopRouteRequest = serde_json::from_value(json!({})).unwrap();
    assert!(empty.start_point.is_none());
    assert!(empty.distance_km.is_none());
}
