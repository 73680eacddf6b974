use crate::config::LoopConfig;
use crate::constants::DISPLAY_COORDINATE_DECIMALS;
use crate::models::{Bearing, DistanceKm, GeoPoint};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A loop vertex, labelled for display
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Waypoint {
    pub label: String,
    #[serde(flatten)]
    pub point: GeoPoint,
    /// Bearing from the origin this waypoint was projected along
    pub bearing: Bearing,
}

impl Waypoint {
    pub fn new(label: impl Into<String>, point: GeoPoint, bearing: Bearing) -> Self {
        Waypoint {
            label: label.into(),
            point,
            bearing,
        }
    }

    /// Coordinates rounded for presentation next to the label
    pub fn display_point(&self) -> GeoPoint {
        self.point.round(DISPLAY_COORDINATE_DECIMALS)
    }
}

/// Ordered, closed path: the first and last points are identical.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Route {
    points: Vec<GeoPoint>,
}

impl Route {
    pub fn closed(points: Vec<GeoPoint>) -> Result<Self, String> {
        if points.len() < 2 {
            return Err(format!(
                "A route needs at least 2 points, got {}",
                points.len()
            ));
        }
        if points.first() != points.last() {
            return Err("A closed route must end where it starts".to_string());
        }
        Ok(Route { points })
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn start(&self) -> GeoPoint {
        self.points[0]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// A closed route always holds at least two points, so this is never true
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs, one per travelled leg
    pub fn segments(&self) -> impl Iterator<Item = (&GeoPoint, &GeoPoint)> {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }
}

/// Output of one loop generation.
#[derive(Debug, Clone, Serialize)]
pub struct RouteResult {
    pub waypoints: Vec<Waypoint>,
    pub route: Route,
    pub target_distance_km: DistanceKm,
    /// Distance from the origin to each waypoint
    pub radius_km: DistanceKm,
    /// Geodesic length of `route`; generally differs from the target
    pub achieved_distance_km: DistanceKm,
}

impl RouteResult {
    /// Signed relative error of the achieved length, e.g. 0.05 = 5% too long
    pub fn deviation_pct(&self) -> f64 {
        (self.achieved_distance_km.as_km() - self.target_distance_km.as_km())
            / self.target_distance_km.as_km()
    }

    pub fn within_tolerance(&self, tolerance_pct: f64) -> bool {
        self.deviation_pct().abs() <= tolerance_pct
    }

    /// User-facing confirmation, reporting what was actually built
    pub fn confirmation_message(&self) -> String {
        format!(
            "Route generated ({:.1} km)",
            self.achieved_distance_km.as_km()
        )
    }

    /// Map overlay: a start marker, one marker per waypoint and the closed polyline.
    /// GeoJSON positions are `[lng, lat]`.
    pub fn to_geojson(&self) -> FeatureCollection {
        let mut features = Vec::with_capacity(self.waypoints.len() + 2);

        features.push(feature(
            Value::Point(position(&self.route.start())),
            json!({ "kind": "start", "label": "Start" }),
        ));

        for (index, waypoint) in self.waypoints.iter().enumerate() {
            features.push(feature(
                Value::Point(position(&waypoint.point)),
                json!({
                    "kind": "waypoint",
                    "order": index + 1,
                    "label": waypoint.label,
                    "bearing": waypoint.bearing.degrees(),
                    "display": waypoint.display_point().to_string(),
                }),
            ));
        }

        features.push(feature(
            Value::LineString(self.route.points().iter().map(position).collect()),
            json!({
                "kind": "route",
                "distance_km": self.achieved_distance_km.as_km(),
            }),
        ));

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

fn position(point: &GeoPoint) -> Vec<f64> {
    vec![point.lng, point.lat]
}

fn feature(value: Value, properties: serde_json::Value) -> Feature {
    let properties: Option<JsonObject> = match properties {
        serde_json::Value::Object(map) => Some(map),
        _ => None,
    };
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties,
        foreign_members: None,
    }
}

// Request/Response types for API endpoints

#[derive(Debug, Default, Deserialize)]
pub struct LoopRouteRequest {
    /// Live position fix; the configured fallback origin is used when absent
    #[serde(default)]
    pub start_point: Option<GeoPoint>,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

impl LoopRouteRequest {
    /// Fill in defaults and check the request against the configured bounds
    pub fn resolve(&self, config: &LoopConfig) -> Result<(GeoPoint, f64), String> {
        let start = match self.start_point {
            Some(point) => {
                point.validate()?;
                point
            }
            None => config.default_origin,
        };

        let distance_km = self.distance_km.unwrap_or(config.default_distance_km);
        if !distance_km.is_finite()
            || !(config.min_distance_km..=config.max_distance_km).contains(&distance_km)
        {
            return Err(format!(
                "distance_km must be between {} and {}",
                config.min_distance_km, config.max_distance_km
            ));
        }

        Ok((start, distance_km))
    }
}

#[derive(Debug, Serialize)]
pub struct LoopRouteResponse {
    pub route: RouteResult,
    pub deviation_pct: f64,
    pub within_tolerance: bool,
    pub message: String,
    pub geojson: FeatureCollection,
}

impl LoopRouteResponse {
    pub fn new(route: RouteResult, tolerance_pct: f64) -> Self {
        LoopRouteResponse {
            deviation_pct: route.deviation_pct(),
            within_tolerance: route.within_tolerance(tolerance_pct),
            message: route.confirmation_message(),
            geojson: route.to_geojson(),
            route,
        }
    }
}
