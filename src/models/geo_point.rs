use crate::models::Bearing;
use crate::services::geodesic;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(format!(
                "Invalid coordinates: ({}, {}) (must be finite numbers)",
                lat, lng
            ));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(GeoPoint { lat, lng })
    }

    /// Re-check the range invariant, e.g. after deserializing untrusted input
    pub fn validate(&self) -> Result<(), String> {
        GeoPoint::new(self.lat, self.lng).map(|_| ())
    }

    /// Great-circle distance to `other` in kilometers
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        geodesic::distance_km(self, other)
    }

    /// Initial great-circle bearing from this point towards `other`
    pub fn bearing_to(&self, other: &GeoPoint) -> Bearing {
        geodesic::initial_bearing(self, other)
    }

    /// Round coordinates to specified decimal places for display
    pub fn round(&self, decimal_places: u32) -> Self {
        let multiplier = 10_f64.powi(decimal_places as i32);
        GeoPoint {
            lat: (self.lat * multiplier).round() / multiplier,
            lng: (self.lng * multiplier).round() / multiplier,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_validation() {
        assert!(GeoPoint::new(39.908823, 116.397470).is_ok());
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(91.0, 0.0).is_err()); // Invalid lat
        assert!(GeoPoint::new(0.0, 181.0).is_err()); // Invalid lng
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_catches_deserialized_garbage() {
        let point: GeoPoint = serde_json::from_str(r#"{"lat": 120.0, "lng": 0.0}"#).unwrap();
        assert!(point.validate().is_err());
    }

    #[test]
    fn test_distance_calculation() {
        let paris = GeoPoint::new(48.8566, 2.3522).unwrap();
        let london = GeoPoint::new(51.5074, -0.1278).unwrap();

        let distance = paris.distance_to(&london);
        // Paris to London is approximately 344 km
        assert!((distance - 344.0).abs() < 10.0);
    }

    #[test]
    fn test_rounding() {
        let coords = GeoPoint::new(39.9174734567, 116.3974701234).unwrap();
        let rounded = coords.round(6);
        assert_eq!(rounded.lat, 39.917473);
        assert_eq!(rounded.lng, 116.39747);
    }

    #[test]
    fn test_display() {
        let coords = GeoPoint::new(39.908823, 116.39747).unwrap();
        assert_eq!(coords.to_string(), "39.908823, 116.397470");
    }
}
