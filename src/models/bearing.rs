use serde::Serialize;
use std::fmt;

/// Direction of travel in degrees clockwise from true north, always in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Bearing(f64);

impl Bearing {
    /// Normalize any finite angle into [0, 360).
    pub fn new(degrees: f64) -> Result<Self, String> {
        if !degrees.is_finite() {
            return Err("Bearing must be a finite number".to_string());
        }
        Ok(Self::wrapping(degrees))
    }

    /// Normalize an angle already known to be finite (e.g. an `atan2` result).
    pub(crate) fn wrapping(degrees: f64) -> Self {
        debug_assert!(degrees.is_finite());
        let normalized = degrees.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        Bearing(if normalized >= 360.0 { 0.0 } else { normalized })
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Smallest absolute angle between two bearings, in [0, 180]
    pub fn angle_to(self, other: Bearing) -> f64 {
        let diff = (self.0 - other.0).abs();
        diff.min(360.0 - diff)
    }

    /// Abbreviated name of the closest of the eight compass points
    pub fn compass_point(self) -> &'static str {
        const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
        let sector = ((self.0 + 22.5) / 45.0).floor() as usize % POINTS.len();
        POINTS[sector]
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearing_normalization() {
        assert_eq!(Bearing::new(0.0).unwrap().degrees(), 0.0);
        assert_eq!(Bearing::new(360.0).unwrap().degrees(), 0.0);
        assert_eq!(Bearing::new(-90.0).unwrap().degrees(), 270.0);
        assert_eq!(Bearing::new(725.0).unwrap().degrees(), 5.0);
        assert!(Bearing::new(-1e-20).unwrap().degrees() < 360.0);
        assert!(Bearing::new(f64::NAN).is_err());
        assert!(Bearing::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_angle_to_wraps_through_north() {
        let a = Bearing::new(350.0).unwrap();
        let b = Bearing::new(10.0).unwrap();
        assert!((a.angle_to(b) - 20.0).abs() < 1e-12);
        assert!((b.angle_to(a) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_compass_point() {
        let name = |deg: f64| Bearing::new(deg).unwrap().compass_point();
        assert_eq!(name(0.0), "N");
        assert_eq!(name(359.0), "N");
        assert_eq!(name(120.0), "SE");
        assert_eq!(name(240.0), "SW");
        assert_eq!(name(90.0), "E");
        assert_eq!(name(300.0), "NW");
    }
}
