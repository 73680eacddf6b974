use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div};

/// Distance in kilometers
/// Prevents mixing up units and provides type safety
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct DistanceKm(f64);

impl DistanceKm {
    pub const ZERO: DistanceKm = DistanceKm(0.0);

    pub fn new(km: f64) -> Result<Self, String> {
        if !km.is_finite() {
            return Err("Distance must be a finite number".to_string());
        }
        if km < 0.0 {
            return Err("Distance cannot be negative".to_string());
        }
        Ok(DistanceKm(km))
    }

    /// Like [`DistanceKm::new`] but also rejects zero
    pub fn positive(km: f64) -> Result<Self, String> {
        let distance = Self::new(km)?;
        if distance.0 == 0.0 {
            return Err("Distance must be greater than zero".to_string());
        }
        Ok(distance)
    }

    /// Get the raw kilometers value
    pub fn as_km(self) -> f64 {
        self.0
    }

    /// Create from raw value without validation (use carefully)
    pub fn from_raw(km: f64) -> Self {
        DistanceKm(km)
    }
}

impl fmt::Display for DistanceKm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}km", self.0)
    }
}

impl Add for DistanceKm {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        DistanceKm(self.0 + other.0)
    }
}

impl Div<f64> for DistanceKm {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        DistanceKm(self.0 / scalar)
    }
}

impl Sum for DistanceKm {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(DistanceKm::ZERO, Add::add)
    }
}
