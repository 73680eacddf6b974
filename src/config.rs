use crate::constants::*;
use crate::models::GeoPoint;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub loop_config: LoopConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopConfig {
    /// Origin used when a request carries no position fix
    pub default_origin: GeoPoint,

    /// Loop length used when a request names none
    pub default_distance_km: f64,

    /// Shortest loop accepted from a request
    pub min_distance_km: f64,

    /// Longest loop accepted from a request
    pub max_distance_km: f64,

    /// Accepted relative deviation of the achieved length (as fraction, e.g. 0.1 = ±10%)
    pub distance_tolerance_pct: f64,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            default_origin: GeoPoint {
                lat: DEFAULT_ORIGIN_LAT,
                lng: DEFAULT_ORIGIN_LNG,
            },
            default_distance_km: DEFAULT_TARGET_DISTANCE_KM,
            min_distance_km: DEFAULT_MIN_DISTANCE_KM,
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            distance_tolerance_pct: DEFAULT_DISTANCE_TOLERANCE_PCT,
        }
    }
}

/// Read `key`, falling back to `default` when unset
fn env_or<T: FromStr + ToString>(key: &str, default: T) -> Result<T, String> {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| format!("Invalid {}", key))
}

impl LoopConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let origin_lat = env_or("LOOP_DEFAULT_LAT", defaults.default_origin.lat)?;
        let origin_lng = env_or("LOOP_DEFAULT_LNG", defaults.default_origin.lng)?;
        let default_origin = GeoPoint::new(origin_lat, origin_lng)
            .map_err(|e| format!("Invalid LOOP_DEFAULT_LAT/LOOP_DEFAULT_LNG: {}", e))?;

        let config = Self {
            default_origin,
            default_distance_km: env_or("LOOP_DEFAULT_DISTANCE_KM", defaults.default_distance_km)?,
            min_distance_km: env_or("LOOP_MIN_DISTANCE_KM", defaults.min_distance_km)?,
            max_distance_km: env_or("LOOP_MAX_DISTANCE_KM", defaults.max_distance_km)?,
            distance_tolerance_pct: env_or(
                "LOOP_DISTANCE_TOLERANCE_PCT",
                defaults.distance_tolerance_pct,
            )?,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.min_distance_km > 0.0 && self.min_distance_km < self.max_distance_km)
            || !self.max_distance_km.is_finite()
        {
            return Err(
                "LOOP_MIN_DISTANCE_KM must be positive and below LOOP_MAX_DISTANCE_KM".to_string(),
            );
        }
        if !(self.min_distance_km..=self.max_distance_km).contains(&self.default_distance_km) {
            return Err(format!(
                "LOOP_DEFAULT_DISTANCE_KM must be between {} and {}",
                self.min_distance_km, self.max_distance_km
            ));
        }
        if !(self.distance_tolerance_pct > 0.0 && self.distance_tolerance_pct <= 1.0) {
            return Err("LOOP_DISTANCE_TOLERANCE_PCT must be in (0, 1]".to_string());
        }
        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            loop_config: LoopConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
