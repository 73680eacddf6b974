//! Stable application-wide constants.
//!
//! Values here are geometric invariants of the loop engine and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For values that callers may tune at runtime, see
//! [`LoopConfig`](crate::config::LoopConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Earth model ---

/// Mean Earth radius in kilometers. The destination and length calculators
/// both use this sphere; mixing models between them skews the reported length.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

// --- Loop geometry ---

/// Bearings (degrees clockwise from true north) of the three loop vertices,
/// in visiting order.
pub const LOOP_BEARINGS_DEG: [f64; 3] = [0.0, 120.0, 240.0];

/// Number of waypoints visited between leaving and returning to the origin.
pub const LOOP_WAYPOINT_COUNT: usize = LOOP_BEARINGS_DEG.len();

/// Closed path length: origin, each waypoint, origin again.
pub const LOOP_PATH_LEN: usize = LOOP_WAYPOINT_COUNT + 2;

/// Cosine of latitude below which an origin is treated as sitting on a pole.
/// Bearings are undefined there, so all three vertices would coincide.
pub const POLE_COS_LAT_EPSILON: f64 = 1e-12;

/// Minimum separation (km) between two loop vertices before the loop is
/// considered degenerate.
pub const MIN_WAYPOINT_SEPARATION_KM: f64 = 1e-9;

/// Decimal places used when presenting waypoint coordinates.
pub const DISPLAY_COORDINATE_DECIMALS: u32 = 6;

// --- Request defaults (used when LOOP_* env vars are absent) ---

/// Fallback origin latitude used when no live position is supplied.
pub const DEFAULT_ORIGIN_LAT: f64 = 39.908823;
/// Fallback origin longitude used when no live position is supplied.
pub const DEFAULT_ORIGIN_LNG: f64 = 116.397470;
/// Target loop length when the request does not name one.
pub const DEFAULT_TARGET_DISTANCE_KM: f64 = 5.0;
/// Shortest loop the HTTP surface accepts.
pub const DEFAULT_MIN_DISTANCE_KM: f64 = 0.1;
/// Longest loop the HTTP surface accepts.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 100.0;

/// Accepted relative deviation between achieved and requested length.
/// A planar origin-centred triangle loop overshoots by about 5.2 %, so 10 %
/// leaves room for curvature at city scale while flagging polar or very long
/// loops.
pub const DEFAULT_DISTANCE_TOLERANCE_PCT: f64 = 0.10;
