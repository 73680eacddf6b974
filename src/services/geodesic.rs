//! Great-circle direct and inverse solutions on a spherical Earth.
//!
//! Every function here uses [`EARTH_RADIUS_KM`]; the destination and length
//! calculations must agree on the sphere for the reported loop length to
//! match the travelled one.

use crate::constants::{EARTH_RADIUS_KM, POLE_COS_LAT_EPSILON};
use crate::error::LoopError;
use crate::models::{Bearing, DistanceKm, GeoPoint};

/// Point reached by travelling `distance` from `origin` along the great circle
/// leaving it at `bearing`.
///
/// Paths that cross a pole come out on the far meridian and longitudes are
/// wrapped into [-180, 180). Fails when `origin` sits on a pole, where no
/// bearing is defined, or when the result is not a finite coordinate.
pub fn destination(
    origin: &GeoPoint,
    distance: DistanceKm,
    bearing: Bearing,
) -> Result<GeoPoint, LoopError> {
    let lat1 = origin.lat.to_radians();
    let lng1 = origin.lng.to_radians();
    let delta = distance.as_km() / EARTH_RADIUS_KM;
    let theta = bearing.radians();

    if delta == 0.0 {
        return Ok(*origin);
    }
    if lat1.cos().abs() < POLE_COS_LAT_EPSILON {
        return Err(LoopError::Generation(format!(
            "bearing {} is undefined at the pole ({})",
            bearing, origin
        )));
    }

    // east = cos(lat2)·sin(dlng), north = cos(lat2)·cos(dlng); no near-1 terms
    // cancel here, so bearings stay exact close to the poles
    let east = theta.sin() * delta.sin();
    let north = lat1.cos() * delta.cos() - lat1.sin() * delta.sin() * theta.cos();
    let sin_lat2 = lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos();
    let lat2 = sin_lat2.atan2(east.hypot(north));
    let lng2 = lng1 + east.atan2(north);

    let lat = lat2.to_degrees().clamp(-90.0, 90.0);
    let lng = wrap_longitude(lng2.to_degrees());

    GeoPoint::new(lat, lng).map_err(|e| {
        LoopError::Generation(format!(
            "no destination {} along {} from ({}): {}",
            distance, bearing, origin, e
        ))
    })
}

/// Haversine great-circle distance in kilometers
pub fn distance_km(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = ((delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Initial bearing of the great circle from `from` to `to`.
/// Coincident points report north.
pub fn initial_bearing(from: &GeoPoint, to: &GeoPoint) -> Bearing {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let y = delta_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

    Bearing::wrapping(y.atan2(x).to_degrees())
}

/// Wrap any finite longitude into [-180, 180)
fn wrap_longitude(lng: f64) -> f64 {
    let wrapped = (lng + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped >= 180.0 {
        -180.0
    } else {
        wrapped
    }
}
