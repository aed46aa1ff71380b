//! Great circle distance and ground speed
use crate::{
    constants::{EARTH_RADIUS_M, KMH_TO_MPH, MPS_TO_MPH},
    prelude::PositionSample,
};

/// Great circle distance (meters) between two fixes, using the haversine
/// formula on a spherical Earth of radius [EARTH_RADIUS_M].
pub fn great_circle_distance_m(a: &PositionSample, b: &PositionSample) -> f64 {
    let (lat1, lon1) = a.lat_lon_rad();
    let (lat2, lon2) = b.lat_lon_rad();
    let (dlat, dlon) = (lat2 - lat1, lon2 - lon1);

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Ground speed (km/h) from `prev` to `next`.
///
/// The monotonic elapsed time is used. Null elapsed time results in
/// `nan` or infinite speed, negative elapsed time in a negative speed:
/// the caller is expected to discard such results.
pub fn speed_kmh(prev: &PositionSample, next: &PositionSample) -> f64 {
    let distance_m = great_circle_distance_m(prev, next);
    let dt_s = next.elapsed_since(prev).to_seconds();
    let speed_m_s = distance_m / dt_s;
    speed_m_s * MPS_TO_MPH / KMH_TO_MPH
}

/// Rounds to two decimal places (display precision)
pub fn round_centi(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
