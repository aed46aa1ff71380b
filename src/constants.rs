use hifitime::{Duration, Unit};

/// Earth mean radius (meters), spherical approximation
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Maximal accuracy radius (meters) of a fix we accept
pub const ACCURACY_THRESHOLD_M: f64 = 100.0;

/// m.s⁻¹ to mph
pub const MPS_TO_MPH: f64 = 2.23694;

/// km/h to mph
pub const KMH_TO_MPH: f64 = 0.62137;

/// Minimal displacement (meters) between two fixes requested to the provider
pub const MIN_UPDATE_DISTANCE_M: f64 = 5.0;

/// Minimal interval between two fixes requested to the provider
pub fn min_update_interval() -> Duration {
    Unit::Second * 3
}

/// Cached fixes older than this are not used to seed the estimator
pub fn max_last_known_age() -> Duration {
    Unit::Minute * 30
}
