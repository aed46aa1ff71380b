//! Speed labels, as shown on a heads up display
use crate::{geodesy::round_centi, prelude::SpeedEstimator};

/// Shown while waiting for the first fix
pub const NO_FIX_LABEL: &str = "----km/H";

/// Shown once tracking has been stopped
pub const STOPPED_LABEL: &str = "--km/H";

/// Formats a speed (km/h) with two decimal places
pub fn speed_label(speed_kmh: f64) -> String {
    format!("{:.2} km/H", round_centi(speed_kmh))
}

/// Label describing the current state of the [SpeedEstimator]
pub fn current_label(estimator: &SpeedEstimator) -> String {
    if estimator.last_location().is_some() {
        speed_label(estimator.current_speed_kmh())
    } else {
        NO_FIX_LABEL.to_string()
    }
}
