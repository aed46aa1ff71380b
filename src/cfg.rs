use hifitime::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        max_last_known_age, min_update_interval, ACCURACY_THRESHOLD_M, MIN_UPDATE_DISTANCE_M,
    },
    error::Error,
};

fn default_accuracy_threshold() -> f64 {
    ACCURACY_THRESHOLD_M
}

fn default_notify_on_rejection() -> bool {
    true
}

fn default_min_update_interval() -> Duration {
    min_update_interval()
}

fn default_min_update_distance() -> f64 {
    MIN_UPDATE_DISTANCE_M
}

fn default_max_last_known_age() -> Duration {
    max_last_known_age()
}

/// [SpeedEstimator] and [Session] parametrization.
///
/// [SpeedEstimator]: crate::prelude::SpeedEstimator
/// [Session]: crate::prelude::Session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Fixes with an accuracy radius (meters) larger than this are rejected.
    #[cfg_attr(feature = "serde", serde(default = "default_accuracy_threshold"))]
    pub accuracy_threshold_m: f64,
    /// Notify listeners even when the fix was dropped because
    /// its speed could not be resolved (null or negative elapsed time,
    /// invalid coordinates). Listeners then receive the previous estimate.
    #[cfg_attr(feature = "serde", serde(default = "default_notify_on_rejection"))]
    pub notify_on_rejection: bool,
    /// Minimal interval between two fixes, requested to the location provider
    #[cfg_attr(feature = "serde", serde(default = "default_min_update_interval"))]
    pub min_update_interval: Duration,
    /// Minimal displacement (meters) between two fixes, requested to the location provider
    #[cfg_attr(feature = "serde", serde(default = "default_min_update_distance"))]
    pub min_update_distance_m: f64,
    /// Cached fix older than this is not used to seed the estimator on startup
    #[cfg_attr(feature = "serde", serde(default = "default_max_last_known_age"))]
    pub max_last_known_age: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accuracy_threshold_m: default_accuracy_threshold(),
            notify_on_rejection: default_notify_on_rejection(),
            min_update_interval: default_min_update_interval(),
            min_update_distance_m: default_min_update_distance(),
            max_last_known_age: default_max_last_known_age(),
        }
    }
}

impl Config {
    /// Copies and returns [Config] with updated accuracy threshold (meters)
    pub fn with_accuracy_threshold(&self, threshold_m: f64) -> Self {
        let mut s = self.clone();
        s.accuracy_threshold_m = threshold_m;
        s
    }

    /// Copies and returns [Config] with notification on rejected fixes
    /// enabled or disabled.
    pub fn with_notify_on_rejection(&self, notify: bool) -> Self {
        let mut s = self.clone();
        s.notify_on_rejection = notify;
        s
    }

    /// Copies and returns [Config] with updated provider request parameters
    pub fn with_update_request(&self, min_interval: Duration, min_distance_m: f64) -> Self {
        let mut s = self.clone();
        s.min_update_interval = min_interval;
        s.min_update_distance_m = min_distance_m;
        s
    }

    /// Copies and returns [Config] with updated maximal age of the startup fix
    pub fn with_max_last_known_age(&self, age: Duration) -> Self {
        let mut s = self.clone();
        s.max_last_known_age = age;
        s
    }

    /// Verifies this [Config] is physically meaningful.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.accuracy_threshold_m.is_finite() || self.accuracy_threshold_m <= 0.0 {
            return Err(Error::InvalidAccuracyThreshold(self.accuracy_threshold_m));
        }
        if !self.min_update_distance_m.is_finite() || self.min_update_distance_m < 0.0 {
            return Err(Error::InvalidUpdateDistance(self.min_update_distance_m));
        }
        if self.min_update_interval.is_negative() {
            return Err(Error::NegativeDuration(self.min_update_interval.to_string()));
        }
        if self.max_last_known_age.is_negative() {
            return Err(Error::NegativeDuration(self.max_last_known_age.to_string()));
        }
        Ok(())
    }
}
