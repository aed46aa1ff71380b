use std::sync::Arc;

use hifitime::{Duration, Epoch};
use log::{debug, info};

use crate::prelude::{Config, PositionSample, SpeedEstimator};

/// Parameters of the location updates requested to the [LocationProvider]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateRequest {
    /// Minimal interval between two fixes
    pub min_interval: Duration,
    /// Minimal displacement (meters) between two fixes
    pub min_distance_m: f64,
}

impl UpdateRequest {
    fn from_config(cfg: &Config) -> Self {
        Self {
            min_interval: cfg.min_update_interval,
            min_distance_m: cfg.min_update_distance_m,
        }
    }
}

/// Any platform location service should implement [LocationProvider]
/// to feed a [Session].
pub trait LocationProvider {
    /// Latest fix cached by the platform, if any.
    fn last_known(&self) -> Option<PositionSample>;

    /// Start delivering fixes, in chronological order, to `sink`
    /// by means of [SpeedEstimator::ingest].
    fn request_updates(&mut self, request: UpdateRequest, sink: Arc<SpeedEstimator>);

    /// Stop delivering fixes.
    fn remove_updates(&mut self);
}

/// [Session] ties a [LocationProvider] to a [SpeedEstimator]
/// and manages the tracking lifecycle.
pub struct Session<P: LocationProvider> {
    provider: P,
    estimator: Arc<SpeedEstimator>,
    tracking: bool,
}

impl<P: LocationProvider> Session<P> {
    pub fn new(provider: P, estimator: Arc<SpeedEstimator>) -> Self {
        Self {
            provider,
            estimator,
            tracking: false,
        }
    }

    /// Starts tracking, `now` being the current wall clock instant.
    /// Has no effect if we're already tracking.
    ///
    /// The cached fix of the provider seeds the estimator,
    /// unless it is older than [Config::max_last_known_age].
    pub fn start(&mut self, now: Epoch) {
        if self.tracking {
            return;
        }

        let cfg = self.estimator.config().clone();

        if let Some(last_known) = self.provider.last_known() {
            let age = now - last_known.epoch();
            if age < cfg.max_last_known_age {
                debug!(
                    "seeding with last known fix ({:.6}°, {:.6}°) ±{}m - age: {}",
                    last_known.latitude, last_known.longitude, last_known.accuracy_m, age
                );
                self.estimator.ingest(last_known);
            } else {
                debug!("discarding outdated last known fix - age: {}", age);
            }
        }

        let request = UpdateRequest::from_config(&cfg);
        info!(
            "requesting location updates: {} / {}m",
            request.min_interval, request.min_distance_m
        );
        self.provider
            .request_updates(request, Arc::clone(&self.estimator));
        self.tracking = true;
    }

    /// Stops tracking. Has no effect if we're not tracking.
    pub fn stop(&mut self) {
        if self.tracking {
            self.provider.remove_updates();
            self.tracking = false;
            info!("location updates removed");
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn estimator(&self) -> &Arc<SpeedEstimator> {
        &self.estimator
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}
