//! Speed estimator
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hifitime::Duration;
use log::{debug, trace, warn};

use crate::{
    error::Error,
    geodesy::{round_centi, speed_kmh},
    prelude::{Config, PositionSample, Subscriber, Subscribers},
};

/// [EstimatorState] is the estimate the [SpeedEstimator] maintains.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct EstimatorState {
    /// Most recent fix that was accepted as reference point
    pub last_accepted_sample: Option<PositionSample>,
    /// Latest speed estimate (km/h), always finite and positive.
    pub current_speed_kmh: f64,
}

impl EstimatorState {
    /// Runs the fix through the accuracy gate and the speed update.
    /// Returns the current speed estimate (km/h) when the fix was accepted.
    fn update(&mut self, threshold_m: f64, sample: PositionSample) -> Result<f64, Error> {
        if !sample.is_accurate(threshold_m) {
            return Err(Error::LowAccuracy {
                accuracy_m: sample.accuracy_m,
                threshold_m,
            });
        }

        if !sample.latitude.is_finite() || !sample.longitude.is_finite() {
            return Err(Error::InvalidCoordinates);
        }

        let prev = match self.last_accepted_sample {
            Some(prev) => prev,
            None => {
                // first fix: reference point only
                self.last_accepted_sample = Some(sample);
                return Ok(self.current_speed_kmh);
            },
        };

        let dt = sample.elapsed_since(&prev);
        if dt <= Duration::ZERO {
            return Err(Error::DegenerateTiming(dt.to_seconds()));
        }

        let speed = speed_kmh(&prev, &sample);
        if !speed.is_finite() || speed < 0.0 {
            return Err(Error::NonFiniteSpeed(speed));
        }

        self.last_accepted_sample = Some(sample);
        self.current_speed_kmh = speed;
        Ok(speed)
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: EstimatorState,
    /// Latest fix that passed the accuracy gate
    location: Option<PositionSample>,
    subscribers: Subscribers,
}

/// [SpeedEstimator] converts a stream of [PositionSample]s into a ground
/// speed estimate and notifies its [Subscriber]s.
///
/// All methods take `&self`: wrap the estimator in an [Arc] to share it
/// between the location provider and the display.
/// Fixes are expected in chronological order (monotonic clock); fixes that
/// do not respect that are dropped, never panic.
///
/// [Arc]: std::sync::Arc
#[derive(Debug)]
pub struct SpeedEstimator {
    cfg: Config,
    inner: RwLock<Inner>,
}

impl Default for SpeedEstimator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl SpeedEstimator {
    /// Builds a new [SpeedEstimator] without fix, speed is 0 km/h.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Builds a new [SpeedEstimator] from a [Config] that is verified first.
    pub fn try_new(cfg: Config) -> Result<Self, Error> {
        cfg.validate()?;
        Ok(Self::new(cfg))
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Push a new [PositionSample].
    ///
    /// - fixes above the accuracy threshold are silently rejected,
    ///   nobody is notified.
    /// - the very first accurate fix becomes the reference point,
    ///   the estimate remains unchanged.
    /// - following fixes update the estimate, unless the speed
    ///   cannot be resolved (null or negative elapsed time, invalid coordinates):
    ///   the fix is then dropped and the state is preserved.
    ///
    /// Every [Subscriber] is notified once with the current estimate
    /// for each fix that passed the accuracy gate, see [Config::notify_on_rejection].
    pub fn ingest(&self, sample: PositionSample) {
        let (speed, subscribers) = {
            let mut inner = self.write();
            match inner.state.update(self.cfg.accuracy_threshold_m, sample) {
                Ok(speed) => {
                    inner.location = Some(sample);
                    debug!(
                        "({:.6}°, {:.6}°) ±{}m - speed: {:.3} km/h",
                        sample.latitude, sample.longitude, sample.accuracy_m, speed
                    );
                },
                Err(e @ Error::LowAccuracy { .. }) => {
                    debug!("({:.6}°, {:.6}°) {}", sample.latitude, sample.longitude, e);
                    return;
                },
                Err(e) => {
                    inner.location = Some(sample);
                    warn!("({:.6}°, {:.6}°) {}", sample.latitude, sample.longitude, e);
                    if !self.cfg.notify_on_rejection {
                        return;
                    }
                },
            }
            (
                round_centi(inner.state.current_speed_kmh),
                inner.subscribers.snapshot(),
            )
        };

        for subscriber in subscribers.iter() {
            trace!("notifying {:.2} km/h", speed);
            subscriber.on_speed_changed(speed);
        }
    }

    /// Registers a [Subscriber]. Registering twice has no effect.
    pub fn subscribe(&self, subscriber: Subscriber) {
        if !self.write().subscribers.insert(subscriber) {
            debug!("subscriber already registered");
        }
    }

    /// Unregisters a [Subscriber]. No-op if it was never registered.
    pub fn unsubscribe(&self, subscriber: &Subscriber) {
        if !self.write().subscribers.remove(subscriber) {
            debug!("unknown subscriber");
        }
    }

    /// Number of registered [Subscriber]s
    pub fn subscribers(&self) -> usize {
        self.read().subscribers.len()
    }

    /// Latest speed estimate (km/h), 0 until it could be resolved.
    pub fn current_speed_kmh(&self) -> f64 {
        self.read().state.current_speed_kmh
    }

    /// True once a fix has been accepted as reference point.
    pub fn has_fix(&self) -> bool {
        self.read().state.last_accepted_sample.is_some()
    }

    /// Most recent accepted fix
    pub fn last_sample(&self) -> Option<PositionSample> {
        self.read().state.last_accepted_sample
    }

    /// Most recent fix that passed the accuracy gate, even if it
    /// could not contribute to the estimate.
    pub fn last_location(&self) -> Option<PositionSample> {
        self.read().location
    }

    /// Snapshot of the [EstimatorState]
    pub fn state(&self) -> EstimatorState {
        self.read().state
    }
}
