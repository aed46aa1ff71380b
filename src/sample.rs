use hifitime::{Duration, Epoch};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [PositionSample] is one position fix, as delivered by the location provider.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionSample {
    /// Latitude (degrees)
    pub latitude: f64,
    /// Longitude (degrees)
    pub longitude: f64,
    /// Accuracy radius (meters), as reported by the provider
    pub accuracy_m: f64,
    /// Monotonic clock timestamp (nanoseconds), immune to wall clock adjustments
    pub monotonic_time_ns: u64,
    /// Wall clock timestamp (milliseconds since UNIX epoch)
    pub wall_clock_ms: i64,
}

impl PositionSample {
    /// Builds a new [PositionSample]
    /// - latitude, longitude: degrees
    /// - accuracy_m: accuracy radius in meters
    /// - monotonic_time_ns: monotonic timestamp in nanoseconds
    /// - wall_clock_ms: UNIX timestamp in milliseconds
    pub fn new(
        latitude: f64,
        longitude: f64,
        accuracy_m: f64,
        monotonic_time_ns: u64,
        wall_clock_ms: i64,
    ) -> Self {
        Self {
            latitude,
            longitude,
            accuracy_m,
            monotonic_time_ns,
            wall_clock_ms,
        }
    }

    /// Returns (latitude, longitude) in radians
    pub fn lat_lon_rad(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }

    /// Monotonic [Duration] elapsed since `prev`.
    /// Negative when `prev` was sampled after `self`.
    pub fn elapsed_since(&self, prev: &Self) -> Duration {
        let dt_ns = self.monotonic_time_ns as i128 - prev.monotonic_time_ns as i128;
        Duration::from_total_nanoseconds(dt_ns)
    }

    /// Wall clock instant of this fix, as an [Epoch]
    pub fn epoch(&self) -> Epoch {
        Epoch::from_unix_milliseconds(self.wall_clock_ms as f64)
    }

    /// True when the accuracy radius is acceptable with respect to `threshold_m`.
    /// A `nan` accuracy is never acceptable.
    pub fn is_accurate(&self, threshold_m: f64) -> bool {
        self.accuracy_m <= threshold_m
    }
}

#[cfg(test)]
mod test {
    use super::PositionSample;

    #[test]
    fn elapsed_time() {
        let t0 = PositionSample::new(0.0, 0.0, 1.0, 1_000_000_000, 0);
        let t1 = PositionSample::new(0.0, 0.0, 1.0, 3_500_000_000, 0);
        assert!((t1.elapsed_since(&t0).to_seconds() - 2.5).abs() < 1.0E-9);
        assert!((t0.elapsed_since(&t1).to_seconds() + 2.5).abs() < 1.0E-9);
        assert!(t0.elapsed_since(&t1).is_negative());
        assert_eq!(t0.elapsed_since(&t0).to_seconds(), 0.0);
    }

    #[test]
    fn accuracy_gate() {
        let sample = PositionSample::new(0.0, 0.0, 100.0, 0, 0);
        assert!(sample.is_accurate(100.0));
        assert!(!sample.is_accurate(99.9));

        let sample = PositionSample::new(0.0, 0.0, f64::NAN, 0, 0);
        assert!(!sample.is_accurate(100.0));
    }

    #[test]
    fn wall_clock_epoch() {
        let sample = PositionSample::new(0.0, 0.0, 1.0, 0, 1_000);
        let t0 = PositionSample::new(0.0, 0.0, 1.0, 0, 0).epoch();
        assert!(((sample.epoch() - t0).to_seconds() - 1.0).abs() < 1.0E-6);
    }
}
