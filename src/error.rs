use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Accuracy threshold must be a finite, strictly positive radius.
    #[error("invalid accuracy threshold: {0} m")]
    InvalidAccuracyThreshold(f64),

    /// Provider update distance must be finite and positive (or null).
    #[error("invalid minimal update distance: {0} m")]
    InvalidUpdateDistance(f64),

    #[error("negative duration is not allowed: {0}")]
    NegativeDuration(String),

    /// Fix accuracy radius exceeds the threshold, or is not a number.
    /// Such fix never contributes to the estimate.
    #[error("rejected fix: accuracy {accuracy_m} m exceeds {threshold_m} m")]
    LowAccuracy { accuracy_m: f64, threshold_m: f64 },

    /// Null or negative elapsed time between two fixes
    /// (out of order delivery or clock anomaly).
    #[error("rejected fix: elapsed time {0} s is not positive")]
    DegenerateTiming(f64),

    /// Latitude or longitude is not a finite number
    #[error("rejected fix: invalid coordinates")]
    InvalidCoordinates,

    /// Speed resolved to `nan`, infinite or negative value (invalid coordinates)
    #[error("rejected fix: speed resolved to {0}")]
    NonFiniteSpeed(f64),
}
