#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod cfg;
mod constants;
mod error;
mod estimator;
mod geodesy;
mod sample;
mod session;
mod subscribers;

pub mod display;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::Config;
    pub use crate::constants::{ACCURACY_THRESHOLD_M, EARTH_RADIUS_M};
    pub use crate::error::Error;
    pub use crate::estimator::{EstimatorState, SpeedEstimator};
    pub use crate::geodesy::{great_circle_distance_m, speed_kmh};
    pub use crate::sample::PositionSample;
    pub use crate::session::{LocationProvider, Session, UpdateRequest};
    pub use crate::subscribers::{SpeedListener, Subscriber, Subscribers};
    // re-export
    pub use hifitime::{Duration, Epoch, Unit};
}

// pub export
pub use error::Error;
