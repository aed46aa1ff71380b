mod session;


use log::LevelFilter;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, Once,
};

use crate::prelude::{PositionSample, Subscriber};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .init();
    });
}

pub const SECOND_NS: u64 = 1_000_000_000;

/// Builds an accurate (5 m) fix at `t_s` seconds
pub fn fix(lat: f64, lon: f64, t_s: u64) -> PositionSample {
    PositionSample::new(lat, lon, 5.0, t_s * SECOND_NS, t_s as i64 * 1000)
}

/// [Subscriber] that records every notification
pub struct Recorder {
    pub values: Arc<Mutex<Vec<f64>>>,
    pub count: Arc<AtomicUsize>,
    pub subscriber: Subscriber,
}

impl Recorder {
    pub fn new() -> Self {
        let values = Arc::new(Mutex::new(Vec::new()));
        let count = Arc::new(AtomicUsize::new(0));
        let (v, c) = (values.clone(), count.clone());
        let subscriber: Subscriber = Arc::new(move |speed: f64| {
            c.fetch_add(1, Ordering::SeqCst);
            v.lock().unwrap().push(speed);
        });
        Self {
            values,
            count,
            subscriber,
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn values(&self) -> Vec<f64> {
        self.values.lock().unwrap().clone()
    }
}
