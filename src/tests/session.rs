use std::sync::Arc;

use rstest::*;

use crate::prelude::{
    Config, Duration, Epoch, LocationProvider, PositionSample, Session, SpeedEstimator, Unit,
    UpdateRequest,
};
use crate::tests::{fix, init_logger, Recorder};

/// Replays a predefined list of fixes on request
#[derive(Default)]
struct ReplayProvider {
    last_known: Option<PositionSample>,
    replay: Vec<PositionSample>,
    requests: Vec<UpdateRequest>,
    removals: usize,
}

impl LocationProvider for ReplayProvider {
    fn last_known(&self) -> Option<PositionSample> {
        self.last_known
    }

    fn request_updates(&mut self, request: UpdateRequest, sink: Arc<SpeedEstimator>) {
        self.requests.push(request);
        for sample in self.replay.iter() {
            sink.ingest(*sample);
        }
    }

    fn remove_updates(&mut self) {
        self.removals += 1;
    }
}

fn now() -> Epoch {
    Epoch::from_unix_milliseconds(1_700_000_000_000.0)
}

fn cached_fix(age: Duration) -> PositionSample {
    let t = now() - age;
    let wall_clock_ms = t.to_unix_milliseconds() as i64;
    PositionSample::new(10.0, 10.0, 8.0, 1, wall_clock_ms)
}

#[test]
fn start_stop() {
    init_logger();
    let provider = ReplayProvider::default();
    let estimator = Arc::new(SpeedEstimator::default());
    let mut session = Session::new(provider, estimator);
    assert!(!session.is_tracking());

    session.start(now());
    assert!(session.is_tracking());
    assert_eq!(
        session.provider().requests,
        vec![UpdateRequest {
            min_interval: Unit::Second * 3,
            min_distance_m: 5.0,
        }]
    );

    // already tracking
    session.start(now());
    assert_eq!(session.provider().requests.len(), 1);

    session.stop();
    assert!(!session.is_tracking());
    assert_eq!(session.provider().removals, 1);

    // already stopped
    session.stop();
    assert_eq!(session.provider().removals, 1);

    // restart
    session.start(now());
    assert_eq!(session.provider().requests.len(), 2);
}

#[test]
fn custom_request() {
    let cfg = Config::default().with_update_request(Unit::Second * 1, 0.0);
    let estimator = Arc::new(SpeedEstimator::new(cfg));
    let mut session = Session::new(ReplayProvider::default(), estimator);
    session.start(now());
    assert_eq!(session.provider().requests[0].min_interval, Unit::Second * 1);
    assert_eq!(session.provider().requests[0].min_distance_m, 0.0);
}

#[rstest]
#[case(Unit::Second * 10, true)]
#[case(Unit::Minute * 29, true)]
#[case(Unit::Minute * 31, false)]
#[case(Unit::Hour * 24, false)]
fn last_known_seeding(#[case] age: Duration, #[case] seeded: bool) {
    init_logger();
    let provider = ReplayProvider {
        last_known: Some(cached_fix(age)),
        ..Default::default()
    };

    let estimator = Arc::new(SpeedEstimator::default());
    let recorder = Recorder::new();
    estimator.subscribe(recorder.subscriber.clone());

    let mut session = Session::new(provider, estimator);
    session.start(now());

    assert_eq!(session.estimator().has_fix(), seeded);
    assert_eq!(recorder.count(), if seeded { 1 } else { 0 });
}

#[test]
fn custom_max_age() {
    let provider = ReplayProvider {
        last_known: Some(cached_fix(Unit::Minute * 5)),
        ..Default::default()
    };
    let cfg = Config::default().with_max_last_known_age(Unit::Minute * 1);
    let mut session = Session::new(provider, Arc::new(SpeedEstimator::new(cfg)));
    session.start(now());
    assert!(!session.estimator().has_fix());
}

#[test]
fn replayed_trip() {
    init_logger();
    let provider = ReplayProvider {
        replay: vec![
            fix(0.0, 0.0, 0),
            fix(0.008993, 0.0, 100),
            PositionSample::new(5.0, 5.0, 150.0, 110_000_000_000, 0),
            fix(0.017986, 0.0, 200),
        ],
        ..Default::default()
    };

    let estimator = Arc::new(SpeedEstimator::default());
    let recorder = Recorder::new();
    estimator.subscribe(recorder.subscriber.clone());

    let mut session = Session::new(provider, estimator.clone());
    session.start(now());

    let values = recorder.values();
    assert_eq!(values.len(), 3);
    assert_eq!(values[0], 0.0);
    assert!((values[1] - 36.0).abs() < 0.5);
    assert!((values[2] - 36.0).abs() < 0.5);
    assert_eq!(estimator.last_sample(), Some(fix(0.017986, 0.0, 200)));
}
