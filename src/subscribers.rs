use std::sync::Arc;

/// Any speed display (or consumer) should implement [SpeedListener]
/// to be notified by the [SpeedEstimator].
///
/// Notifications are delivered synchronously, on the thread that pushed
/// the fix, after the estimator state has been released.
/// Implementations must not block: hand the value over to your
/// own queue or rendering loop.
///
/// [SpeedEstimator]: crate::prelude::SpeedEstimator
pub trait SpeedListener: Send + Sync {
    /// Speed estimate (km/h) rounded to two decimal places
    fn on_speed_changed(&self, speed_kmh: f64);
}

impl<F> SpeedListener for F
where
    F: Fn(f64) + Send + Sync,
{
    fn on_speed_changed(&self, speed_kmh: f64) {
        self(speed_kmh)
    }
}

/// Subscription handle. Two handles are the same subscriber when
/// they point to the same allocation.
pub type Subscriber = Arc<dyn SpeedListener>;

fn same_subscriber(a: &Subscriber, b: &Subscriber) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

/// Insertion ordered set of [Subscriber]s
#[derive(Default, Clone)]
pub struct Subscribers {
    inner: Vec<Subscriber>,
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.inner.len())
            .finish()
    }
}

impl Subscribers {
    pub fn new() -> Self {
        Self {
            inner: Vec::with_capacity(4),
        }
    }

    /// Adds [Subscriber], returns false if it was already registered
    pub fn insert(&mut self, subscriber: Subscriber) -> bool {
        if self.contains(&subscriber) {
            false
        } else {
            self.inner.push(subscriber);
            true
        }
    }

    /// Removes [Subscriber], returns false if it was not registered
    pub fn remove(&mut self, subscriber: &Subscriber) -> bool {
        let len = self.inner.len();
        self.inner.retain(|s| !same_subscriber(s, subscriber));
        self.inner.len() != len
    }

    pub fn contains(&self, subscriber: &Subscriber) -> bool {
        self.inner.iter().any(|s| same_subscriber(s, subscriber))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Clones all handles, in registration order
    pub fn snapshot(&self) -> Vec<Subscriber> {
        self.inner.clone()
    }
}
