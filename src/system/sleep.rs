//! Sleep abstraction
//!
//! The superloop yields to the scheduler through [`Sleep`] at the end of each
//! iteration. Implementations:
//! - [`EmbassySleep`] (firmware): awaits an `embassy_time::Timer`
//! - [`StdSleep`] (native simulator): blocks the host thread
//! - [`MockSleep`] (always available for testing): records requests and
//!   returns immediately

use embassy_time::Duration;

/// Cooperative delay primitive
#[allow(async_fn_in_trait)]
pub trait Sleep {
    /// Suspends the caller for `duration`, yielding to the scheduler
    async fn sleep(&mut self, duration: Duration);
}

/// Embassy timer backed sleep
#[cfg(feature = "rp2350")]
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassySleep;

#[cfg(feature = "rp2350")]
impl Sleep for EmbassySleep {
    async fn sleep(&mut self, duration: Duration) {
        embassy_time::Timer::after(duration).await;
    }
}

/// Host thread sleep for the native simulator
#[cfg(feature = "native-sim")]
#[derive(Debug, Default, Clone, Copy)]
pub struct StdSleep;

#[cfg(feature = "native-sim")]
impl Sleep for StdSleep {
    async fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(std::time::Duration::from_micros(duration.as_micros()));
    }
}

/// Recording sleep for tests
///
/// Never blocks; keeps the number of requests and the simulated time slept.
/// A mock built with [`MockSleep::stopping_after`] completes a fixed number of
/// requests and then stays pending forever, parking the caller.
#[derive(Debug, Clone)]
pub struct MockSleep {
    requests: u32,
    last: Option<Duration>,
    elapsed: Duration,
    limit: Option<u32>,
}

impl MockSleep {
    /// Creates a mock that has not slept yet
    pub fn new() -> Self {
        Self {
            requests: 0,
            last: None,
            elapsed: Duration::from_ticks(0),
            limit: None,
        }
    }

    /// Creates a mock that completes `limit` requests, then never wakes up
    pub fn stopping_after(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new()
        }
    }

    /// Number of sleep requests received
    pub fn requests(&self) -> u32 {
        self.requests
    }

    /// Duration of the most recent request
    pub fn last(&self) -> Option<Duration> {
        self.last
    }

    /// Sum of all requested durations
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Default for MockSleep {
    fn default() -> Self {
        Self::new()
    }
}

impl Sleep for MockSleep {
    async fn sleep(&mut self, duration: Duration) {
        if self.limit.is_some_and(|limit| self.requests >= limit) {
            core::future::pending::<()>().await;
        }
        self.requests += 1;
        self.last = Some(duration);
        self.elapsed += duration;
    }
}
