//! Superloop configuration
//!
//! Everything is fixed at compile time; the driver takes a [`SuperloopConfig`]
//! so the simulator and the tests can run it with a different interval.

use embassy_time::Duration;

/// Pause between two superloop iterations (1s)
pub const LOOP_INTERVAL: Duration = Duration::from_millis(1000);

/// Superloop driver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuperloopConfig {
    /// Time slept at the end of each iteration
    pub interval: Duration,
}

impl SuperloopConfig {
    /// Config with a custom iteration interval
    pub const fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for SuperloopConfig {
    fn default() -> Self {
        Self::with_interval(LOOP_INTERVAL)
    }
}
