//! Superloop Driver
//!
//! The whole runtime behaviour of the firmware: after a startup line, every
//! iteration announces both modules, feeds the counter pair through
//! [`sum`](crate::system::arithmetic::sum) and sleeps for the configured
//! interval. There is no exit condition.
//!
//! # Iteration
//! ```text
//! module_one::announce()
//! module_two::announce()
//! sum(a, b)             // result discarded
//! a += 1; b += 1        // wrapping
//! sleep(interval)       // yields to the executor
//! ```
//!
//! Both counters start at zero and are incremented together, so `a == b`
//! holds at every iteration boundary.

use crate::config::SuperloopConfig;
use crate::system::arithmetic::sum;
use crate::system::module_one;
use crate::system::module_two;
use crate::system::sleep::Sleep;

/// Line emitted once before the first iteration
pub const STARTUP_MESSAGE: &str = "Hello from main!";

/// Counter pair owned by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub a: i32,
    pub b: i32,
}

impl Counters {
    /// Advances both counters by one, wrapping at `i32::MAX`
    fn advance(&mut self) {
        self.a = self.a.wrapping_add(1);
        self.b = self.b.wrapping_add(1);
    }
}

/// Cooperative superloop over a [`Sleep`] implementation
pub struct Superloop<S: Sleep> {
    sleeper: S,
    config: SuperloopConfig,
    counters: Counters,
}

impl<S: Sleep> Superloop<S> {
    /// Creates the driver with both counters at zero
    pub fn new(sleeper: S, config: SuperloopConfig) -> Self {
        Self {
            sleeper,
            config,
            counters: Counters::default(),
        }
    }

    /// Current counter pair
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Active configuration
    pub fn config(&self) -> &SuperloopConfig {
        &self.config
    }

    /// The sleep backend
    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Runs the work part of one iteration, without the trailing sleep
    pub fn step(&mut self) {
        module_one::announce();
        module_two::announce();

        let Counters { a, b } = self.counters;
        let _ = sum(a, b);
        crate::log_debug!("Iteration: a = {}, b = {}", a, b);

        self.counters.advance();
    }

    /// Runs one full iteration: [`step`](Self::step), then sleep
    pub async fn tick(&mut self) {
        self.step();
        self.sleeper.sleep(self.config.interval).await;
    }

    /// Emits the startup line and iterates forever
    pub async fn run(mut self) {
        crate::log_info!("{}", STARTUP_MESSAGE);
        loop {
            self.tick().await;
        }
    }
}

#[cfg(test)]
impl<S: Sleep> Superloop<S> {
    /// Driver starting from an arbitrary counter pair
    fn with_counters(sleeper: S, config: SuperloopConfig, counters: Counters) -> Self {
        Self {
            sleeper,
            config,
            counters,
        }
    }
}
