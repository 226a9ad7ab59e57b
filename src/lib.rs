#![cfg_attr(not(any(test, feature = "native-sim")), no_std)]

//! superloop-sample - firmware bring-up skeleton for the RP2350
//!
//! A single cooperative task announces two modules, adds a pair of counters
//! and sleeps for a fixed interval, forever. The arithmetic, math and string
//! helpers it ships with are covered by host and on-target test suites.

// Global logger + panic handler for every firmware image linking this crate
#[cfg(feature = "rp2350")]
use {defmt_rtt as _, panic_probe as _};

/// Logging macros routed to defmt or stdout
pub mod logging;

/// Compile-time configuration
pub mod config;

/// Helpers and the superloop driver
pub mod system;

/// Embassy task wrappers
#[cfg(feature = "rp2350")]
pub mod task;
