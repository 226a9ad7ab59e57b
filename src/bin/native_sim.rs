//! Native simulator
//!
//! Runs the superloop on the host with stdout logging and real-time sleeps,
//! the same way the firmware does on the board. Stop it with Ctrl-C.

use embassy_futures::block_on;
use superloop_sample::config::SuperloopConfig;
use superloop_sample::system::sleep::StdSleep;
use superloop_sample::system::superloop::Superloop;

fn main() {
    block_on(Superloop::new(StdSleep, SuperloopConfig::default()).run());
}
