//! Superloop task
//!
//! Runs the superloop driver on the Embassy executor, sleeping on the
//! hardware timer between iterations.

use crate::config::SuperloopConfig;
use crate::system::sleep::EmbassySleep;
use crate::system::superloop::Superloop;

/// Superloop task, never returns
#[embassy_executor::task]
pub async fn superloop() {
    Superloop::new(EmbassySleep, SuperloopConfig::default())
        .run()
        .await;
}
