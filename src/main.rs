//! Firmware entry point
//!
//! Initializes the RP2350 and spawns the superloop task.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use superloop_sample::task::superloop::superloop;

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

/// Firmware entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let _p = embassy_rp::init(Config::default());

    spawner.spawn(superloop()).unwrap();
}
