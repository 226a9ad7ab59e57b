//! Math suite on the board

#![no_std]
#![no_main]

use embassy_rp::block::ImageDef;
use superloop_sample as _; // global logger + panic handler

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

#[defmt_test::tests]
mod tests {
    use defmt::{assert_eq, info};
    use superloop_sample::system::math::{divide, multiply};

    #[init]
    fn init() {
        info!("Starting Math tests...");
    }

    #[test]
    fn multiply_positive() {
        info!("Multiply 3*4 = {}", multiply(3, 4));
        info!("Multiply 5*6 = {}", multiply(5, 6));
        assert_eq!(multiply(3, 4), 12);
        assert_eq!(multiply(5, 6), 30);
    }

    #[test]
    fn multiply_negative() {
        info!("Multiply -2*3 = {}", multiply(-2, 3));
        info!("Multiply -4*-5 = {}", multiply(-4, -5));
        assert_eq!(multiply(-2, 3), -6);
        assert_eq!(multiply(-4, -5), 20);
    }

    #[test]
    fn divide_positive() {
        info!("Divide 10/2 = {}", divide(10, 2));
        info!("Divide 15/3 = {}", divide(15, 3));
        assert_eq!(divide(10, 2), 5);
        assert_eq!(divide(15, 3), 5);
    }

    #[test]
    fn divide_by_zero() {
        info!("Divide 10/0 = {}", divide(10, 0));
        assert_eq!(divide(10, 0), 0);
    }
}
