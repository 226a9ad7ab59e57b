//! String suite on the board

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
    use defmt::{assert_eq, assert_ne, info};
    use superloop_sample::system::strings::{string_compare, string_length};

    #[init]
    fn init() {
        info!("Starting String tests...");
    }

    #[test]
    fn string_length_of_words() {
        info!("Length of 'hello' = {}", string_length("hello"));
        info!("Length of 'world' = {}", string_length("world"));
        info!("Length of '' = {}", string_length(""));
        assert_eq!(string_length("hello"), 5);
        assert_eq!(string_length("world"), 5);
        assert_eq!(string_length(""), 0);
    }

    #[test]
    fn string_compare_equal() {
        info!("Compare 'test' with 'test' = {}", string_compare("test", "test"));
        assert_eq!(string_compare("test", "test"), 0);
    }

    #[test]
    fn string_compare_different() {
        info!("Compare 'abc' with 'def' = {}", string_compare("abc", "def"));
        assert_ne!(string_compare("abc", "def"), 0);
    }

    #[test]
    fn string_empty() {
        info!("Compare empty with non-empty = {}", string_compare("", "test"));
        assert_ne!(string_compare("", "test"), 0);
    }
}
