//! First print module
//!
//! Stands in for an independently built firmware component.

/// Line emitted by [`announce`]
pub const MESSAGE: &str = "Hello from module one!";

/// Emits this module's diagnostic line
pub fn announce() {
    crate::log_info!("{}", MESSAGE);
}
