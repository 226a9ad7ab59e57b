//! Second print module

/// Line emitted by [`announce`]
pub const MESSAGE: &str = "Hello from module two!";

/// Emits this module's diagnostic line
pub fn announce() {
    crate::log_info!("{}", MESSAGE);
}
