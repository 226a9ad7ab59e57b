//! Logging abstraction
//!
//! One set of macros for every build of the crate:
//! - Firmware (`rp2350`): defmt over RTT
//! - Host tests and the native simulator: `println!`
//! - Plain host library builds: no-op
//!
//! Host builds also hand every line to [`capture`]. In this crate's unit
//! tests it records the lines per thread so tests can check what was logged
//! and in which order; everywhere else it drops them.
//!
//! Format strings must stick to `{}` placeholders so they are valid for both
//! defmt and `core::fmt`.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), any(test, feature = "native-sim")))]
        println!("[INFO] {}", format!($($arg)*));

        #[cfg(not(feature = "rp2350"))]
        $crate::logging::capture(format_args!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "rp2350")]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "rp2350"), any(test, feature = "native-sim")))]
        println!("[DEBUG] {}", format!($($arg)*));

        #[cfg(not(feature = "rp2350"))]
        $crate::logging::capture(format_args!($($arg)*));
    }};
}

/// Host log sink behind the macros
#[cfg(not(feature = "rp2350"))]
#[doc(hidden)]
pub fn capture(args: core::fmt::Arguments<'_>) {
    #[cfg(test)]
    captured::push(args);

    #[cfg(not(test))]
    let _ = args;
}
