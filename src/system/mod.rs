//! Core system components for the superloop firmware
pub mod arithmetic;
pub mod math;
pub mod module_one;
pub mod module_two;
pub mod sleep;
pub mod strings;
pub mod superloop;
