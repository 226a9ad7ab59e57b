pub mod superloop;
