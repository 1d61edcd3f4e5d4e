//! Pulsar engine crate.
//!
//! This crate owns the frame pump and the input state machines of a small
//! display device: buttons, touch panel and IMU attitude. Drawing primitives,
//! fonts and codecs live outside; they write into the active [`display::DisplayBuffer`].

pub mod device;
pub mod runtime;
pub mod input;
pub mod imu;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod display;
pub mod paint;

#[cfg(test)]
pub(crate) mod testing;
