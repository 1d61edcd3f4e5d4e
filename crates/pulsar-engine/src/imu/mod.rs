//! Inertial measurement and attitude estimation.
//!
//! Sensor axes (device lying flat, screen up):
//! - Z: perpendicular to the screen, positive through the back
//! - Y: positive towards the bottom edge
//! - X: positive towards the left edge
//!
//! Gravity reads about 1 g: `(0, 0, 1)` flat, `(0, 1, 0)` upright with the
//! cable down, `(-1, 0, 0)` tilted right.

mod attitude;
mod sample;

pub use attitude::{AttitudeEstimator, EulerAngles, FilterConfig};
pub use sample::InertialSample;
