//! Color model shared between the scheduler and drawing collaborators.
//!
//! Scope:
//! - 8-bit RGB color with RGB565 packing (the panel's native format)
//! - a palette of named constants
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod palette;

pub use color::{Color, Rgb565};
