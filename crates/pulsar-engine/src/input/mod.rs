//! Input subsystem.
//!
//! Turns raw device levels into per-tick state:
//! - `Buttons`: debounced level, edge and duration tracking per button
//! - `TouchTracker`: pressed/edge state derived from consecutive touch samples
//!
//! Raw access goes through the collaborator traits in [`crate::device`].
//! Both trackers are refreshed by the scheduler exactly once per presented tick.

mod button;
mod touch;
mod types;

pub use button::{ButtonState, Buttons, DEFAULT_DEBOUNCE_MS};
pub use touch::TouchTracker;
pub use types::{ButtonId, TouchSample};
