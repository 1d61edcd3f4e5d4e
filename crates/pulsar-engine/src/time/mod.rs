//! Time subsystem.
//!
//! Provides frame pacing and timing statistics without coupling to hardware.
//! Intended usage:
//! - one `FrameClock` per scheduler
//! - call `sample()` once per presented frame to obtain `FrameTime`
//! - the `Clock` trait is the only way the engine reads time or sleeps

mod clock;
mod frame_clock;

pub use clock::{Clock, SystemClock};
pub use frame_clock::{FrameClock, FrameTime, DEFAULT_FRAME_INTERVAL_MS};
