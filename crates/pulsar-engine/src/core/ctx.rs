use crate::display::DisplayBuffer;
use crate::imu::{AttitudeEstimator, EulerAngles};
use crate::input::{ButtonId, ButtonState, Buttons, TouchTracker};
use crate::time::FrameTime;

/// Per-frame context passed to `core::App::on_frame`.
///
/// Input state reflects the poll taken at the last presented tick and stays
/// the same until the next one.
pub struct FrameCtx<'a> {
    pub buffer: &'a mut DisplayBuffer,
    pub buttons: &'a Buttons,
    pub touch: &'a TouchTracker,
    pub attitude: &'a AttitudeEstimator,
    pub time: FrameTime,
    /// Milliseconds since the scheduler started.
    pub elapsed_ms: u32,
}

impl<'a> FrameCtx<'a> {
    /// Drawing area as `(width, height)` in pixels.
    pub fn screen_size(&self) -> (u16, u16) {
        (self.buffer.width(), self.buffer.height())
    }

    #[inline]
    pub fn button(&self, id: ButtonId) -> &ButtonState {
        self.buttons.get(id)
    }

    #[inline]
    pub fn angles(&self) -> EulerAngles {
        self.attitude.angles()
    }

    /// Seconds since the scheduler started.
    pub fn elapsed_secs(&self) -> f64 {
        f64::from(self.elapsed_ms) / 1000.0
    }
}
