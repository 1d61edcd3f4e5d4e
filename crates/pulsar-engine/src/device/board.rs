use crate::coords::Vec2i;
use crate::display::DisplayBuffer;
use crate::imu::InertialSample;
use crate::input::{ButtonId, TouchSample};
use crate::time::Clock;

use super::error::{ImuError, PresentError};

/// Physical display.
pub trait Panel {
    /// Resolution as `(width, height)` in pixels.
    fn size(&self) -> (u16, u16);

    /// Copies `buffer` to the screen with its top-left corner at `origin`.
    fn present(&mut self, buffer: &DisplayBuffer, origin: Vec2i) -> Result<(), PresentError>;
}

/// Raw button levels.
pub trait ButtonInput {
    /// `true` while the button is electrically closed. No debouncing expected.
    fn button_level(&mut self, id: ButtonId) -> bool;
}

/// Raw touch panel access.
pub trait TouchInput {
    /// Whether the panel is fitted and reporting.
    fn touch_enabled(&mut self) -> bool;

    /// Latest reading. Only called while [`TouchInput::touch_enabled`] is true.
    fn read_touch(&mut self) -> TouchSample;
}

/// Raw inertial sensor access.
pub trait ImuInput {
    /// One accelerometer (g), gyroscope (deg/s) and optional magnetometer (µT) reading.
    fn read_imu(&mut self) -> Result<InertialSample, ImuError>;
}

/// Everything the scheduler needs from the hardware.
///
/// Implemented automatically for any type that provides all collaborator traits.
pub trait Board: Clock + Panel + ButtonInput + TouchInput + ImuInput {}

impl<T> Board for T where T: Clock + Panel + ButtonInput + TouchInput + ImuInput {}
