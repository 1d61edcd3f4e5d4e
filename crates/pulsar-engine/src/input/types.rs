use std::fmt;

use crate::coords::Vec2i;

/// Front-panel button identifier.
///
/// The device carries three buttons; boards with fewer report the missing ones
/// as permanently released.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ButtonId {
    A,
    B,
    C,
}

impl ButtonId {
    /// All buttons in poll order.
    pub const ALL: [ButtonId; 3] = [ButtonId::A, ButtonId::B, ButtonId::C];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            ButtonId::A => 0,
            ButtonId::B => 1,
            ButtonId::C => 2,
        }
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One raw touch panel reading.
///
/// Coordinates are physical pixels. When `pressed` is false the coordinates
/// hold the last contact point reported by the panel.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TouchSample {
    pub x: i32,
    pub y: i32,
    pub pressed: bool,
}

impl TouchSample {
    #[inline]
    pub const fn new(x: i32, y: i32, pressed: bool) -> Self {
        Self { x, y, pressed }
    }

    /// A contact at `(x, y)`.
    #[inline]
    pub const fn pressed_at(x: i32, y: i32) -> Self {
        Self::new(x, y, true)
    }

    /// No contact; the last point was `(x, y)`.
    #[inline]
    pub const fn released_at(x: i32, y: i32) -> Self {
        Self::new(x, y, false)
    }

    #[inline]
    pub fn pos(self) -> Vec2i {
        Vec2i::new(self.x, self.y)
    }
}
