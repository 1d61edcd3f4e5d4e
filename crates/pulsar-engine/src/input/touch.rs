use crate::coords::Vec2i;
use crate::device::TouchInput;

use super::types::TouchSample;

/// Edge-triggered view over a level-triggered touch panel.
///
/// Holds the sample of the current tick and the one before it. Edges are the
/// XOR of the two pressed flags, so `down()` and `up()` are never both true.
///
/// While the panel reports itself disabled the current sample is frozen: the
/// position stays put and the pressed flag is sticky.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TouchTracker {
    current: TouchSample,
    previous: TouchSample,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances one tick, reading the panel only if it is enabled.
    pub fn update<T>(&mut self, panel: &mut T)
    where
        T: TouchInput + ?Sized,
    {
        let sample = if panel.touch_enabled() {
            Some(panel.read_touch())
        } else {
            None
        };
        self.advance(sample);
    }

    /// Advances one tick with an already-read sample; `None` keeps the
    /// current one.
    pub fn advance(&mut self, sample: Option<TouchSample>) {
        self.previous = self.current;
        if let Some(sample) = sample {
            self.current = sample;
        }
    }

    /// Contact is held this tick.
    #[inline]
    pub fn pressed(&self) -> bool {
        self.current.pressed
    }

    /// Contact started this tick.
    #[inline]
    pub fn down(&self) -> bool {
        self.current.pressed && !self.previous.pressed
    }

    /// Contact ended this tick.
    #[inline]
    pub fn up(&self) -> bool {
        !self.current.pressed && self.previous.pressed
    }

    #[inline]
    pub fn pos(&self) -> Vec2i {
        self.current.pos()
    }

    /// Position change since the previous tick.
    #[inline]
    pub fn delta(&self) -> Vec2i {
        self.current.pos() - self.previous.pos()
    }

    #[inline]
    pub fn current(&self) -> TouchSample {
        self.current
    }

    #[inline]
    pub fn previous(&self) -> TouchSample {
        self.previous
    }
}
