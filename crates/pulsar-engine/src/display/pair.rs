use std::mem;

use crate::paint::Color;

use super::DisplayBuffer;

/// Double-buffered pair of display buffers.
///
/// Invariant: exactly one buffer is active for drawing. [`BufferPair::rearm`]
/// retires the active buffer (it becomes [`BufferPair::presented`]) and clears
/// the other one for the next frame.
#[derive(Debug, Clone)]
pub struct BufferPair {
    active: DisplayBuffer,
    presented: DisplayBuffer,
}

impl BufferPair {
    pub fn new(width: u16, height: u16, background: Color) -> Self {
        Self {
            active: DisplayBuffer::new(width, height, background),
            presented: DisplayBuffer::new(width, height, background),
        }
    }

    #[inline]
    pub fn active(&self) -> &DisplayBuffer {
        &self.active
    }

    #[inline]
    pub fn active_mut(&mut self) -> &mut DisplayBuffer {
        &mut self.active
    }

    /// The buffer most recently handed to the panel.
    #[inline]
    pub fn presented(&self) -> &DisplayBuffer {
        &self.presented
    }

    /// Swaps roles and clears the new active buffer with `background`.
    pub fn rearm(&mut self, background: Color) {
        mem::swap(&mut self.active, &mut self.presented);
        self.active.clear(background);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2i;
    use crate::paint::palette;

    #[test]
    fn rearm_retires_drawn_frame() {
        let mut pair = BufferPair::new(2, 2, palette::BLACK);
        pair.active_mut().set_pixel(Vec2i::new(0, 0), palette::WHITE);

        pair.rearm(palette::BLUE);

        assert_eq!(pair.presented().pixel(Vec2i::new(0, 0)), Some(palette::WHITE));
        assert!(pair.active().pixels().iter().all(|&p| p == palette::BLUE.to_rgb565()));
    }
}
