use crate::coords::Vec2i;
use crate::paint::{Color, Rgb565};

/// Fixed-size RGB565 pixel buffer matching the panel resolution.
///
/// Rows are stored top to bottom, `width` pixels each. Writes outside the
/// buffer are clipped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    width: u16,
    height: u16,
    pixels: Vec<Rgb565>,
}

impl DisplayBuffer {
    /// Creates a buffer filled with `fill`.
    pub fn new(width: u16, height: u16, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill.to_rgb565(); usize::from(width) * usize::from(height)],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Raw pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    /// One row of pixels, or `None` past the bottom edge.
    pub fn row(&self, y: u16) -> Option<&[Rgb565]> {
        if y >= self.height {
            return None;
        }
        let start = usize::from(y) * usize::from(self.width);
        Some(&self.pixels[start..start + usize::from(self.width)])
    }

    /// Fills the whole buffer.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_rgb565());
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some(y as usize * usize::from(self.width) + x as usize)
    }

    /// Writes one pixel. Returns `false` if the point was clipped.
    pub fn set_pixel(&mut self, at: Vec2i, color: Color) -> bool {
        match self.index(at.x, at.y) {
            Some(i) => {
                self.pixels[i] = color.to_rgb565();
                true
            }
            None => false,
        }
    }

    /// Reads one pixel back (after RGB565 quantization).
    pub fn pixel(&self, at: Vec2i) -> Option<Color> {
        self.index(at.x, at.y).map(|i| Color::from_rgb565(self.pixels[i]))
    }

    /// Fills an axis-aligned rectangle, clipped to the buffer.
    pub fn fill_rect(&mut self, origin: Vec2i, width: i32, height: i32, color: Color) {
        let x0 = origin.x.max(0);
        let y0 = origin.y.max(0);
        let x1 = origin.x.saturating_add(width).min(i32::from(self.width));
        let y1 = origin.y.saturating_add(height).min(i32::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let px = color.to_rgb565();
        let stride = usize::from(self.width);
        for y in y0..y1 {
            let start = y as usize * stride;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(px);
        }
    }
}
