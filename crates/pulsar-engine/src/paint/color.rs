/// Packed 16-bit panel pixel: 5 bits red, 6 bits green, 5 bits blue.
pub type Rgb565 = u16;

/// Straight 8-bit RGB color.
///
/// The panel stores RGB565, so two colors that differ only in the low bits of
/// a channel pack to the same pixel. [`Color::from_rgb565`] replicates the high
/// bits into the low ones so that white and black survive a round trip.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpacks an RGB565 pixel.
    #[inline]
    pub const fn from_rgb565(px: Rgb565) -> Self {
        let r = ((px >> 8) & 0xF8) as u8;
        let g = ((px >> 3) & 0xFC) as u8;
        let b = ((px << 3) & 0xF8) as u8;

        Self {
            r: r | (r >> 5),
            g: g | (g >> 6),
            b: b | (b >> 5),
        }
    }

    /// Creates a color from a `0xRRGGBB` literal. The top byte is ignored.
    #[inline]
    pub const fn from_rgb888(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        }
    }

    /// Packs into the panel's native pixel format.
    #[inline]
    pub const fn to_rgb565(self) -> Rgb565 {
        ((self.r as u16 & 0xF8) << 8) | ((self.g as u16 & 0xFC) << 3) | (self.b as u16 >> 3)
    }

    /// Builds a color from hue in degrees (any value, wrapped into
    /// `[0, 360)`), saturation and value (both clamped to `[0, 1]`).
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h.rem_euclid(360.0);
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match (h / 60.0) as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |f: f32| ((f + m) * 255.0).round() as u8;
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`.
    pub fn to_hsv(self) -> (f32, f32, f32) {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = max - min;

        let h = if diff == 0.0 {
            0.0
        } else if max == r {
            (60.0 * ((g - b) / diff)).rem_euclid(360.0)
        } else if max == g {
            60.0 * ((b - r) / diff) + 120.0
        } else {
            60.0 * ((r - g) / diff) + 240.0
        };
        let s = if max == 0.0 { 0.0 } else { diff / max };

        (h, s, max)
    }

    /// Linear blend towards `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extremes_survive_rgb565_round_trip() {
        let white = Color::new(255, 255, 255);
        let black = Color::new(0, 0, 0);

        assert_eq!(white.to_rgb565(), 0xFFFF);
        assert_eq!(black.to_rgb565(), 0x0000);
        assert_eq!(Color::from_rgb565(0xFFFF), white);
        assert_eq!(Color::from_rgb565(0x0000), black);
    }

    #[test]
    fn primaries_pack_into_their_fields() {
        assert_eq!(Color::new(255, 0, 0).to_rgb565(), 0xF800);
        assert_eq!(Color::new(0, 255, 0).to_rgb565(), 0x07E0);
        assert_eq!(Color::new(0, 0, 255).to_rgb565(), 0x001F);
    }

    #[test]
    fn low_bits_are_dropped_when_packing() {
        // 0x07 in red and 0x03 in green sit below the 5/6-bit fields.
        assert_eq!(Color::new(0x07, 0x03, 0x07).to_rgb565(), 0);
    }

    #[test]
    fn rgb888_literal() {
        assert_eq!(Color::from_rgb888(0x00FF_8040), Color::new(0xFF, 0x80, 0x40));
    }

    #[test]
    fn lerp_clamps_and_blends() {
        let a = Color::new(0, 0, 0);
        let b = Color::new(200, 100, 50);
        assert_eq!(a.lerp(b, 0.5), Color::new(100, 50, 25));
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn hsv_primaries_and_greys() {
        assert_eq!(Color::from_hsv(0.0, 1.0, 1.0), Color::new(255, 0, 0));
        assert_eq!(Color::from_hsv(120.0, 1.0, 1.0), Color::new(0, 255, 0));
        assert_eq!(Color::from_hsv(240.0, 1.0, 1.0), Color::new(0, 0, 255));
        assert_eq!(Color::from_hsv(77.0, 0.0, 0.5), Color::new(128, 128, 128));
    }

    #[test]
    fn hsv_hue_wraps_and_inputs_clamp() {
        assert_eq!(Color::from_hsv(-120.0, 1.0, 1.0), Color::from_hsv(240.0, 1.0, 1.0));
        assert_eq!(Color::from_hsv(420.0, 2.0, 3.0), Color::new(255, 255, 0));
    }

    #[test]
    fn to_hsv_reads_back_hue() {
        let (h, s, v) = Color::new(255, 128, 0).to_hsv();
        assert!((h - 30.1).abs() < 0.1, "hue {h}");
        assert_eq!(s, 1.0);
        assert_eq!(v, 1.0);

        let (h, s, v) = Color::new(0, 0, 0).to_hsv();
        assert_eq!((h, s, v), (0.0, 0.0, 0.0));

        let (h, _, _) = Color::new(255, 0, 128).to_hsv();
        assert!((h - 329.9).abs() < 0.1, "hue {h}");
    }
}
