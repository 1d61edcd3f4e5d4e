use core::ops::{Add, Sub};

/// 2D integer vector in physical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Squared Euclidean length; avoids the float round trip for hit tests.
    #[inline]
    pub fn length_squared(self) -> i64 {
        let x = i64::from(self.x);
        let y = i64::from(self.y);
        x * x + y * y
    }
}

impl Add for Vec2i {
    type Output = Vec2i;
    #[inline]
    fn add(self, rhs: Vec2i) -> Vec2i {
        Vec2i::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2i {
    type Output = Vec2i;
    #[inline]
    fn sub(self, rhs: Vec2i) -> Vec2i {
        Vec2i::new(self.x - rhs.x, self.y - rhs.y)
    }
}
