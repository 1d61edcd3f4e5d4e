use core::ops::{Add, Mul, Sub};

/// 3D float vector, used for raw accelerometer, gyroscope and magnetometer samples.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec3f {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3f {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    #[inline]
    pub fn dot(self, rhs: Vec3f) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3f {
    type Output = Vec3f;
    #[inline]
    fn add(self, rhs: Vec3f) -> Vec3f {
        Vec3f::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3f {
    type Output = Vec3f;
    #[inline]
    fn sub(self, rhs: Vec3f) -> Vec3f {
        Vec3f::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3f {
    type Output = Vec3f;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3f {
        Vec3f::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_unit_gravity() {
        assert_eq!(Vec3f::new(0.0, 0.0, 1.0).length(), 1.0);
        assert_eq!(Vec3f::new(3.0, 4.0, 0.0).length(), 5.0);
    }

    #[test]
    fn non_finite_components_are_detected() {
        assert!(Vec3f::zero().is_finite());
        assert!(!Vec3f::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Vec3f::new(0.0, f32::INFINITY, 0.0).is_finite());
    }
}
