use crate::coords::Vec3f;

/// One raw IMU reading.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct InertialSample {
    /// Acceleration in g.
    pub accel: Vec3f,
    /// Angular rate in degrees per second.
    pub gyro: Vec3f,
    /// Magnetic field in µT, when the part has a magnetometer.
    pub mag: Option<Vec3f>,
}

impl InertialSample {
    #[inline]
    pub const fn new(accel: Vec3f, gyro: Vec3f) -> Self {
        Self { accel, gyro, mag: None }
    }

    #[inline]
    pub const fn with_mag(mut self, mag: Vec3f) -> Self {
        self.mag = Some(mag);
        self
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.accel.is_finite() && self.gyro.is_finite() && self.mag.is_none_or(Vec3f::is_finite)
    }
}
