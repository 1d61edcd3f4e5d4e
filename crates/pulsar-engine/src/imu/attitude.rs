use crate::coords::Vec3f;
use crate::device::ImuInput;

use super::InertialSample;

/// Orientation in degrees.
///
/// Not wrapped: integration can carry an axis past ±180°.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct EulerAngles {
    /// Rotation about X.
    pub roll: f32,
    /// Rotation about Y.
    pub pitch: f32,
    /// Rotation about Z.
    pub yaw: f32,
}

impl EulerAngles {
    #[inline]
    pub const fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Angles implied by gravity alone.
    ///
    /// Yaw from the accelerometer is only meaningful while the device is tilted;
    /// lying flat it degenerates to `atan2(0, 0) == 0`.
    pub fn from_gravity(accel: Vec3f) -> Self {
        let pitch = (-accel.x).atan2((accel.y * accel.y + accel.z * accel.z).sqrt());
        let roll = accel.y.atan2(accel.z);
        let yaw = accel.x.atan2(accel.y);

        Self {
            roll: roll.to_degrees(),
            pitch: pitch.to_degrees(),
            yaw: yaw.to_degrees(),
        }
    }
}

/// Complementary filter coefficients.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FilterConfig {
    /// Weight of the integrated gyro angle; the accelerometer gets `1 - alpha`.
    pub alpha: f32,
    /// Multiplier applied to raw gyro rates.
    pub gyro_scale: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            alpha: 0.96,
            gyro_scale: 1.0,
        }
    }
}

#[inline]
fn blend(previous: f32, rate: f32, accel_angle: f32, dt: f32, cfg: &FilterConfig) -> f32 {
    let gyro_angle = previous + rate * cfg.gyro_scale * dt;
    cfg.alpha * gyro_angle + (1.0 - cfg.alpha) * accel_angle
}

/// Attitude estimate maintained across ticks.
///
/// Each update integrates the gyro rate on top of the previous angle and pulls
/// the result towards the accelerometer angle. Roll follows gyro X, pitch gyro
/// Y, yaw gyro Z.
#[derive(Debug, Clone, Default)]
pub struct AttitudeEstimator {
    angles: EulerAngles,
    last_sample: Option<InertialSample>,
    failed_reads: u32,
}

impl AttitudeEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn angles(&self) -> EulerAngles {
        self.angles
    }

    /// Seeds a known orientation.
    pub fn set_angles(&mut self, angles: EulerAngles) {
        self.angles = angles;
    }

    /// Back to zero, forgetting the last sample.
    pub fn reset(&mut self) {
        self.angles = EulerAngles::default();
        self.last_sample = None;
        self.failed_reads = 0;
    }

    /// Last successful raw reading.
    #[inline]
    pub fn last_sample(&self) -> Option<&InertialSample> {
        self.last_sample.as_ref()
    }

    /// Acceleration in g from the last successful reading.
    pub fn accel(&self) -> Vec3f {
        self.last_sample.map(|s| s.accel).unwrap_or_default()
    }

    /// Angular rate in deg/s from the last successful reading.
    pub fn gyro(&self) -> Vec3f {
        self.last_sample.map(|s| s.gyro).unwrap_or_default()
    }

    /// Magnetic field in µT from the last successful reading, if the part has one.
    pub fn mag(&self) -> Option<Vec3f> {
        self.last_sample.and_then(|s| s.mag)
    }

    /// Consecutive failed sensor reads.
    #[inline]
    pub fn failed_reads(&self) -> u32 {
        self.failed_reads
    }

    /// Fuses one sample over `dt` seconds.
    pub fn update(&mut self, sample: &InertialSample, dt: f32, cfg: &FilterConfig) -> EulerAngles {
        let accel = EulerAngles::from_gravity(sample.accel);
        let prev = self.angles;

        self.angles = EulerAngles {
            roll: blend(prev.roll, sample.gyro.x, accel.roll, dt, cfg),
            pitch: blend(prev.pitch, sample.gyro.y, accel.pitch, dt, cfg),
            yaw: blend(prev.yaw, sample.gyro.z, accel.yaw, dt, cfg),
        };
        self.last_sample = Some(*sample);
        self.angles
    }

    /// Reads the sensor once and fuses the reading.
    ///
    /// A failed or non-finite read leaves the angles untouched.
    pub fn update_from<I>(&mut self, imu: &mut I, dt: f32, cfg: &FilterConfig) -> EulerAngles
    where
        I: ImuInput + ?Sized,
    {
        match imu.read_imu() {
            Ok(sample) if sample.is_finite() => {
                if self.failed_reads > 0 {
                    log::debug!("imu recovered after {} failed reads", self.failed_reads);
                    self.failed_reads = 0;
                }
                self.update(&sample, dt, cfg)
            }
            Ok(_) => {
                self.failed_reads = self.failed_reads.saturating_add(1);
                log::debug!("imu returned non-finite sample; keeping last angles");
                self.angles
            }
            Err(err) => {
                self.failed_reads = self.failed_reads.saturating_add(1);
                if self.failed_reads == 1 {
                    log::debug!("{err}; keeping last angles");
                }
                self.angles
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::ImuError;
    use proptest::prelude::*;

    const FLAT: Vec3f = Vec3f::new(0.0, 0.0, 1.0);

    fn near(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() <= tol
    }

    // ── gravity angles ────────────────────────────────────────────────────

    #[test]
    fn gravity_flat_is_level() {
        let a = EulerAngles::from_gravity(FLAT);
        assert!(near(a.roll, 0.0, 1e-6));
        assert!(near(a.pitch, 0.0, 1e-6));
        assert!(near(a.yaw, 0.0, 1e-6));
    }

    #[test]
    fn gravity_tilted_right_pitches_up() {
        let a = EulerAngles::from_gravity(Vec3f::new(-1.0, 0.0, 0.0));
        assert!(near(a.pitch, 90.0, 1e-4));
    }

    #[test]
    fn gravity_upright_rolls_ninety() {
        let a = EulerAngles::from_gravity(Vec3f::new(0.0, 1.0, 0.0));
        assert!(near(a.roll, 90.0, 1e-4));
    }

    // ── filter ────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn flat_and_still_converges_to_level(
            roll in -720.0f32..720.0,
            pitch in -720.0f32..720.0,
            yaw in -720.0f32..720.0,
        ) {
            let mut est = AttitudeEstimator::new();
            est.set_angles(EulerAngles::new(roll, pitch, yaw));
            let still = InertialSample::new(FLAT, Vec3f::zero());

            for _ in 0..600 {
                est.update(&still, 0.016, &FilterConfig::default());
            }

            let a = est.angles();
            prop_assert!(near(a.roll, 0.0, 0.01), "roll {}", a.roll);
            prop_assert!(near(a.pitch, 0.0, 0.01), "pitch {}", a.pitch);
            prop_assert!(near(a.yaw, 0.0, 0.01), "yaw {}", a.yaw);
        }
    }

    #[test]
    fn alpha_one_is_pure_gyro_integration() {
        let mut est = AttitudeEstimator::new();
        est.set_angles(EulerAngles::new(0.0, 5.0, 0.0));
        let cfg = FilterConfig { alpha: 1.0, gyro_scale: 1.0 };
        let turning = InertialSample::new(Vec3f::zero(), Vec3f::new(0.0, 10.0, 0.0));

        // 100 steps of 10 ms: one second at 10 deg/s.
        for _ in 0..100 {
            est.update(&turning, 0.01, &cfg);
        }

        assert!(near(est.angles().pitch, 15.0, 1e-3));
        assert!(near(est.angles().roll, 0.0, 1e-6));
    }

    #[test]
    fn single_step_matches_formula() {
        let mut est = AttitudeEstimator::new();
        let cfg = FilterConfig { alpha: 0.96, gyro_scale: 2.0 };
        let sample = InertialSample::new(FLAT, Vec3f::new(10.0, 0.0, 0.0));

        let a = est.update(&sample, 0.5, &cfg);

        // gyro_angle = 0 + 10 * 2 * 0.5 = 10; accel roll = 0.
        assert!(near(a.roll, 9.6, 1e-5));
    }

    #[test]
    fn angles_are_not_wrapped() {
        let mut est = AttitudeEstimator::new();
        let cfg = FilterConfig { alpha: 1.0, gyro_scale: 1.0 };
        let spin = InertialSample::new(FLAT, Vec3f::new(0.0, 0.0, 100.0));

        for _ in 0..5 {
            est.update(&spin, 1.0, &cfg);
        }

        assert!(near(est.angles().yaw, 500.0, 1e-3));
    }

    // ── sensor failures ───────────────────────────────────────────────────

    struct Sensor(Result<InertialSample, ImuError>);

    impl ImuInput for Sensor {
        fn read_imu(&mut self) -> Result<InertialSample, ImuError> {
            self.0
        }
    }

    #[test]
    fn failed_read_keeps_last_angles() {
        let mut est = AttitudeEstimator::new();
        est.set_angles(EulerAngles::new(1.0, 2.0, 3.0));

        let a = est.update_from(&mut Sensor(Err(ImuError::Unavailable)), 0.016, &FilterConfig::default());

        assert_eq!(a, EulerAngles::new(1.0, 2.0, 3.0));
        assert_eq!(est.failed_reads(), 1);
        assert!(est.last_sample().is_none());
    }

    #[test]
    fn non_finite_read_is_discarded() {
        let mut est = AttitudeEstimator::new();
        let bad = InertialSample::new(Vec3f::new(f32::NAN, 0.0, 1.0), Vec3f::zero());

        est.update_from(&mut Sensor(Ok(bad)), 0.016, &FilterConfig::default());

        assert_eq!(est.angles(), EulerAngles::default());
        assert_eq!(est.failed_reads(), 1);
    }

    #[test]
    fn successful_read_records_raw_vectors() {
        let mut est = AttitudeEstimator::new();
        let s = InertialSample::new(FLAT, Vec3f::new(1.0, 2.0, 3.0)).with_mag(Vec3f::new(30.0, 0.0, -12.0));

        est.update_from(&mut Sensor(Err(ImuError::Stale)), 0.016, &FilterConfig::default());
        est.update_from(&mut Sensor(Ok(s)), 0.016, &FilterConfig::default());

        assert_eq!(est.failed_reads(), 0);
        assert_eq!(est.accel(), FLAT);
        assert_eq!(est.gyro(), Vec3f::new(1.0, 2.0, 3.0));
        assert_eq!(est.mag(), Some(Vec3f::new(30.0, 0.0, -12.0)));
    }
}
