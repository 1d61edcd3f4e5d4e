use crate::imu::FilterConfig;
use crate::input::DEFAULT_DEBOUNCE_MS;
use crate::paint::{palette, Color};
use crate::time::DEFAULT_FRAME_INTERVAL_MS;

/// Scheduler configuration.
///
/// Applied as a whole through `Scheduler::configure`, so the loop never runs
/// with a half-updated set of values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SchedulerConfig {
    /// Frame budget in milliseconds. 16 gives roughly 60 Hz.
    pub target_interval_ms: u32,

    /// Attitude filter coefficients used by the per-tick IMU poll.
    pub filter: FilterConfig,

    /// Fill color for each freshly armed buffer.
    pub background: Color,

    /// Button debounce window in milliseconds.
    pub debounce_ms: u32,
}

impl SchedulerConfig {
    /// Frame budget for a target rate; rates of 0 are treated as 1 Hz.
    pub fn interval_for_hz(hz: u32) -> u32 {
        1000 / hz.max(1)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            target_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            filter: FilterConfig::default(),
            background: palette::BLACK,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sixty_hz_device() {
        let cfg = SchedulerConfig::default();
        assert_eq!(cfg.target_interval_ms, 16);
        assert_eq!(cfg.filter.alpha, 0.96);
        assert_eq!(cfg.filter.gyro_scale, 1.0);
        assert_eq!(cfg.background, palette::BLACK);
        assert_eq!(cfg.debounce_ms, 10);
    }

    #[test]
    fn interval_for_hz() {
        assert_eq!(SchedulerConfig::interval_for_hz(60), 16);
        assert_eq!(SchedulerConfig::interval_for_hz(30), 33);
        assert_eq!(SchedulerConfig::interval_for_hz(0), 1000);
    }
}
