/// Frame budget for roughly 60 Hz.
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 16;

/// Weight kept from the previous average on each sample.
const AVERAGE_DECAY: f32 = 0.9;
/// Weight given to the newest interval.
const AVERAGE_GAIN: f32 = 0.1;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous sample, in seconds.
    pub dt: f32,

    /// Clock timestamp taken at the sample, in milliseconds.
    pub now_ms: u32,

    /// Monotonic frame counter after this sample.
    pub frame_index: u64,

    /// Smoothed frames per second.
    pub fps: f32,
}

/// Frame pacing state and timing statistics.
///
/// Owned by the scheduler and mutated once per presented frame. Timestamps are
/// wrapping `u32` milliseconds; every difference goes through `wrapping_sub`.
///
/// The frame interval average is an exponential moving average with decay 0.9,
/// seeded with the target interval.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin_ms: u32,
    last_present_ms: u32,
    previous_sample_ms: u32,
    target_interval_ms: u32,
    average_interval_ms: f32,
    delta_time: f32,
    frame_count: u64,
}

impl FrameClock {
    /// Creates a clock whose baseline is `now_ms`.
    pub fn new(now_ms: u32, target_interval_ms: u32) -> Self {
        Self {
            origin_ms: now_ms,
            last_present_ms: now_ms,
            previous_sample_ms: now_ms,
            target_interval_ms,
            average_interval_ms: target_interval_ms as f32,
            delta_time: 0.0,
            frame_count: 0,
        }
    }

    /// Milliseconds since the last presented frame.
    #[inline]
    pub fn since_present(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.last_present_ms)
    }

    /// Whether the frame budget has been used up at `now_ms`.
    #[inline]
    pub fn is_due(&self, now_ms: u32) -> bool {
        self.since_present(now_ms) >= self.target_interval_ms
    }

    /// Records the timestamp of a present.
    #[inline]
    pub fn mark_presented(&mut self, now_ms: u32) {
        self.last_present_ms = now_ms;
    }

    /// Remaining budget of a frame that started at `started_ms`.
    ///
    /// Negative on overrun.
    pub fn remaining_ms(&self, started_ms: u32, now_ms: u32) -> i64 {
        i64::from(self.target_interval_ms) - i64::from(now_ms.wrapping_sub(started_ms))
    }

    /// Advances timing statistics and returns a new `FrameTime`.
    pub fn sample(&mut self, current_ms: u32) -> FrameTime {
        let interval = current_ms.wrapping_sub(self.previous_sample_ms) as f32;

        self.delta_time = interval / 1000.0;
        self.average_interval_ms =
            self.average_interval_ms * AVERAGE_DECAY + interval * AVERAGE_GAIN;
        self.previous_sample_ms = current_ms;
        self.frame_count += 1;

        FrameTime {
            dt: self.delta_time,
            now_ms: current_ms,
            frame_index: self.frame_count,
            fps: self.fps(),
        }
    }

    /// Snapshot of the last sample without advancing anything.
    pub fn snapshot(&self) -> FrameTime {
        FrameTime {
            dt: self.delta_time,
            now_ms: self.previous_sample_ms,
            frame_index: self.frame_count,
            fps: self.fps(),
        }
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Seconds between the last two samples.
    #[inline]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    #[inline]
    pub fn average_interval_ms(&self) -> f32 {
        self.average_interval_ms
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        1000.0 / self.average_interval_ms
    }

    #[inline]
    pub fn target_interval_ms(&self) -> u32 {
        self.target_interval_ms
    }

    /// Changes the frame budget. The running average is kept as is.
    pub fn set_target_interval_ms(&mut self, target_interval_ms: u32) {
        self.target_interval_ms = target_interval_ms;
    }

    /// Milliseconds since the clock was created.
    #[inline]
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.origin_ms)
    }

    /// Seconds since the clock was created.
    pub fn elapsed_secs(&self, now_ms: u32) -> f64 {
        f64::from(self.elapsed_ms(now_ms)) / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn average_starts_at_target() {
        let clock = FrameClock::new(0, 16);
        assert!(approx(clock.average_interval_ms(), 16.0));
        assert!(approx(clock.fps(), 62.5));
        assert_eq!(clock.frame_count(), 0);
    }

    #[test]
    fn average_weights_new_interval_by_a_tenth() {
        let mut clock = FrameClock::new(0, 16);
        let ft = clock.sample(32);

        assert!(approx(clock.average_interval_ms(), 17.6));
        assert!((ft.fps - 56.818).abs() < 0.01);
        assert!(approx(ft.dt, 0.032));
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn steady_intervals_keep_average_stable() {
        let mut clock = FrameClock::new(0, 16);
        for i in 1..=50u32 {
            clock.sample(i * 16);
        }
        assert!(approx(clock.average_interval_ms(), 16.0));
        assert_eq!(clock.frame_count(), 50);
    }

    #[test]
    fn due_only_after_full_budget() {
        let mut clock = FrameClock::new(100, 16);
        assert!(!clock.is_due(115));
        assert!(clock.is_due(116));

        clock.mark_presented(116);
        assert!(!clock.is_due(120));
    }

    #[test]
    fn due_across_counter_wrap() {
        let start = u32::MAX - 5;
        let clock = FrameClock::new(start, 16);
        assert!(!clock.is_due(start.wrapping_add(10)));
        assert!(clock.is_due(start.wrapping_add(16)));
    }

    #[test]
    fn remaining_goes_negative_on_overrun() {
        let clock = FrameClock::new(0, 16);
        assert_eq!(clock.remaining_ms(100, 104), 12);
        assert_eq!(clock.remaining_ms(100, 116), 0);
        assert_eq!(clock.remaining_ms(100, 130), -14);
    }

    #[test]
    fn elapsed_counts_from_origin() {
        let clock = FrameClock::new(1_000, 16);
        assert_eq!(clock.elapsed_ms(3_500), 2_500);
        assert!((clock.elapsed_secs(3_500) - 2.5).abs() < 1e-9);
    }
}
