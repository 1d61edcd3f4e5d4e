use std::time::{Duration, Instant};

/// Monotonic millisecond time source with a blocking sleep.
///
/// Timestamps wrap at `u32::MAX` like a hardware millisecond counter; callers
/// compare them with `wrapping_sub` only.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin.
    fn now_ms(&self) -> u32;

    /// Blocks the calling thread for `ms` milliseconds.
    fn sleep_ms(&mut self, ms: u32);
}

/// `Clock` backed by `std::time::Instant` and `std::thread::sleep`.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u32 {
        // Truncation is the wrap-around.
        self.origin.elapsed().as_millis() as u32
    }

    fn sleep_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
