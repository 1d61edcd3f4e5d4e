use crate::coords::Vec2i;
use crate::core::FrameCtx;
use crate::device::{Board, PresentError};
use crate::display::{BufferPair, DisplayBuffer};
use crate::imu::{AttitudeEstimator, EulerAngles};
use crate::input::{ButtonId, ButtonState, Buttons, TouchTracker};
use crate::paint::Color;
use crate::time::{FrameClock, FrameTime};

use super::config::SchedulerConfig;

/// Fixed-rate update/draw pump.
///
/// One scheduler exists per device. It owns the board, the frame buffers, the
/// timing statistics and every input tracker; drawing code borrows the active
/// buffer between ticks and reads input through the accessors.
///
/// A tick either coalesces (frame budget not used up yet: nothing happens) or
/// runs the full sequence: present, timing update, pacing sleep, input poll
/// (buttons, IMU, touch), buffer re-arm.
pub struct Scheduler<B: Board> {
    board: B,
    config: SchedulerConfig,
    clock: FrameClock,
    buffers: BufferPair,
    buttons: Buttons,
    touch: TouchTracker,
    attitude: AttitudeEstimator,
    fault: Option<PresentError>,
}

impl<B: Board> Scheduler<B> {
    /// Builds the scheduler around `board`, sizing buffers to its panel.
    pub fn new(board: B, config: SchedulerConfig) -> Self {
        let (width, height) = board.size();
        let now = board.now_ms();

        log::info!(
            "scheduler ready: {width}x{height} panel, {} ms frame budget",
            config.target_interval_ms
        );

        Self {
            clock: FrameClock::new(now, config.target_interval_ms),
            buffers: BufferPair::new(width, height, config.background),
            buttons: Buttons::new(config.debounce_ms),
            touch: TouchTracker::new(),
            attitude: AttitudeEstimator::new(),
            fault: None,
            board,
            config,
        }
    }

    /// Replaces the whole configuration.
    ///
    /// The frame budget and debounce window apply from the next tick; the
    /// background from the next buffer re-arm.
    pub fn configure(&mut self, config: SchedulerConfig) {
        self.clock.set_target_interval_ms(config.target_interval_ms);
        self.buttons.set_debounce_ms(config.debounce_ms);
        self.config = config;
        log::debug!("scheduler reconfigured: {:?}", self.config);
    }

    #[inline]
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Takes effect at the next buffer re-arm.
    pub fn set_background(&mut self, color: Color) {
        self.config.background = color;
    }

    /// Runs one iteration of the frame loop.
    ///
    /// Returns `false` once the display has failed; the failure is latched and
    /// available through [`Scheduler::fault`].
    pub fn tick(&mut self) -> bool {
        if self.fault.is_some() {
            return false;
        }

        let now = self.board.now_ms();
        if !self.clock.is_due(now) {
            return true;
        }

        if let Err(err) = self.board.present(self.buffers.active(), Vec2i::zero()) {
            log::error!("display present failed: {err}");
            self.fault = Some(err);
            return false;
        }

        let ft = self.clock.sample(self.board.now_ms());
        self.clock.mark_presented(now);

        let remaining = self.clock.remaining_ms(now, self.board.now_ms());
        if remaining > 0 {
            self.board.sleep_ms(remaining as u32);
        } else {
            log::trace!("frame {} overran budget by {} ms", ft.frame_index, -remaining);
        }

        self.poll_inputs(ft.dt);
        self.buffers.rearm(self.config.background);
        true
    }

    fn poll_inputs(&mut self, dt: f32) {
        let now = self.board.now_ms();
        self.buttons.poll(&mut self.board, now);
        self.attitude.update_from(&mut self.board, dt, &self.config.filter);
        self.touch.update(&mut self.board);
    }

    /// Borrows everything drawing code needs for this frame.
    pub fn frame_ctx(&mut self) -> FrameCtx<'_> {
        let elapsed_ms = self.clock.elapsed_ms(self.board.now_ms());
        FrameCtx {
            buffer: self.buffers.active_mut(),
            buttons: &self.buttons,
            touch: &self.touch,
            attitude: &self.attitude,
            time: self.clock.snapshot(),
            elapsed_ms,
        }
    }

    // ── timing ────────────────────────────────────────────────────────────

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Seconds between the last two presented frames.
    #[inline]
    pub fn delta_time(&self) -> f32 {
        self.clock.delta_time()
    }

    /// Smoothed frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    #[inline]
    pub fn frame_time(&self) -> FrameTime {
        self.clock.snapshot()
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.clock.elapsed_ms(self.board.now_ms())
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.clock.elapsed_secs(self.board.now_ms())
    }

    // ── input ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn buttons(&self) -> &Buttons {
        &self.buttons
    }

    #[inline]
    pub fn button(&self, id: ButtonId) -> &ButtonState {
        self.buttons.get(id)
    }

    #[inline]
    pub fn touch(&self) -> &TouchTracker {
        &self.touch
    }

    #[inline]
    pub fn attitude(&self) -> &AttitudeEstimator {
        &self.attitude
    }

    /// Mutable access, e.g. to seed or reset the orientation.
    #[inline]
    pub fn attitude_mut(&mut self) -> &mut AttitudeEstimator {
        &mut self.attitude
    }

    #[inline]
    pub fn angles(&self) -> EulerAngles {
        self.attitude.angles()
    }

    // ── display ───────────────────────────────────────────────────────────

    /// The buffer drawing calls go to until the next presented tick.
    #[inline]
    pub fn buffer(&self) -> &DisplayBuffer {
        self.buffers.active()
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut DisplayBuffer {
        self.buffers.active_mut()
    }

    /// The frame most recently handed to the panel.
    #[inline]
    pub fn presented_buffer(&self) -> &DisplayBuffer {
        self.buffers.presented()
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.buffers.active().width()
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.buffers.active().height()
    }

    // ── board ─────────────────────────────────────────────────────────────

    /// The display failure that stopped the loop, if any.
    #[inline]
    pub fn fault(&self) -> Option<PresentError> {
        self.fault
    }

    #[inline]
    pub fn board(&self) -> &B {
        &self.board
    }

    #[inline]
    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    /// Gives the board back, dropping all frame state.
    pub fn into_board(self) -> B {
        self.board
    }
}
