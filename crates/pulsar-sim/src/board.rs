//! Host stand-in for the device hardware.
//!
//! Time comes from the system clock; inputs are pure functions of the elapsed
//! time so runs are repeatable.

use std::f32::consts::TAU;

use pulsar_engine::coords::{Vec2i, Vec3f};
use pulsar_engine::device::{ButtonInput, ImuError, ImuInput, Panel, PresentError, TouchInput};
use pulsar_engine::display::DisplayBuffer;
use pulsar_engine::imu::InertialSample;
use pulsar_engine::input::{ButtonId, TouchSample};
use pulsar_engine::time::{Clock, SystemClock};

use crate::config::ScriptConfig;

/// Input generators driven by elapsed milliseconds.
#[derive(Debug, Clone)]
pub struct Script {
    config: ScriptConfig,
    width: u16,
    height: u16,
}

impl Script {
    pub fn new(config: ScriptConfig, width: u16, height: u16) -> Self {
        Self { config, width, height }
    }

    /// A toggles every period, B every two periods, C stays released.
    pub fn button(&self, id: ButtonId, t_ms: u32) -> bool {
        let period = self.config.button_period_ms.max(1);
        match id {
            ButtonId::A => (t_ms / period) % 2 == 1,
            ButtonId::B => (t_ms / period.saturating_mul(2)) % 2 == 1,
            ButtonId::C => false,
        }
    }

    /// A finger tracing a circle, touching for the first 40% of each lap.
    pub fn touch(&self, t_ms: u32) -> TouchSample {
        let period = self.config.touch_period_ms;
        let phase = (t_ms % period) as f32 / period as f32;

        let cx = f32::from(self.width) / 2.0;
        let cy = f32::from(self.height) / 2.0;
        let r = cx.min(cy) * 0.6;

        let x = (cx + r * (phase * TAU).cos()).round() as i32;
        let y = (cy + r * (phase * TAU).sin()).round() as i32;
        TouchSample::new(x, y, phase < 0.4)
    }

    /// Rocking about X: roll follows `A * sin(2πt/P)`.
    pub fn imu(&self, t_ms: u32) -> InertialSample {
        let period = self.config.tilt_period_ms as f32;
        let w = TAU / period;
        let t = t_ms as f32;

        let roll = self.config.tilt_amplitude_deg.to_radians() * (w * t).sin();
        // d(roll)/dt in deg/s.
        let roll_rate = self.config.tilt_amplitude_deg * w * (w * t).cos() * 1000.0;

        InertialSample::new(Vec3f::new(0.0, roll.sin(), roll.cos()), Vec3f::new(roll_rate, 0.0, 0.0))
            .with_mag(Vec3f::new(25.0, 0.0, -40.0))
    }
}

/// Simulated board: system clock, in-memory panel, scripted inputs.
pub struct SimBoard {
    clock: SystemClock,
    script: Script,
    width: u16,
    height: u16,
    frames: u64,
    last_checksum: u32,
    imu_reads: u32,
}

impl SimBoard {
    pub fn new(width: u16, height: u16, script: ScriptConfig) -> Self {
        Self {
            clock: SystemClock::new(),
            script: Script::new(script, width, height),
            width,
            height,
            frames: 0,
            last_checksum: 0,
            imu_reads: 0,
        }
    }

    /// Frames handed to the panel so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Additive checksum of the last presented frame.
    pub fn last_checksum(&self) -> u32 {
        self.last_checksum
    }
}

impl Clock for SimBoard {
    fn now_ms(&self) -> u32 {
        self.clock.now_ms()
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.clock.sleep_ms(ms);
    }
}

impl Panel for SimBoard {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn present(&mut self, buffer: &DisplayBuffer, origin: Vec2i) -> Result<(), PresentError> {
        if (buffer.width(), buffer.height()) != (self.width, self.height) {
            return Err(PresentError::SizeMismatch {
                expected: (self.width, self.height),
                actual: (buffer.width(), buffer.height()),
            });
        }

        self.frames += 1;
        self.last_checksum = buffer
            .pixels()
            .iter()
            .fold(0u32, |acc, &px| acc.wrapping_add(u32::from(px)));
        log::trace!(
            "present #{} at ({}, {}) checksum {:08x}",
            self.frames,
            origin.x,
            origin.y,
            self.last_checksum
        );
        Ok(())
    }
}

impl ButtonInput for SimBoard {
    fn button_level(&mut self, id: ButtonId) -> bool {
        self.script.button(id, self.clock.now_ms())
    }
}

impl TouchInput for SimBoard {
    fn touch_enabled(&mut self) -> bool {
        self.script.config.touch_enabled
    }

    fn read_touch(&mut self) -> TouchSample {
        self.script.touch(self.clock.now_ms())
    }
}

impl ImuInput for SimBoard {
    fn read_imu(&mut self) -> Result<InertialSample, ImuError> {
        self.imu_reads = self.imu_reads.wrapping_add(1);
        let every = self.script.config.imu_dropout_every;
        if every > 0 && self.imu_reads % every == 0 {
            return Err(ImuError::Stale);
        }
        Ok(self.script.imu(self.clock.now_ms()))
    }
}
