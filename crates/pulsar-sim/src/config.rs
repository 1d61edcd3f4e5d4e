//! Simulator configuration.
//!
//! Loaded from an optional TOML file; every field has a default so a partial
//! file only overrides what it names.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use pulsar_engine::imu::FilterConfig;
use pulsar_engine::paint::Color;
use pulsar_engine::runtime::SchedulerConfig;

/// Top-level simulator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Stop after this many presented frames (0 = run forever).
    pub run_frames: u64,

    /// Log filter in `env_logger` syntax; `RUST_LOG` is used when unset.
    pub log_filter: Option<String>,

    /// Panel settings
    pub display: DisplayConfig,

    /// Frame pacing and filter settings
    pub timing: TimingConfig,

    /// Scripted input generators
    pub script: ScriptConfig,
}

/// Panel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u16,
    pub height: u16,
    /// Background as `[r, g, b]`.
    pub background: [u8; 3],
}

/// Timing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Frame budget in milliseconds.
    pub frame_interval_ms: u32,
    pub debounce_ms: u32,
    pub alpha: f32,
    pub gyro_scale: f32,
}

/// Input script configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    /// Button A toggles every `button_period_ms`; B at twice that period.
    pub button_period_ms: u32,

    pub touch_enabled: bool,
    /// One full circle of the simulated finger, in milliseconds.
    pub touch_period_ms: u32,

    /// Peak roll of the simulated rocking motion, in degrees.
    pub tilt_amplitude_deg: f32,
    pub tilt_period_ms: u32,

    /// Every n-th IMU read fails (0 = never).
    pub imu_dropout_every: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            run_frames: 600,
            log_filter: None,
            display: DisplayConfig::default(),
            timing: TimingConfig::default(),
            script: ScriptConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            background: [0, 0, 0],
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        let engine = SchedulerConfig::default();
        Self {
            frame_interval_ms: engine.target_interval_ms,
            debounce_ms: engine.debounce_ms,
            alpha: engine.filter.alpha,
            gyro_scale: engine.filter.gyro_scale,
        }
    }
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            button_period_ms: 1_000,
            touch_enabled: true,
            touch_period_ms: 2_000,
            tilt_amplitude_deg: 20.0,
            tilt_period_ms: 4_000,
            imu_dropout_every: 0,
        }
    }
}

impl SimConfig {
    /// Parses a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parses configuration text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: SimConfig = toml::from_str(contents).context("malformed TOML")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.display.width > 0 && self.display.height > 0,
            "display size must be non-zero, got {}x{}",
            self.display.width,
            self.display.height
        );
        anyhow::ensure!(self.timing.frame_interval_ms > 0, "frame_interval_ms must be positive");
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.timing.alpha),
            "alpha must be within [0, 1], got {}",
            self.timing.alpha
        );
        anyhow::ensure!(self.script.touch_period_ms > 0, "touch_period_ms must be positive");
        anyhow::ensure!(self.script.tilt_period_ms > 0, "tilt_period_ms must be positive");
        Ok(())
    }

    /// Engine configuration derived from this file.
    pub fn scheduler(&self) -> SchedulerConfig {
        let [r, g, b] = self.display.background;
        SchedulerConfig {
            target_interval_ms: self.timing.frame_interval_ms,
            filter: FilterConfig {
                alpha: self.timing.alpha,
                gyro_scale: self.timing.gyro_scale,
            },
            background: Color::new(r, g, b),
            debounce_ms: self.timing.debounce_ms,
        }
    }
}
