//! Host simulator: runs the frame loop against a scripted board.
//!
//! Usage: `pulsar-sim [config.toml]`

mod app;
mod board;
mod config;

use std::path::Path;

use anyhow::{Context, Result};

use pulsar_engine::logging::{init_logging, LoggingConfig};
use pulsar_engine::runtime::{Runtime, Scheduler};

use crate::app::LevelApp;
use crate::board::SimBoard;
use crate::config::SimConfig;

fn main() -> Result<()> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => SimConfig::load(Path::new(&path))?,
        None => SimConfig::default(),
    };

    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        ..LoggingConfig::default()
    });

    log::info!(
        "simulating {}x{} panel for {} frames",
        config.display.width,
        config.display.height,
        config.run_frames
    );

    let board = SimBoard::new(config.display.width, config.display.height, config.script.clone());
    let mut scheduler = Scheduler::new(board, config.scheduler());
    let mut app = LevelApp::new(config.run_frames);

    Runtime::run(&mut scheduler, &mut app).context("simulation aborted")?;

    let board = scheduler.board();
    log::info!(
        "done: {} frames presented, last checksum {:08x}, {} button presses, {:.1} s",
        board.frames(),
        board.last_checksum(),
        app.presses(),
        scheduler.elapsed_secs()
    );

    Ok(())
}
