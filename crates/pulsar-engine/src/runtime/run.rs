use anyhow::{anyhow, Result};

use crate::core::{App, AppControl};
use crate::device::Board;

use super::scheduler::Scheduler;

/// Entry point for the host loop.
///
/// Replaces the setup/loop split of microcontroller runtimes with one plain
/// loop: the app draws, then the scheduler ticks.
pub struct Runtime;

impl Runtime {
    /// Drives `app` until it asks to exit or the display fails.
    pub fn run<B, A>(scheduler: &mut Scheduler<B>, app: &mut A) -> Result<()>
    where
        B: Board,
        A: App + ?Sized,
    {
        log::debug!("runtime loop started");

        loop {
            let control = {
                let mut ctx = scheduler.frame_ctx();
                app.on_frame(&mut ctx)
            };

            if control == AppControl::Exit {
                log::info!(
                    "app requested exit after {} frames ({:.1} fps)",
                    scheduler.frame_count(),
                    scheduler.fps()
                );
                return Ok(());
            }

            if !scheduler.tick() {
                let err = match scheduler.fault() {
                    Some(fault) => anyhow::Error::new(fault),
                    None => anyhow!("scheduler stopped"),
                };
                return Err(err.context(format!(
                    "frame loop stopped at frame {}",
                    scheduler.frame_count()
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrameCtx;
    use crate::coords::Vec2i;
    use crate::device::PresentError;
    use crate::paint::palette;
    use crate::runtime::SchedulerConfig;
    use crate::testing::{BoardEvent, MockBoard};
    use std::rc::Rc;

    #[test]
    fn run_coalesces_iterations_into_frames() {
        let mut board = MockBoard::new(4, 4);
        // Only the app moves the clock, 4 ms per call.
        board.sleep_advances = false;
        let app_time = Rc::clone(&board.app_time);
        let mut s = Scheduler::new(board, SchedulerConfig::default());

        let mut calls = 0;
        let mut app = |ctx: &mut FrameCtx<'_>| {
            calls += 1;
            app_time.set(app_time.get() + 4);
            ctx.buffer.set_pixel(Vec2i::new(0, 0), palette::WHITE);
            if ctx.time.frame_index >= 3 { AppControl::Exit } else { AppControl::Continue }
        };

        Runtime::run(&mut s, &mut app).unwrap();

        // Four 4 ms iterations fill each 16 ms budget, plus the exiting call.
        assert_eq!(calls, 13);
        assert_eq!(s.frame_count(), 3);
        assert_eq!(s.board().presents(), 3);
        assert_eq!(s.board().count(BoardEvent::Sleep(16)), 3);
        assert!(s.board().frames.iter().all(|f| f[0] == 0xFFFF));
    }

    #[test]
    fn run_returns_ok_on_exit() {
        let mut s = Scheduler::new(MockBoard::new(4, 4), SchedulerConfig::default());
        s.board_mut().now = 16;

        let mut app = |ctx: &mut FrameCtx<'_>| {
            if ctx.time.frame_index >= 2 { AppControl::Exit } else { AppControl::Continue }
        };

        Runtime::run(&mut s, &mut app).unwrap();
        assert_eq!(s.frame_count(), 2);
    }

    #[test]
    fn run_reports_display_failure() {
        let mut s = Scheduler::new(MockBoard::new(4, 4), SchedulerConfig::default());
        s.board_mut().now = 16;
        s.board_mut().present_error = Some(PresentError::Transfer(3));

        let mut app = |_: &mut FrameCtx<'_>| AppControl::Continue;
        let err = Runtime::run(&mut s, &mut app).unwrap_err();

        assert_eq!(err.to_string(), "frame loop stopped at frame 0");
        assert_eq!(err.root_cause().to_string(), "display transfer failed (code 3)");
    }
}
