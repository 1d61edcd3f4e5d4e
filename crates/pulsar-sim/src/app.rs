//! Demo application: a bubble level with a touch cursor.

use pulsar_engine::coords::Vec2i;
use pulsar_engine::core::{App, AppControl, FrameCtx};
use pulsar_engine::input::ButtonId;
use pulsar_engine::paint::{palette, Color};

/// Pixels of bubble travel per degree of tilt.
const PX_PER_DEGREE: f32 = 2.0;
const BUBBLE: i32 = 12;
const CURSOR: i32 = 6;

pub struct LevelApp {
    run_frames: u64,
    seen_frame: u64,
    bubble_color: Color,
    presses: u32,
}

impl LevelApp {
    pub fn new(run_frames: u64) -> Self {
        Self {
            run_frames,
            seen_frame: 0,
            bubble_color: palette::LIME,
            presses: 0,
        }
    }

    /// Button A presses seen so far.
    pub fn presses(&self) -> u32 {
        self.presses
    }

    /// Bubble centre for the current tilt, clamped to the screen.
    pub fn bubble_pos(ctx: &FrameCtx<'_>) -> Vec2i {
        let (w, h) = ctx.screen_size();
        let angles = ctx.angles();

        let x = f32::from(w) / 2.0 + angles.pitch * PX_PER_DEGREE;
        let y = f32::from(h) / 2.0 + angles.roll * PX_PER_DEGREE;

        // Panels smaller than the bubble pin it to the top-left corner.
        let max_x = (i32::from(w) - BUBBLE).max(0);
        let max_y = (i32::from(h) - BUBBLE).max(0);

        Vec2i::new((x.round() as i32).clamp(0, max_x), (y.round() as i32).clamp(0, max_y))
    }
}

impl App for LevelApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let frame = ctx.time.frame_index;
        // Input only changes on presented ticks; count each edge once.
        let fresh = frame != self.seen_frame;
        self.seen_frame = frame;

        if fresh && ctx.button(ButtonId::A).was_pressed() {
            self.presses += 1;
            self.bubble_color = if self.presses % 2 == 0 { palette::LIME } else { palette::ORANGE };
            log::debug!("button A pressed at frame {frame}");
        }

        let (w, h) = ctx.screen_size();
        let (w, h) = (i32::from(w), i32::from(h));

        // Crosshair.
        ctx.buffer.fill_rect(Vec2i::new(0, h / 2), w, 1, palette::GRAY);
        ctx.buffer.fill_rect(Vec2i::new(w / 2, 0), 1, h, palette::GRAY);

        let bubble = Self::bubble_pos(ctx);
        ctx.buffer.fill_rect(bubble, BUBBLE, BUBBLE, self.bubble_color);

        if ctx.touch.pressed() {
            let p = ctx.touch.pos();
            ctx.buffer.fill_rect(
                Vec2i::new(p.x - CURSOR / 2, p.y - CURSOR / 2),
                CURSOR,
                CURSOR,
                palette::WHITE,
            );
        }

        if fresh && frame % 60 == 0 {
            let a = ctx.angles();
            log::info!(
                "frame {frame}: {:.1} fps, roll {:.1} pitch {:.1} yaw {:.1}",
                ctx.time.fps,
                a.roll,
                a.pitch,
                a.yaw
            );
        }

        if self.run_frames > 0 && frame >= self.run_frames {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }
}
