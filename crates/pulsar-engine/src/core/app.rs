use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once per loop iteration, before the scheduler ticks.
    ///
    /// Iterations that fall inside one frame budget draw into the same buffer.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;
}

impl<F> App for F
where
    F: FnMut(&mut FrameCtx<'_>) -> AppControl,
{
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        self(ctx)
    }
}
