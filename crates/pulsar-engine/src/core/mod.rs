//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the frame loop and
//! application code: the `App` callback and the per-frame context it receives.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
