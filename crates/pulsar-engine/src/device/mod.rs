//! Hardware collaborator contracts.
//!
//! This module is responsible for:
//! - the traits a board implements (panel, buttons, touch, IMU; time lives in `time`)
//! - the error types those collaborators report

mod board;
mod error;

pub use board::{Board, ButtonInput, ImuInput, Panel, TouchInput};
pub use error::{ImuError, PresentError};
