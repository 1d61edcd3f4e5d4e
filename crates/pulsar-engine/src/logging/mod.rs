//! Logging utilities.
//!
//! This module centralizes logger initialization. Engine code only talks to
//! the `log` facade; the host picks the backend through [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
