//! Frame loop.
//!
//! - `Scheduler` owns all per-device state and implements the tick
//! - `SchedulerConfig` carries every tunable and is applied in one step
//! - `Runtime` is the plain host loop driving an `App`

mod config;
mod run;
mod scheduler;

pub use config::SchedulerConfig;
pub use run::Runtime;
pub use scheduler::Scheduler;
