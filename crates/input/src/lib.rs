//! Terminal input module.
//!
//! The animation has no controls: any key press, or SIGINT, ends the run.
//! [`map`] classifies `crossterm` events and [`exit`] turns a blocking
//! terminal reader plus the OS interrupt into one awaitable exit signal.

pub mod exit;
pub mod map;

pub use exit::{ExitReason, ExitWatcher};
pub use map::{exit_reason, is_interrupt_key};
