//! TUI DVD (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_dvd::{core, input, term, types}` and
//! hosts the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_dvd_core as core;
pub use tui_dvd_input as input;
pub use tui_dvd_term as term;
pub use tui_dvd_types as types;
