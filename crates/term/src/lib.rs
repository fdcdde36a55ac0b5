//! Terminal rendering module.
//!
//! A small, frame-oriented rendering layer: the view paints a simulation
//! snapshot into a plain framebuffer and the renderer flushes only the cells
//! that changed since the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep terminal escape handling in one place (`renderer`)
//! - Let views be tested without a terminal

pub mod dvd_view;
pub mod fb;
pub mod renderer;

pub use tui_dvd_core as core;
pub use tui_dvd_types as types;

pub use dvd_view::{DvdView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Ink};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
