//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the motion and collision rules of the bouncing block.
//! It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed and elapsed times produce identical runs
//! - **Testable**: Every wall and corner case is reachable from unit tests
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`arena`]: valid range of sprite origins, re-derived on every resize
//! - [`solver`]: continuous-time wall collision for one tick, corner detection
//! - [`sim`]: the run state threaded through each tick (position, color, hit count)
//! - [`clock`]: elapsed-time measurement with stall protection
//! - [`palette`]: corner-hit color changes
//! - [`sprite`]: block geometry derived from the label text
//! - [`rng`]: seeded LCG for start position and colors
//!
//! # Example
//!
//! ```
//! use tui_dvd_core::{SimParams, Simulation, SpriteShape};
//! use tui_dvd_core::types::CellSize;
//!
//! let mut sim = Simulation::new(CellSize::new(120, 30), SpriteShape::dvd(), SimParams::default());
//!
//! for _ in 0..300 {
//!     sim.on_resize(120, 30);
//!     let report = sim.advance(1.0 / 30.0);
//!     assert!(sim.arena().contains(report.position));
//! }
//! ```
//!
//! # Timing
//!
//! The runner ticks at a fixed rate (30 FPS by default) but passes the
//! *measured* elapsed time to [`Simulation::advance`](sim::Simulation::advance),
//! so motion stays correct when frames arrive late.

pub mod arena;
pub mod clock;
pub mod palette;
pub mod rng;
pub mod sim;
pub mod snapshot;
pub mod solver;
pub mod sprite;

pub use tui_dvd_types as types;

// Re-export commonly used types for convenience
pub use arena::{sanitize_display, Arena, ArenaTracker, Playfield};
pub use clock::{sanitize_elapsed, FrameClock};
pub use palette::next_color;
pub use rng::SimpleRng;
pub use sim::{SimParams, Simulation, SpriteState, TickReport};
pub use snapshot::SimSnapshot;
pub use solver::{Impact, StepOutcome};
pub use sprite::SpriteShape;
