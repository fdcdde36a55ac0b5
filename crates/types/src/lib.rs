//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, rendering, input handling).
//!
//! # Timing and motion constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 30 | Nominal tick rate |
//! | `DEFAULT_SPEED` | 35.0 | Sprite speed in cells per second |
//! | `LAUNCH_ANGLE` | 0.82 | Launch angle in radians |
//! | `IMPACT_EPSILON` | 1e-3 | Tolerance for corner detection, in ticks and cells |
//!
//! # Sprite geometry
//!
//! The sprite is a solid block holding [`LOGO`] with [`LOGO_PAD`] cells of
//! padding, a one-cell frame and [`EXTRA_WIDTH`] additional columns.
//!
//! # Examples
//!
//! ```
//! use tui_dvd_types::{PaletteColor, CellSize};
//!
//! let color = PaletteColor::from_ansi(33).unwrap();
//! assert_eq!(color, PaletteColor::Yellow);
//! assert_eq!(color.background_ansi(), 43);
//!
//! let size = CellSize::new(120, 30);
//! assert_eq!(size.width, 120);
//! ```

/// Nominal tick rate (frames per second).
pub const FPS: u32 = 30;

/// Sprite speed in cells per second.
pub const DEFAULT_SPEED: f64 = 35.0;

/// Launch angle in radians, measured from the positive x axis (y grows downwards).
pub const LAUNCH_ANGLE: f64 = 0.82;

/// Tolerance used by the collision solver for simultaneous impacts and corner proximity.
pub const IMPACT_EPSILON: f64 = 1e-3;

/// Display size assumed when the terminal size cannot be queried.
pub const DEFAULT_DISPLAY: CellSize = CellSize::new(120, 30);

/// Label drawn inside the bouncing block.
pub const LOGO: [&str; 3] = ["    D V D", "    --o--", "    video"];

/// Padding between the block frame and the label, in cells.
pub const LOGO_PAD: u16 = 1;

/// Extra columns added to the block width so it reads wider than tall.
pub const EXTRA_WIDTH: u16 = 4;

/// Nominal frame period in seconds.
pub fn frame_period_secs(fps: u32) -> f64 {
    1.0 / f64::from(fps.max(1))
}

/// A size measured in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

impl CellSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colors the block can take.
///
/// Each variant corresponds to an ANSI foreground code. The block is painted
/// with the matching background code and a label color picked for contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
}

/// Label color that stays readable on a given block color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTone {
    /// ANSI 30.
    Black,
    /// ANSI 97.
    BrightWhite,
}

impl TextTone {
    pub fn ansi(&self) -> u8 {
        match self {
            TextTone::Black => 30,
            TextTone::BrightWhite => 97,
        }
    }
}

impl PaletteColor {
    /// Every palette entry, in ANSI code order.
    pub const ALL: [PaletteColor; 12] = [
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Yellow,
        PaletteColor::Blue,
        PaletteColor::Magenta,
        PaletteColor::Cyan,
        PaletteColor::BrightRed,
        PaletteColor::BrightGreen,
        PaletteColor::BrightYellow,
        PaletteColor::BrightBlue,
        PaletteColor::BrightMagenta,
        PaletteColor::BrightCyan,
    ];

    /// ANSI foreground code.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dvd_types::PaletteColor;
    ///
    /// assert_eq!(PaletteColor::Red.ansi(), 31);
    /// assert_eq!(PaletteColor::BrightCyan.ansi(), 96);
    /// ```
    pub fn ansi(&self) -> u8 {
        match self {
            PaletteColor::Red => 31,
            PaletteColor::Green => 32,
            PaletteColor::Yellow => 33,
            PaletteColor::Blue => 34,
            PaletteColor::Magenta => 35,
            PaletteColor::Cyan => 36,
            PaletteColor::BrightRed => 91,
            PaletteColor::BrightGreen => 92,
            PaletteColor::BrightYellow => 93,
            PaletteColor::BrightBlue => 94,
            PaletteColor::BrightMagenta => 95,
            PaletteColor::BrightCyan => 96,
        }
    }

    /// ANSI background code (foreground + 10).
    pub fn background_ansi(&self) -> u8 {
        self.ansi() + 10
    }

    /// Parse from an ANSI foreground code.
    pub fn from_ansi(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.ansi() == code)
    }

    /// Label tone for this block color.
    ///
    /// Light backgrounds (yellow, cyan and every bright color) get black text.
    pub fn text_tone(&self) -> TextTone {
        match self {
            PaletteColor::Yellow
            | PaletteColor::Cyan
            | PaletteColor::BrightRed
            | PaletteColor::BrightGreen
            | PaletteColor::BrightYellow
            | PaletteColor::BrightBlue
            | PaletteColor::BrightMagenta
            | PaletteColor::BrightCyan => TextTone::Black,
            _ => TextTone::BrightWhite,
        }
    }

    /// Lowercase name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteColor::Red => "red",
            PaletteColor::Green => "green",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Blue => "blue",
            PaletteColor::Magenta => "magenta",
            PaletteColor::Cyan => "cyan",
            PaletteColor::BrightRed => "bright-red",
            PaletteColor::BrightGreen => "bright-green",
            PaletteColor::BrightYellow => "bright-yellow",
            PaletteColor::BrightBlue => "bright-blue",
            PaletteColor::BrightMagenta => "bright-magenta",
            PaletteColor::BrightCyan => "bright-cyan",
        }
    }
}
