//! Sprite geometry: the label text and the block size derived from it.

use crate::types::{CellSize, EXTRA_WIDTH, LOGO, LOGO_PAD};

/// Text label and padding of the bouncing block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteShape {
    lines: &'static [&'static str],
    pad: u16,
    extra_width: u16,
}

impl SpriteShape {
    pub const fn new(lines: &'static [&'static str], pad: u16, extra_width: u16) -> Self {
        Self {
            lines,
            pad,
            extra_width,
        }
    }

    /// The stock "DVD video" block.
    pub const fn dvd() -> Self {
        Self::new(&LOGO, LOGO_PAD, EXTRA_WIDTH)
    }

    pub fn lines(&self) -> &'static [&'static str] {
        self.lines
    }

    pub fn pad(&self) -> u16 {
        self.pad
    }

    /// Label extent in characters (not bytes) and lines.
    pub fn text_size(&self) -> CellSize {
        let width = self
            .lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        CellSize::new(
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(self.lines.len()).unwrap_or(u16::MAX),
        )
    }

    /// Full block size: label + padding + one-cell frame, plus the extra width.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dvd_core::SpriteShape;
    /// use tui_dvd_core::types::CellSize;
    ///
    /// assert_eq!(SpriteShape::dvd().size(), CellSize::new(17, 7));
    /// ```
    pub fn size(&self) -> CellSize {
        let text = self.text_size();
        let frame = self.pad.saturating_mul(2).saturating_add(2);
        CellSize::new(
            text.width
                .saturating_add(frame)
                .saturating_add(self.extra_width),
            text.height.saturating_add(frame),
        )
    }

    /// Offset of the first label character from the block's top-left cell.
    pub fn label_offset(&self) -> (u16, u16) {
        let inset = self.pad.saturating_add(1);
        (inset, inset)
    }
}

impl Default for SpriteShape {
    fn default() -> Self {
        Self::dvd()
    }
}
