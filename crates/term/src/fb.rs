//! Framebuffer and style types for terminal rendering.

use crate::types::{PaletteColor, TextTone};

/// Cell color, resolved to an escape sequence by the renderer.
///
/// Palette entries stay symbolic so the terminal's own theme decides the
/// actual shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ink {
    /// The terminal's default foreground or background.
    #[default]
    Default,
    Palette(PaletteColor),
    Tone(TextTone),
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Ink,
    pub bg: Ink,
    pub bold: bool,
}

impl CellStyle {
    /// Block fill and label colors for a palette entry.
    pub fn block(color: PaletteColor) -> Self {
        Self {
            fg: Ink::Tone(color.text_tone()),
            bg: Ink::Palette(color),
            bold: false,
        }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
///
/// Writes outside the buffer are dropped, so callers can paint shapes that
/// hang off the edge after a resize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (cx, ch) in (x..self.width).zip(s.chars()) {
            self.set(cx, y, style.into_cell(ch));
        }
    }

    /// Fill a rectangle whose origin may lie off-screen (negative or past the edge).
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u16, h: u16, ch: char, style: CellStyle) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + i32::from(w)).min(i32::from(self.width));
        let y1 = (y + i32::from(h)).min(i32::from(self.height));
        for cy in y0..y1 {
            for cx in x0..x1 {
                self.set(cx as u16, cy as u16, style.into_cell(ch));
            }
        }
    }

    /// One row of text as a `String` (for tests and debugging).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}
