//! DvdView: maps a simulation snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SimSnapshot;
use crate::fb::{CellStyle, FrameBuffer};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Paints the corner-hit counter and the colored block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DvdView {
    show_hud: bool,
}

impl Default for DvdView {
    fn default() -> Self {
        Self { show_hud: true }
    }
}

impl DvdView {
    pub fn without_hud() -> Self {
        Self { show_hud: false }
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, snap: &SimSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        // HUD first so the block paints over it.
        if self.show_hud {
            let hud = CellStyle {
                bold: true,
                ..CellStyle::default()
            };
            fb.put_str(0, 0, &format!("Corner hits: {}", snap.corner_hits), hud);
        }

        let size = snap.shape.size();
        let style = CellStyle::block(snap.color);
        fb.fill_rect(snap.left, snap.top, size.width, size.height, ' ', style);

        let (dx, dy) = snap.shape.label_offset();
        let label_x = snap.left + i32::from(dx);
        let label_y = snap.top + i32::from(dy);
        for (i, line) in snap.shape.lines().iter().enumerate() {
            let y = label_y + i as i32;
            if let (Ok(x), Ok(y)) = (u16::try_from(label_x), u16::try_from(y)) {
                fb.put_str(x, y, line, style);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SimSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}
