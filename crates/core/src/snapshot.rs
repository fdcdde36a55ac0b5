use crate::sprite::SpriteShape;
use crate::types::PaletteColor;

/// Everything a view needs to paint one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimSnapshot {
    /// Left column of the block (rounded origin x).
    pub left: i32,
    /// Top row of the block (rounded origin y).
    pub top: i32,
    pub shape: SpriteShape,
    pub color: PaletteColor,
    pub corner_hits: u64,
}
