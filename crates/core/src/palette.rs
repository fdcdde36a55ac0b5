//! Corner-hit color selection.

use crate::rng::SimpleRng;
use crate::types::PaletteColor;

/// Draw a palette color different from `current`.
///
/// Redraws until the color changes, so two consecutive corner hits are always
/// visibly distinct.
pub fn next_color(current: PaletteColor, rng: &mut SimpleRng) -> PaletteColor {
    loop {
        let color = rng.next_color();
        if color != current {
            return color;
        }
    }
}
