//! Arena module - the range of valid top-left positions for the sprite
//!
//! The arena is derived from the display size minus the sprite size and is
//! refreshed every tick. A shrinking display pulls the sprite back inside.

use glam::DVec2;

use crate::types::CellSize;

/// Inclusive range `[0, width] × [0, height]` of valid sprite origins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// `display − sprite` on each axis, floored at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dvd_core::Arena;
    /// use tui_dvd_core::types::CellSize;
    ///
    /// let arena = Arena::from_sizes(CellSize::new(120, 30), CellSize::new(17, 7));
    /// assert_eq!(arena, Arena::new(103.0, 23.0));
    ///
    /// let tiny = Arena::from_sizes(CellSize::new(10, 5), CellSize::new(17, 7));
    /// assert_eq!(tiny, Arena::new(0.0, 0.0));
    /// ```
    pub fn from_sizes(display: CellSize, sprite: CellSize) -> Self {
        Self {
            width: f64::from(display.width.saturating_sub(sprite.width)),
            height: f64::from(display.height.saturating_sub(sprite.height)),
        }
    }

    /// Far corner of the arena.
    pub fn max(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Pull a position down to the far bounds, axis by axis.
    pub fn clamp_down(&self, p: DVec2) -> DVec2 {
        DVec2::new(p.x.min(self.width), p.y.min(self.height))
    }
}

/// Everything the solver needs to know about the screen for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub display: CellSize,
    pub sprite: CellSize,
    pub arena: Arena,
}

impl Playfield {
    pub fn new(display: CellSize, sprite: CellSize) -> Self {
        Self {
            display,
            sprite,
            arena: Arena::from_sizes(display, sprite),
        }
    }

    /// Largest on-screen origin column/row, without flooring.
    ///
    /// Negative when the display is smaller than the sprite.
    pub fn screen_max(&self) -> (i64, i64) {
        (
            i64::from(self.display.width) - i64::from(self.sprite.width),
            i64::from(self.display.height) - i64::from(self.sprite.height),
        )
    }
}

/// Replace zero dimensions so the arena math always sees a real display.
pub fn sanitize_display(columns: u16, rows: u16) -> CellSize {
    CellSize::new(columns.max(1), rows.max(1))
}

/// Keeps the playfield in sync with the display.
#[derive(Debug, Clone)]
pub struct ArenaTracker {
    field: Playfield,
}

impl ArenaTracker {
    pub fn new(display: CellSize, sprite: CellSize) -> Self {
        Self {
            field: Playfield::new(display, sprite),
        }
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    pub fn arena(&self) -> Arena {
        self.field.arena
    }

    /// Recompute the arena for `display` and clamp `position` into it.
    ///
    /// Returns `true` when the display size changed.
    pub fn refresh(&mut self, display: CellSize, position: &mut DVec2) -> bool {
        let changed = display != self.field.display;
        if changed {
            self.field = Playfield::new(display, self.field.sprite);
        }
        *position = self.field.arena.clamp_down(*position);
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPRITE: CellSize = CellSize::new(17, 7);

    #[test]
    fn arena_is_display_minus_sprite() {
        let arena = Arena::from_sizes(CellSize::new(80, 24), SPRITE);
        assert_eq!(arena.width, 63.0);
        assert_eq!(arena.height, 17.0);
    }

    #[test]
    fn arena_never_negative() {
        let arena = Arena::from_sizes(CellSize::new(3, 2), SPRITE);
        assert_eq!(arena, Arena::new(0.0, 0.0));
        assert_eq!(Arena::new(-5.0, -1.0), Arena::new(0.0, 0.0));
    }

    #[test]
    fn refresh_clamps_after_shrink() {
        let mut tracker = ArenaTracker::new(CellSize::new(120, 30), SPRITE);
        let mut pos = DVec2::new(103.0, 10.0);

        let changed = tracker.refresh(CellSize::new(100, 30), &mut pos);
        assert!(changed);
        assert_eq!(tracker.arena().width, 83.0);
        assert_eq!(pos, DVec2::new(83.0, 10.0));
    }

    #[test]
    fn refresh_clamps_axes_independently() {
        let mut tracker = ArenaTracker::new(CellSize::new(120, 30), SPRITE);
        let mut pos = DVec2::new(50.0, 23.0);

        tracker.refresh(CellSize::new(120, 20), &mut pos);
        assert_eq!(pos, DVec2::new(50.0, 13.0));
    }

    #[test]
    fn refresh_leaves_position_alone_on_growth() {
        let mut tracker = ArenaTracker::new(CellSize::new(80, 24), SPRITE);
        let mut pos = DVec2::new(63.0, 17.0);

        tracker.refresh(CellSize::new(200, 60), &mut pos);
        assert_eq!(pos, DVec2::new(63.0, 17.0));
    }

    #[test]
    fn refresh_same_size_reports_unchanged() {
        let mut tracker = ArenaTracker::new(CellSize::new(80, 24), SPRITE);
        let mut pos = DVec2::new(1.0, 1.0);
        assert!(!tracker.refresh(CellSize::new(80, 24), &mut pos));
    }

    #[test]
    fn degenerate_display_pins_to_origin() {
        let mut tracker = ArenaTracker::new(CellSize::new(80, 24), SPRITE);
        let mut pos = DVec2::new(40.0, 12.0);

        tracker.refresh(sanitize_display(0, 0), &mut pos);
        assert_eq!(pos, DVec2::ZERO);
        assert_eq!(tracker.field().display, CellSize::new(1, 1));
        assert_eq!(tracker.field().screen_max(), (-16, -6));
    }
}
