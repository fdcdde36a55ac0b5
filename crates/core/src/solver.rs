//! Collision solver - continuous wall collisions within a single tick
//!
//! The solver advances the sprite origin by one tick and reflects it off the
//! arena walls. Impacts are located in fractional-tick time so a bounce in the
//! middle of a frame lands exactly where it would with an infinitely small step.
//!
//! # Resolution order
//!
//! 1. Fractional time-to-wall `t` is computed per axis against the wall the
//!    axis is heading for.
//! 2. If both `t` lie in `[0, 1]` and agree within [`IMPACT_EPSILON`], the tick
//!    is a corner hit: both axes travel to the impact, both velocities negate,
//!    and the rest of the tick is spent on the reflected velocity. A second
//!    bounce inside the same tick is not looked for.
//! 3. Otherwise each axis is resolved on its own by folding any overshoot back
//!    across the wall it crossed (`2·wall − predicted`).
//! 4. Any axis still outside the arena (overshoot wider than the arena, or a
//!    long corner remainder) is clamped to the nearest wall and sent back in.
//! 5. The result also counts as a corner hit when the rounded screen origin
//!    sits on a display corner, or when the origin is within [`IMPACT_EPSILON`]
//!    of an arena corner on both axes.

use glam::DVec2;

use crate::arena::{Arena, Playfield};
use crate::types::IMPACT_EPSILON;

/// Which walls were struck during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    None,
    /// Left or right wall only.
    EdgeX,
    /// Top or bottom wall only.
    EdgeY,
    /// Both axes folded independently within the tick.
    AdjacentEdges,
    /// Both axes reached their walls at the same fractional time.
    Corner,
}

impl Impact {
    fn from_axes(x: bool, y: bool) -> Self {
        match (x, y) {
            (false, false) => Impact::None,
            (true, false) => Impact::EdgeX,
            (false, true) => Impact::EdgeY,
            (true, true) => Impact::AdjacentEdges,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::None => "none",
            Impact::EdgeX => "edge-x",
            Impact::EdgeY => "edge-y",
            Impact::AdjacentEdges => "adjacent-edges",
            Impact::Corner => "corner",
        }
    }
}

/// Result of one solver step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub position: DVec2,
    pub velocity: DVec2,
    pub corner_hit: bool,
    pub impact: Impact,
}

/// Advance `position` by `velocity * elapsed` inside `field.arena`.
///
/// A non-finite or negative `elapsed` is treated as zero: nothing moves.
///
/// # Examples
///
/// ```
/// use glam::DVec2;
/// use tui_dvd_core::{solver, Playfield};
/// use tui_dvd_core::types::CellSize;
///
/// // 117x47 display with a 17x7 sprite gives a 100x40 arena.
/// let field = Playfield::new(CellSize::new(117, 47), CellSize::new(17, 7));
/// let out = solver::step(DVec2::ZERO, DVec2::new(125.0, 50.0), &field, 1.0);
///
/// assert!(out.corner_hit);
/// assert_eq!(out.velocity, DVec2::new(-125.0, -50.0));
/// assert!((out.position - DVec2::new(75.0, 30.0)).length() < 1e-9);
/// ```
pub fn step(position: DVec2, velocity: DVec2, field: &Playfield, elapsed: f64) -> StepOutcome {
    let dt = if elapsed.is_finite() && elapsed > 0.0 {
        elapsed
    } else {
        0.0
    };
    let arena = field.arena;

    let tx = time_to_wall(position.x, velocity.x, arena.width, dt);
    let ty = time_to_wall(position.y, velocity.y, arena.height, dt);

    let (mut pos, mut vel, mut impact) = if is_simultaneous(tx, ty) {
        resolve_corner(position, velocity, dt, tx, ty)
    } else {
        resolve_edges(position, velocity, dt, arena)
    };

    let (cx, cy) = keep_inside(&mut pos, &mut vel, arena);
    if impact != Impact::Corner && (cx || cy) {
        let (ix, iy) = match impact {
            Impact::EdgeX => (true, false),
            Impact::EdgeY => (false, true),
            Impact::AdjacentEdges => (true, true),
            _ => (false, false),
        };
        impact = Impact::from_axes(ix || cx, iy || cy);
    }

    let corner_hit = impact == Impact::Corner
        || lands_on_display_corner(pos, field)
        || near_arena_corner(pos, arena);

    StepOutcome {
        position: pos,
        velocity: vel,
        corner_hit,
        impact,
    }
}

/// Fraction of the tick after which an axis reaches the wall it is moving toward.
///
/// `+∞` when the axis is not moving. Values outside `[0, 1]` mean the wall is
/// not reached this tick.
pub fn time_to_wall(pos: f64, vel: f64, max: f64, dt: f64) -> f64 {
    if vel < 0.0 {
        (0.0 - pos) / (vel * dt)
    } else if vel > 0.0 {
        (max - pos) / (vel * dt)
    } else {
        f64::INFINITY
    }
}

fn within_tick(t: f64) -> bool {
    (0.0..=1.0).contains(&t)
}

fn is_simultaneous(tx: f64, ty: f64) -> bool {
    within_tick(tx) && within_tick(ty) && (tx - ty).abs() <= IMPACT_EPSILON
}

fn resolve_corner(
    position: DVec2,
    velocity: DVec2,
    dt: f64,
    tx: f64,
    ty: f64,
) -> (DVec2, DVec2, Impact) {
    let travel = velocity * dt;
    let impact_point = position + DVec2::new(travel.x * tx, travel.y * ty);
    let reflected = -velocity;
    let remaining = (1.0 - (tx + ty) / 2.0).max(0.0) * dt;
    (impact_point + reflected * remaining, reflected, Impact::Corner)
}

fn resolve_edges(
    position: DVec2,
    velocity: DVec2,
    dt: f64,
    arena: Arena,
) -> (DVec2, DVec2, Impact) {
    let predicted = position + velocity * dt;
    let mut pos = predicted;
    let mut vel = velocity;

    let hit_x = match fold(predicted.x, arena.width) {
        Some(x) => {
            pos.x = x;
            vel.x = -vel.x;
            true
        }
        None => false,
    };
    let hit_y = match fold(predicted.y, arena.height) {
        Some(y) => {
            pos.y = y;
            vel.y = -vel.y;
            true
        }
        None => false,
    };

    (pos, vel, Impact::from_axes(hit_x, hit_y))
}

/// Mirror an overshoot back across the wall it crossed.
fn fold(predicted: f64, max: f64) -> Option<f64> {
    if predicted < 0.0 {
        Some(-predicted)
    } else if predicted > max {
        Some(2.0 * max - predicted)
    } else {
        None
    }
}

/// Clamp each axis into the arena, pointing its velocity back inside.
///
/// Returns which axes were touched.
fn keep_inside(pos: &mut DVec2, vel: &mut DVec2, arena: Arena) -> (bool, bool) {
    let x = clamp_axis(&mut pos.x, &mut vel.x, arena.width);
    let y = clamp_axis(&mut pos.y, &mut vel.y, arena.height);
    (x, y)
}

fn clamp_axis(p: &mut f64, v: &mut f64, max: f64) -> bool {
    if p.is_nan() || *p < 0.0 {
        *p = 0.0;
        *v = v.abs();
        true
    } else if *p > max {
        *p = max;
        *v = -v.abs();
        true
    } else {
        false
    }
}

/// Rounded origin coincides with a display corner.
///
/// Compared in signed screen space, so a display narrower than the sprite
/// still has a (negative) far column.
fn lands_on_display_corner(pos: DVec2, field: &Playfield) -> bool {
    let (max_col, max_row) = field.screen_max();
    let col = pos.x.round() as i64;
    let row = pos.y.round() as i64;
    (col == 0 || col == max_col) && (row == 0 || row == max_row)
}

fn near_arena_corner(pos: DVec2, arena: Arena) -> bool {
    (approx(pos.x, 0.0) || approx(pos.x, arena.width))
        && (approx(pos.y, 0.0) || approx(pos.y, arena.height))
}

fn approx(v: f64, target: f64) -> bool {
    (v - target).abs() <= IMPACT_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use crate::types::CellSize;

    const SPRITE: CellSize = CellSize::new(17, 7);

    /// Playfield whose arena is exactly `w × h`.
    fn field(w: u16, h: u16) -> Playfield {
        Playfield::new(CellSize::new(w + SPRITE.width, h + SPRITE.height), SPRITE)
    }

    fn assert_close(a: DVec2, b: DVec2) {
        assert!((a - b).length() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn free_flight_is_exact() {
        let f = field(103, 23);
        let pos = DVec2::new(10.0, 10.0);
        let vel = DVec2::new(30.0, 15.0);
        let dt = 0.1;

        let out = step(pos, vel, &f, dt);
        assert_eq!(out.position, pos + vel * dt);
        assert_eq!(out.velocity, vel);
        assert_eq!(out.impact, Impact::None);
        assert!(!out.corner_hit);
    }

    #[test]
    fn right_wall_mirrors_overshoot() {
        let f = field(103, 23);
        let pos = DVec2::new(100.0, 10.0);
        let vel = DVec2::new(35.0, 10.0);
        let dt = 0.2;

        let out = step(pos, vel, &f, dt);
        assert_eq!(out.position.x, 2.0 * 103.0 - (pos.x + vel.x * dt));
        assert_eq!(out.position.y, pos.y + vel.y * dt);
        assert_eq!(out.velocity, DVec2::new(-35.0, 10.0));
        assert_eq!(out.impact, Impact::EdgeX);
        assert!(!out.corner_hit);
    }

    #[test]
    fn left_wall_mirrors_overshoot() {
        let f = field(103, 23);
        let out = step(DVec2::new(1.0, 10.0), DVec2::new(-35.0, 0.0), &f, 0.2);

        assert_close(out.position, DVec2::new(6.0, 10.0));
        assert_eq!(out.velocity, DVec2::new(35.0, 0.0));
        assert_eq!(out.impact, Impact::EdgeX);
    }

    #[test]
    fn bottom_wall_only_reflects_y() {
        let f = field(103, 23);
        let out = step(DVec2::new(50.0, 22.0), DVec2::new(10.0, 20.0), &f, 0.1);

        assert_close(out.position, DVec2::new(51.0, 22.0));
        assert_eq!(out.velocity, DVec2::new(10.0, -20.0));
        assert_eq!(out.impact, Impact::EdgeY);
    }

    #[test]
    fn simultaneous_impact_is_a_corner() {
        let f = field(100, 40);
        let out = step(DVec2::ZERO, DVec2::new(125.0, 50.0), &f, 1.0);

        assert!(out.corner_hit);
        assert_eq!(out.impact, Impact::Corner);
        assert_eq!(out.velocity, DVec2::new(-125.0, -50.0));
        assert_close(out.position, DVec2::new(75.0, 30.0));
    }

    #[test]
    fn velocity_aimed_at_far_corner_ends_on_it() {
        let f = field(100, 40);
        let out = step(DVec2::ZERO, DVec2::new(100.0, 40.0), &f, 1.0);

        assert!(out.corner_hit);
        assert_eq!(out.impact, Impact::Corner);
        assert_eq!(out.velocity, DVec2::new(-100.0, -40.0));
        assert_close(out.position, DVec2::new(100.0, 40.0));
    }

    #[test]
    fn touching_bottom_wall_at_tick_end_is_not_a_bounce() {
        // x needs 100/70 of a tick to reach its wall, y arrives exactly at t = 1.
        let f = field(100, 40);
        let out = step(DVec2::ZERO, DVec2::new(70.0, 40.0), &f, 1.0);

        assert_eq!(out.impact, Impact::None);
        assert_eq!(out.position, DVec2::new(70.0, 40.0));
        assert_eq!(out.velocity, DVec2::new(70.0, 40.0));
        assert!(!out.corner_hit);
    }

    #[test]
    fn near_simultaneous_within_tolerance_is_a_corner() {
        let f = field(100, 40);
        // tx = 0.8, ty = 0.7996
        let out = step(DVec2::new(0.0, 0.02), DVec2::new(125.0, 50.0), &f, 1.0);

        assert_eq!(out.impact, Impact::Corner);
        assert!(out.corner_hit);
        assert_eq!(out.velocity, DVec2::new(-125.0, -50.0));
        assert!(f.arena.contains(out.position));
    }

    #[test]
    fn impacts_outside_tolerance_resolve_per_axis() {
        let f = field(100, 40);
        // tx = 0.8, ty = 0.79
        let out = step(DVec2::new(0.0, 0.5), DVec2::new(125.0, 50.0), &f, 1.0);

        assert_eq!(out.impact, Impact::AdjacentEdges);
        assert_close(out.position, DVec2::new(75.0, 29.5));
        assert_eq!(out.velocity, DVec2::new(-125.0, -50.0));
        assert!(!out.corner_hit);
    }

    #[test]
    fn rounded_screen_corner_counts_as_corner_hit() {
        let f = field(100, 40);
        // tx = 0.8, ty = 1.0: edge path folds x to 0.2 and leaves y on the wall.
        let out = step(DVec2::new(0.8, 39.0), DVec2::new(-4.0, 4.0), &f, 0.25);

        assert_eq!(out.impact, Impact::EdgeX);
        assert_close(out.position, DVec2::new(0.2, 40.0));
        assert!(out.corner_hit);
    }

    #[test]
    fn arena_corner_proximity_uses_tolerance() {
        let arena = Arena::new(100.0, 40.0);
        assert!(near_arena_corner(DVec2::new(0.0005, 39.9995), arena));
        assert!(near_arena_corner(DVec2::new(100.0, 0.0), arena));
        assert!(!near_arena_corner(DVec2::new(0.01, 0.0), arena));
        assert!(!near_arena_corner(DVec2::new(50.0, 40.0), arena));
    }

    #[test]
    fn screen_corner_check_handles_undersized_display() {
        // 10x5 display, 17x7 sprite: far column/row are negative.
        let f = Playfield::new(CellSize::new(10, 5), SPRITE);
        assert!(lands_on_display_corner(DVec2::ZERO, &f));
        assert!(!lands_on_display_corner(DVec2::new(1.0, 0.0), &f));
    }

    #[test]
    fn zero_arena_pins_sprite_at_origin() {
        let f = Playfield::new(CellSize::new(10, 5), SPRITE);
        let out = step(DVec2::ZERO, DVec2::new(35.0, 20.0), &f, 1.0 / 30.0);

        assert_eq!(out.position, DVec2::ZERO);
        assert!(out.corner_hit);
        assert!(out.velocity.x != 0.0 && out.velocity.y != 0.0);
    }

    #[test]
    fn zero_velocity_stays_put() {
        let f = field(100, 40);
        let out = step(DVec2::new(5.0, 5.0), DVec2::ZERO, &f, 1.0);

        assert_eq!(out.position, DVec2::new(5.0, 5.0));
        assert_eq!(out.velocity, DVec2::ZERO);
        assert!(!out.corner_hit);
    }

    #[test]
    fn zero_or_invalid_elapsed_moves_nothing() {
        let f = field(100, 40);
        let pos = DVec2::new(0.0, 5.0);
        let vel = DVec2::new(-3.0, 2.0);

        for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let out = step(pos, vel, &f, dt);
            assert_eq!(out.position, pos, "dt = {dt}");
            assert_eq!(out.velocity, vel, "dt = {dt}");
        }
    }

    #[test]
    fn corner_remainder_longer_than_arena_is_clamped() {
        let f = field(10, 10);
        let out = step(DVec2::ZERO, DVec2::new(100.0, 100.0), &f, 1.0);

        assert_eq!(out.impact, Impact::Corner);
        assert!(out.corner_hit);
        assert!(f.arena.contains(out.position));
    }

    #[test]
    fn huge_overshoot_stays_in_bounds() {
        let f = field(20, 10);
        let out = step(DVec2::new(19.0, 1.0), DVec2::new(35.0, 3.0), &f, 10.0);

        assert!(f.arena.contains(out.position));
        assert_eq!(out.position.x, 0.0);
        assert!(out.velocity.x > 0.0);
    }

    #[test]
    fn time_to_wall_uses_heading() {
        assert_eq!(time_to_wall(5.0, 10.0, 10.0, 1.0), 0.5);
        assert_eq!(time_to_wall(5.0, -10.0, 10.0, 1.0), 0.5);
        assert_eq!(time_to_wall(5.0, 0.0, 10.0, 1.0), f64::INFINITY);
        assert!(time_to_wall(5.0, 1.0, 10.0, 1.0) > 1.0);
    }

    #[test]
    fn random_ticks_never_leave_the_arena() {
        let mut rng = SimpleRng::new(2024);
        for _ in 0..2_000 {
            let f = field(rng.next_range(150) as u16, rng.next_range(50) as u16);
            let pos = DVec2::new(rng.next_f64() * f.arena.width, rng.next_f64() * f.arena.height);
            let vel = DVec2::new(rng.next_f64() * 400.0 - 200.0, rng.next_f64() * 400.0 - 200.0);
            let dt = rng.next_f64() * 2.0;

            let out = step(pos, vel, &f, dt);
            assert!(
                f.arena.contains(out.position),
                "{pos:?} {vel:?} dt={dt} -> {:?} in {:?}",
                out.position,
                f.arena
            );
            assert_eq!(out.velocity.x.abs(), vel.x.abs());
            assert_eq!(out.velocity.y.abs(), vel.y.abs());
        }
    }
}
