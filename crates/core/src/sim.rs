//! Simulation state - the bouncing sprite threaded through every tick
//!
//! [`Simulation`] owns all mutable state of a run: the arena tracker, the
//! sprite's position/velocity/color, the corner-hit counter and the RNG used
//! for color draws. The runner calls [`Simulation::on_resize`] and
//! [`Simulation::advance`] once per tick and paints [`Simulation::snapshot`].

use glam::DVec2;

use crate::arena::{sanitize_display, Arena, ArenaTracker, Playfield};
use crate::clock::sanitize_elapsed;
use crate::palette::next_color;
use crate::rng::SimpleRng;
use crate::snapshot::SimSnapshot;
use crate::solver::{self, Impact};
use crate::sprite::SpriteShape;
use crate::types::{frame_period_secs, CellSize, PaletteColor, DEFAULT_SPEED, FPS, LAUNCH_ANGLE};

/// Start-up parameters of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimParams {
    /// Nominal tick rate, used when the measured elapsed time is unusable.
    pub fps: u32,
    /// Cells per second.
    pub speed: f64,
    /// Radians from the positive x axis (y grows downwards).
    pub angle: f64,
    pub seed: u64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            fps: FPS,
            speed: DEFAULT_SPEED,
            angle: LAUNCH_ANGLE,
            seed: 1,
        }
    }
}

impl SimParams {
    pub fn launch_velocity(&self) -> DVec2 {
        DVec2::from_angle(self.angle) * self.speed
    }
}

/// Mutable state of the bouncing block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteState {
    pub position: DVec2,
    pub velocity: DVec2,
    pub color: PaletteColor,
    pub corner_hits: u64,
}

/// What happened during one [`Simulation::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub position: DVec2,
    pub velocity: DVec2,
    pub corner_hit: bool,
    pub impact: Impact,
    /// Color after the tick (already changed when `corner_hit`).
    pub color: PaletteColor,
    pub corner_hits: u64,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    shape: SpriteShape,
    tracker: ArenaTracker,
    sprite: SpriteState,
    rng: SimpleRng,
    period: f64,
}

impl Simulation {
    /// Start a run with a random position inside the arena and a random color.
    pub fn new(display: CellSize, shape: SpriteShape, params: SimParams) -> Self {
        let mut rng = SimpleRng::from_seed_u64(params.seed);
        let tracker = ArenaTracker::new(
            sanitize_display(display.width, display.height),
            shape.size(),
        );
        let arena = tracker.arena();
        let position = DVec2::new(rng.next_f64() * arena.width, rng.next_f64() * arena.height);
        let color = rng.next_color();

        Self {
            shape,
            tracker,
            sprite: SpriteState {
                position,
                velocity: params.launch_velocity(),
                color,
                corner_hits: 0,
            },
            rng,
            period: frame_period_secs(params.fps),
        }
    }

    /// Start from an explicit sprite state (clamped into the arena).
    pub fn with_state(
        display: CellSize,
        shape: SpriteShape,
        sprite: SpriteState,
        params: SimParams,
    ) -> Self {
        let mut sim = Self {
            shape,
            tracker: ArenaTracker::new(
                sanitize_display(display.width, display.height),
                shape.size(),
            ),
            sprite,
            rng: SimpleRng::from_seed_u64(params.seed),
            period: frame_period_secs(params.fps),
        };
        let arena = sim.tracker.arena();
        sim.sprite.position = sim
            .sprite
            .position
            .clamp(DVec2::ZERO, arena.max());
        sim
    }

    /// Track a (possibly unchanged) display size.
    ///
    /// Zero dimensions are treated as 1. Returns `true` when the size changed.
    pub fn on_resize(&mut self, columns: u16, rows: u16) -> bool {
        self.tracker
            .refresh(sanitize_display(columns, rows), &mut self.sprite.position)
    }

    /// Advance the sprite by `elapsed` seconds.
    ///
    /// A non-positive `elapsed` is replaced by the nominal frame period. On a
    /// corner hit the color changes (never to the same color) and the counter
    /// goes up by one.
    pub fn advance(&mut self, elapsed: f64) -> TickReport {
        let dt = sanitize_elapsed(elapsed, self.period);
        let out = solver::step(
            self.sprite.position,
            self.sprite.velocity,
            self.tracker.field(),
            dt,
        );

        self.sprite.position = out.position;
        self.sprite.velocity = out.velocity;
        if out.corner_hit {
            self.sprite.color = next_color(self.sprite.color, &mut self.rng);
            self.sprite.corner_hits += 1;
        }

        TickReport {
            position: out.position,
            velocity: out.velocity,
            corner_hit: out.corner_hit,
            impact: out.impact,
            color: self.sprite.color,
            corner_hits: self.sprite.corner_hits,
        }
    }

    pub fn sprite(&self) -> &SpriteState {
        &self.sprite
    }

    pub fn shape(&self) -> SpriteShape {
        self.shape
    }

    pub fn arena(&self) -> Arena {
        self.tracker.arena()
    }

    pub fn field(&self) -> &Playfield {
        self.tracker.field()
    }

    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            left: self.sprite.position.x.round() as i32,
            top: self.sprite.position.y.round() as i32,
            shape: self.shape,
            color: self.sprite.color,
            corner_hits: self.sprite.corner_hits,
        }
    }
}
