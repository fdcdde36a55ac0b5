use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::DVec2;
use tui_dvd::core::solver;
use tui_dvd::core::{Playfield, SimParams, Simulation, SpriteShape};
use tui_dvd::term::{DvdView, FrameBuffer, Viewport};
use tui_dvd::types::{CellSize, DEFAULT_DISPLAY};

const TICK: f64 = 1.0 / 30.0;

fn bench_advance(c: &mut Criterion) {
    let mut sim = Simulation::new(DEFAULT_DISPLAY, SpriteShape::dvd(), SimParams::default());

    c.bench_function("sim_advance_33ms", |b| {
        b.iter(|| {
            sim.on_resize(DEFAULT_DISPLAY.width, DEFAULT_DISPLAY.height);
            black_box(sim.advance(black_box(TICK)));
        })
    });
}

fn bench_step_free_flight(c: &mut Criterion) {
    let field = Playfield::new(DEFAULT_DISPLAY, SpriteShape::dvd().size());

    c.bench_function("solver_step_free_flight", |b| {
        b.iter(|| {
            solver::step(
                black_box(DVec2::new(40.0, 10.0)),
                black_box(DVec2::new(23.0, 25.0)),
                &field,
                black_box(TICK),
            )
        })
    });
}

fn bench_step_corner(c: &mut Criterion) {
    // 100x40 arena.
    let field = Playfield::new(CellSize::new(117, 47), SpriteShape::dvd().size());

    c.bench_function("solver_step_corner", |b| {
        b.iter(|| {
            solver::step(
                black_box(DVec2::new(75.0, 30.0)),
                black_box(DVec2::new(125.0, 50.0)),
                &field,
                black_box(0.4),
            )
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let sim = Simulation::new(DEFAULT_DISPLAY, SpriteShape::dvd(), SimParams::default());
    let view = DvdView::default();
    let viewport = Viewport::new(DEFAULT_DISPLAY.width, DEFAULT_DISPLAY.height);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_into_120x30", |b| {
        b.iter(|| {
            view.render_into(black_box(&sim.snapshot()), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_step_free_flight,
    bench_step_corner,
    bench_render
);
criterion_main!(benches);
