//! Bouncing DVD logo (default binary).
//!
//! Runs until SIGINT or any key press. Tuning comes from `DVD_*` environment
//! variables; see [`tui_dvd::config`].

use anyhow::{Context, Result};
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info};

use tui_dvd::config::{clock_seed, DvdConfig};
use tui_dvd::core::{FrameClock, Simulation, SpriteShape};
use tui_dvd::input::ExitWatcher;
use tui_dvd::logging;
use tui_dvd::term::{DvdView, FrameBuffer, TerminalRenderer, Viewport};
use tui_dvd::types::{CellSize, DEFAULT_DISPLAY};

fn main() -> Result<()> {
    let config = DvdConfig::from_env();
    logging::init(&config)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start runtime")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = runtime.block_on(run(&mut term, &config));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

async fn run(term: &mut TerminalRenderer, config: &DvdConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(clock_seed);
    let disp = display_size();
    let mut sim = Simulation::new(disp, SpriteShape::dvd(), config.sim_params(seed));
    info!(
        columns = disp.width,
        rows = disp.height,
        arena_w = sim.arena().width,
        arena_h = sim.arena().height,
        seed,
        fps = config.fps,
        "dvd started"
    );

    let mut exit = ExitWatcher::spawn().context("failed to start key listener")?;
    let mut clock = FrameClock::new(std::time::Instant::now(), config.fps);
    let mut ticker = time::interval(config.frame_period());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let view = DvdView::default();
    let mut fb = FrameBuffer::new(disp.width, disp.height);

    loop {
        tokio::select! {
            reason = exit.cancelled() => {
                info!(reason = reason.as_str(), corner_hits = sim.sprite().corner_hits, "dvd stopped");
                return Ok(());
            }
            tick = ticker.tick() => {
                if exit.is_cancelled() {
                    continue;
                }

                let disp = display_size();
                if sim.on_resize(disp.width, disp.height) {
                    debug!(
                        columns = disp.width,
                        rows = disp.height,
                        arena_w = sim.arena().width,
                        arena_h = sim.arena().height,
                        "display resized"
                    );
                    term.invalidate();
                }

                let report = sim.advance(clock.elapsed(tick.into_std()));
                if report.corner_hit {
                    info!(
                        corner_hits = report.corner_hits,
                        color = report.color.as_str(),
                        impact = report.impact.as_str(),
                        "corner hit"
                    );
                }

                let viewport = Viewport::new(disp.width, disp.height);
                view.render_into(&sim.snapshot(), viewport, &mut fb);
                term.draw_swap(&mut fb)?;
            }
        }
    }
}

/// Current terminal size; axes the terminal cannot report fall back to the default.
fn display_size() -> CellSize {
    let (columns, rows) = crossterm::terminal::size().unwrap_or((0, 0));
    CellSize::new(
        if columns == 0 { DEFAULT_DISPLAY.width } else { columns },
        if rows == 0 { DEFAULT_DISPLAY.height } else { rows },
    )
}
