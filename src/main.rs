//! Terminal raycaster runner (default binary).
//!
//! Reads configuration from the environment, then drives the simulation at a
//! fixed tick: input snapshot, update, render to a pixel canvas, half-block
//! compose, diff flush.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_raycaster::core::GameState;
use tui_raycaster::engine::{FrameRenderer, Screen};
use tui_raycaster::input::{should_quit, InputTracker};
use tui_raycaster::term::{canvas_for, compose, FrameBuffer, PixelCanvas, Rgb, TerminalRenderer};
use tui_raycaster::{logging, GameConfig};

/// With release events available, the timeout only guards against lost releases.
const ENHANCED_KEY_RELEASE_TIMEOUT_MS: u32 = 2_000;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;

    // Load before touching the terminal so a bad map file reports normally.
    let game = config.new_game()?;
    tracing::info!(scene = config.scene.as_str(), tick_ms = config.tick_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    tracing::info!(ok = result.is_ok(), "exiting");
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState, config: &GameConfig) -> Result<()> {
    let tick_duration = Duration::from_millis(config.tick_ms as u64);

    let mut input = InputTracker::new();
    if term.has_key_release_events() {
        input = input.with_key_release_timeout_ms(ENHANCED_KEY_RELEASE_TIMEOUT_MS);
    }

    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    let (w, h) = canvas_for(cols, rows);
    let mut renderer = FrameRenderer::new(Screen::fit(w, h));
    let mut canvas = PixelCanvas::new(w, h);
    let mut fb = FrameBuffer::new(cols, rows);

    let mut last_tick = Instant::now();

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        input.handle_key_press(key.code);
                    }
                    KeyEventKind::Repeat => {
                        input.handle_key_press(key.code);
                    }
                    KeyEventKind::Release => input.handle_key_release(key.code),
                },
                Event::Resize(cols, rows) => {
                    let (w, h) = canvas_for(cols, rows);
                    tracing::debug!(cols, rows, "terminal resized");
                    canvas.resize(w, h);
                    renderer.resize(Screen::fit(w, h));
                    term.invalidate();
                }
                Event::FocusLost => input.reset(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            let snapshot = input.snapshot();
            game.update(&snapshot);

            canvas.clear(Rgb::default());
            renderer.render(&game, &mut canvas);
            compose(&canvas, &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
