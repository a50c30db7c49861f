//! Input diagnostics.
//!
//! Prints raw key events and the per-tick snapshot the game would see, so key
//! mapping and release handling can be checked on a given terminal.
//! Quit with `q` or Ctrl+C.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};

use tui_raycaster::input::{should_quit, InputTracker};
use tui_raycaster::types::{InputSnapshot, TICK_MS};

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            io::stdout(),
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }

    let result = run(enhanced);

    if enhanced {
        let _ = execute!(io::stdout(), PopKeyboardEnhancementFlags);
    }
    let _ = terminal::disable_raw_mode();
    result
}

fn run(enhanced: bool) -> Result<()> {
    let mut out = io::stdout();
    write!(out, "key release events: {enhanced}\r\n")?;
    out.flush()?;

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut input = InputTracker::new();
    let mut last_tick = Instant::now();
    let mut last_snapshot = InputSnapshot::default();

    loop {
        let timeout = tick.checked_sub(last_tick.elapsed()).unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                write!(out, "{:?} {:?}\r\n", key.kind, key.code)?;
                match key.kind {
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
                }
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            let snapshot = input.snapshot();
            if snapshot != last_snapshot {
                let held: Vec<&str> = snapshot.held.iter().map(|b| b.as_str()).collect();
                let pressed: Vec<&str> = snapshot.pressed.iter().map(|b| b.as_str()).collect();
                write!(out, "  held={held:?} pressed={pressed:?}\r\n")?;
                last_snapshot = snapshot;
            }
        }
        out.flush()?;
    }
}
