//! Terminal presentation module.
//!
//! The frame renderer draws into a [`PixelCanvas`]; [`present::compose`] folds
//! two pixel rows into each terminal row with half-block glyphs, and the
//! [`TerminalRenderer`] flushes only the cells that changed since the last frame.
//!
//! Everything except `renderer` is pure (no I/O) and unit-tested.

pub mod canvas;
pub mod fb;
pub mod present;
pub mod renderer;

pub use tui_raycaster_engine as engine;
pub use tui_raycaster_types as types;

pub use canvas::{Label, PixelCanvas};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use present::{canvas_for, cells_for, compose};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
