//! TUI Raycaster (workspace facade crate).
//!
//! The simulation, renderer and terminal shim live in dedicated crates under
//! `crates/`; this package re-exports them as `tui_raycaster::{core,engine,input,term,types}`
//! and owns the pieces only the binaries need (configuration and logging).

pub mod config;
pub mod logging;

pub use tui_raycaster_core as core;
pub use tui_raycaster_engine as engine;
pub use tui_raycaster_input as input;
pub use tui_raycaster_term as term;
pub use tui_raycaster_types as types;

pub use config::GameConfig;
