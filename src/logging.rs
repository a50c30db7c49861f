//! File logging setup.
//!
//! The game owns the terminal (raw mode, alternate screen), so log output can
//! only go to a file. Without `RAYCASTER_LOG` no subscriber is installed and
//! every `tracing` call in the workspace is a no-op.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;

/// Install the global subscriber if a log file is configured.
///
/// Returns whether logging is active.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("failed to install log subscriber")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_log_path_installs_nothing() {
        assert!(!init(&GameConfig::default()).unwrap());
    }
}
