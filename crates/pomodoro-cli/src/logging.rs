//! Tracing subscriber setup.
//!
//! Stderr for one-shot commands. While the widget owns the terminal, output
//! goes to a log file instead so it cannot tear the screen.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use pomodoro_core::storage::LogConfig;
use tracing_subscriber::EnvFilter;

pub enum Target {
    Stderr,
    File(PathBuf),
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `log.level`.
pub fn init(log: &LogConfig, target: Target) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    match target {
        Target::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| e as Box<dyn std::error::Error>)?,
        Target::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| e as Box<dyn std::error::Error>)?
        }
    }
    Ok(())
}
