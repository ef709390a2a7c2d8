//! Tracing setup.
//!
//! The terminal UI owns stdout and stderr, so events are only written when
//! a log file is configured. Without one no subscriber is installed and
//! `tracing` macros are no-ops.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::QuizConfig;

/// Install a file-backed subscriber if the config names a log file.
///
/// `RUST_LOG` takes precedence over `config.log_level`. Calling this twice
/// is harmless; only the first subscriber is kept.
pub fn init_tracing(config: &QuizConfig) -> io::Result<()> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
