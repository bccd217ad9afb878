//! Logging initialization for the `tmb` binary.
//!
//! Configures the `tracing` subscriber with level filtering via the `TMB_LOG`
//! environment variable, falling back to the `[logging] level` from the
//! config file. Records emitted through the `log` facade (the layout crate)
//! are captured as well.
//!
//! ```bash
//! # Show every external command that runs
//! TMB_LOG=debug tmb apply --spacing 4 --padding 2
//!
//! # Module-specific filtering
//! TMB_LOG=tighter_menubar::refresh=debug,warn tmb restore --yes
//! ```

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LoggingConfig;
use crate::config::xdg;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "TMB_LOG";

/// Builds the filter from `TMB_LOG`, or from `config` when unset or invalid.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(config.level.as_directive()))
}

/// Initialize the global tracing subscriber.
///
/// Writes to stderr, or appends to `config.file` when set. If the log file
/// cannot be opened, logging falls back to stderr with a warning. Calling
/// this twice leaves the first subscriber in place.
pub fn init(config: &LoggingConfig) {
    let filter = build_filter(config);

    let file = if config.file.is_empty() {
        None
    } else {
        let path = xdg::expand_tilde(&config.file);
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
                None
            }
        }
    };

    let result = match file {
        Some(file) => fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        None => fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
