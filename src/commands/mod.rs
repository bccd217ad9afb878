//! Command implementations for the tmb CLI.
//!
//! This module contains all command handler functions, organized by domain:
//! - `config` - Configuration file management
//! - `density` - Reading, applying and restoring the persisted levels
//! - `preview` - Pure layout previews and the profile table
//! - `session` - Logout

pub(crate) mod config;
pub(crate) mod density;
pub(crate) mod preview;
pub(crate) mod session;

pub(crate) use config::*;
pub(crate) use density::*;
pub(crate) use preview::*;
pub(crate) use session::*;

use serde::Serialize;
use std::process::ExitCode;

/// Prints `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to serialize output: {e}");
            ExitCode::FAILURE
        }
    }
}
