//! `tmb logout`.

use std::process::ExitCode;
use tighter_menubar::config::schema::Config;
use tighter_menubar::process::SystemRunner;
use tighter_menubar::session;

/// Requests a logout once `confirmed` is set.
pub(crate) fn run_logout_command(config: &Config, confirmed: bool) -> ExitCode {
    if !confirmed {
        eprintln!("Logging out closes every app. Re-run with --yes to confirm.");
        return ExitCode::FAILURE;
    }
    session::request_logout(&SystemRunner, &config.session.osascript_command);
    println!("Logout requested");
    ExitCode::SUCCESS
}
