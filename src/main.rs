//! tmb - menu bar density CLI entry point
//!
//! Reads and writes the menu bar spacing and selection padding levels,
//! previews the resulting measurements and refreshes the menu bar.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tighter_menubar::config::loader::ConfigLoader;
use tighter_menubar::config::schema::Config;
use tighter_menubar::layout::DensityLevel;
use tighter_menubar::logging;

mod commands;

#[cfg(test)]
mod cli_tests;

/// Tune macOS menu bar item spacing and selection padding
#[derive(Parser)]
#[command(name = "tmb")]
#[command(version, about = "Tune macOS menu bar item spacing and selection padding")]
pub(crate) struct Cli {
    /// Configuration file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the tmb CLI
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the persisted levels and what they render as
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Calculate measurements for a level pair without touching anything
    Preview {
        /// Spacing level (1-10)
        #[arg(long)]
        spacing: DensityLevel,
        /// Selection padding level (1-10)
        #[arg(long)]
        padding: DensityLevel,
        /// Menu bar font size in points
        #[arg(long)]
        font_size: Option<f64>,
        /// macOS major version to calculate for
        #[arg(long)]
        os_version: Option<u32>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Persist a level pair and refresh the menu bar
    Apply {
        /// Spacing level (1-10)
        #[arg(long)]
        spacing: DensityLevel,
        /// Selection padding level (1-10)
        #[arg(long)]
        padding: DensityLevel,
        /// Write the levels even when they match the persisted ones
        #[arg(long)]
        force: bool,
        /// Log out afterwards so every app picks up the change
        #[arg(long, requires = "yes")]
        logout: bool,
        /// Confirm the logout
        #[arg(long)]
        yes: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Delete both keys so the menu bar returns to the system default
    Restore {
        /// Confirm the restore
        #[arg(long)]
        yes: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Log out of the current session
    Logout {
        /// Confirm the logout
        #[arg(long)]
        yes: bool,
    },

    /// List the built-in OS profiles
    Profiles {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config, ExitCode> {
    ConfigLoader::load(path).map_err(|e| {
        eprintln!("Config error: {e}");
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Commands::Config { action } = &cli.command {
        return commands::run_config_command(action, cli.config.as_deref());
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(code) => return code,
    };
    logging::init(&config.logging);

    match cli.command {
        Commands::Show { json } => commands::run_show_command(&config, json),
        Commands::Preview {
            spacing,
            padding,
            font_size,
            os_version,
            json,
        } => commands::run_preview_command(&config, spacing, padding, font_size, os_version, json),
        Commands::Apply {
            spacing,
            padding,
            force,
            logout,
            yes: _,
            json,
        } => commands::run_apply_command(&config, spacing, padding, force, logout, json),
        Commands::Restore { yes, json } => commands::run_restore_command(&config, yes, json),
        Commands::Logout { yes } => commands::run_logout_command(&config, yes),
        Commands::Profiles { json } => commands::run_profiles_command(&config, json),
        Commands::Config { .. } => ExitCode::SUCCESS,
    }
}
