//! `tmb config` subcommands.

use crate::ConfigAction;
use std::path::Path;
use std::process::ExitCode;
use tighter_menubar::config::{default, loader::ConfigLoader, xdg};

/// Runs a config action against `path`, or the default location when `None`.
pub(crate) fn run_config_command(action: &ConfigAction, path: Option<&Path>) -> ExitCode {
    let result = match action {
        ConfigAction::Init { force } => {
            let created = match path {
                Some(path) => default::create_config_at(path, *force),
                None => default::create_default_config(*force),
            };
            created.map(|path| println!("Created configuration at {}", path.display()))
        }
        ConfigAction::Path => {
            let path = path.map(Path::to_path_buf).unwrap_or_else(xdg::config_path);
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Validate => {
            ConfigLoader::load(path).map(|config| {
                println!("Configuration is valid");
                println!("{config:#?}");
            })
        }
    };
    if let Err(e) = result {
        eprintln!("Config error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
