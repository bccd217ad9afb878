//! Parsing of `tmb config`.

use crate::{Cli, Commands, ConfigAction};
use clap::Parser;

#[test]
fn test_config_without_action_fails() {
    let result = Cli::try_parse_from(["tmb", "config"]);
    assert!(result.is_err());
}

#[test]
fn test_config_init_force_flag() {
    let cli = Cli::try_parse_from(["tmb", "config", "init", "--force"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Init { force: true }
        }
    ));
}

#[test]
fn test_config_path_and_validate() {
    let cli = Cli::try_parse_from(["tmb", "config", "path"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Path
        }
    ));

    let cli = Cli::try_parse_from(["tmb", "config", "validate"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Validate
        }
    ));
}
