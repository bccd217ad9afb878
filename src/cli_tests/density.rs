//! Parsing of the level-taking subcommands.

use crate::{Cli, Commands};
use clap::{CommandFactory, Parser};

#[test]
fn verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn test_show_defaults_to_text() {
    let cli = Cli::try_parse_from(["tmb", "show"]).unwrap();
    assert!(matches!(cli.command, Commands::Show { json: false }));
    assert!(cli.config.is_none());
}

#[test]
fn test_apply_parses_levels() {
    let cli = Cli::try_parse_from(["tmb", "apply", "--spacing", "5", "--padding", "7"]).unwrap();
    match cli.command {
        Commands::Apply {
            spacing,
            padding,
            force,
            logout,
            yes,
            json,
        } => {
            assert_eq!(spacing.get(), 5);
            assert_eq!(padding.get(), 7);
            assert!(!force && !logout && !yes && !json);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_apply_rejects_out_of_range_level() {
    let result = Cli::try_parse_from(["tmb", "apply", "--spacing", "0", "--padding", "7"]);
    assert!(result.is_err());
    let result = Cli::try_parse_from(["tmb", "apply", "--spacing", "3", "--padding", "11"]);
    assert!(result.is_err());
}

#[test]
fn test_apply_rejects_non_numeric_level() {
    let result = Cli::try_parse_from(["tmb", "apply", "--spacing", "wide", "--padding", "7"]);
    assert!(result.is_err());
}

#[test]
fn test_apply_requires_both_levels() {
    let result = Cli::try_parse_from(["tmb", "apply", "--spacing", "3"]);
    assert!(result.is_err());
}

#[test]
fn test_apply_logout_requires_yes() {
    let result = Cli::try_parse_from([
        "tmb", "apply", "--spacing", "3", "--padding", "3", "--logout",
    ]);
    assert!(result.is_err());

    let cli = Cli::try_parse_from([
        "tmb", "apply", "--spacing", "3", "--padding", "3", "--logout", "--yes",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Apply {
            logout: true,
            yes: true,
            ..
        }
    ));
}

#[test]
fn test_preview_optional_overrides() {
    let cli = Cli::try_parse_from([
        "tmb",
        "preview",
        "--spacing",
        "10",
        "--padding",
        "1",
        "--font-size",
        "16.5",
        "--os-version",
        "14",
        "--json",
    ])
    .unwrap();
    match cli.command {
        Commands::Preview {
            spacing,
            padding,
            font_size,
            os_version,
            json,
        } => {
            assert_eq!(spacing.get(), 10);
            assert_eq!(padding.get(), 1);
            assert_eq!(font_size, Some(16.5));
            assert_eq!(os_version, Some(14));
            assert!(json);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_restore_and_logout_confirmation_flags() {
    let cli = Cli::try_parse_from(["tmb", "restore"]).unwrap();
    assert!(matches!(cli.command, Commands::Restore { yes: false, .. }));

    let cli = Cli::try_parse_from(["tmb", "logout", "--yes"]).unwrap();
    assert!(matches!(cli.command, Commands::Logout { yes: true }));
}

#[test]
fn test_global_config_flag_after_subcommand() {
    let cli = Cli::try_parse_from(["tmb", "profiles", "--config", "/tmp/tmb.toml"]).unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/tmb.toml"))
    );
    assert!(matches!(cli.command, Commands::Profiles { json: false }));
}
