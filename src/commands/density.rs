//! `tmb show`, `tmb apply` and `tmb restore`.
//!
//! Each command spins up a [`PreferenceService`] on a short-lived runtime and
//! drives it the way an interactive front end would: load, edit, commit.

use std::future::Future;
use std::process::ExitCode;

use serde::Serialize;
use tighter_menubar::config::schema::Config;
use tighter_menubar::controller::{
    CommitReport, Levels, Phase, PreferenceController, PreferenceService, ServiceError,
};
use tighter_menubar::host::PreviewContext;
use tighter_menubar::layout::{calculate_for_levels, DensityLevel, LayoutMeasurements, OsProfile};
use tighter_menubar::prefs::DefaultsStore;
use tighter_menubar::process::SystemRunner;
use tighter_menubar::refresh::{RefreshOutcome, RefreshProtocol};
use tighter_menubar::session;

use super::print_json;

/// Builds the production controller from `config` and spawns its service.
///
/// Must run inside a tokio runtime.
fn spawn_service(config: &Config) -> PreferenceService {
    let store = DefaultsStore::new(SystemRunner, config.store.defaults_command.clone());
    let refresher = RefreshProtocol::new(SystemRunner, config.refresh.clone());
    PreferenceService::spawn(PreferenceController::new(
        store,
        refresher,
        config.store.keys(),
    ))
}

/// Runs `future` to completion on a fresh runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output, ExitCode> {
    match tokio::runtime::Runtime::new() {
        Ok(runtime) => Ok(runtime.block_on(future)),
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {e}");
            Err(ExitCode::FAILURE)
        }
    }
}

/// Explains a refresh outcome in one line.
fn refresh_message(outcome: &RefreshOutcome, process_name: &str) -> String {
    match outcome {
        RefreshOutcome::SoftAssumed { channels } => format!(
            "Menu bar refresh requested on {channels} channel(s). \
             Log out if some items keep their old spacing."
        ),
        RefreshOutcome::HardRestarted => {
            format!("Restarted {process_name} to refresh the menu bar.")
        }
        RefreshOutcome::HardFailed { reason } => format!(
            "Could not refresh the menu bar ({reason}). The change applies at next login."
        ),
    }
}

#[derive(Serialize)]
struct ShowReport {
    levels: Levels,
    dirty: bool,
    phase: Phase,
    store_reachable: bool,
    profile: &'static OsProfile,
    font_size: f64,
    measurements: LayoutMeasurements,
}

/// Prints the persisted levels and their measurements.
pub(crate) fn run_show_command(config: &Config, json: bool) -> ExitCode {
    let loaded = block_on(async {
        let service = spawn_service(config);
        service.load().await
    });
    let snapshot = match loaded {
        Ok(Ok(snapshot)) => snapshot,
        Ok(Err(e)) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
        Err(code) => return code,
    };

    let ctx = PreviewContext::resolve(
        None,
        config.layout.os_major_version,
        None,
        config.layout.font_size,
    );
    let measurements = calculate_for_levels(
        snapshot.levels.spacing,
        snapshot.levels.padding,
        ctx.font_size,
        ctx.profile,
    );

    if json {
        return print_json(&ShowReport {
            levels: snapshot.levels,
            dirty: snapshot.dirty,
            phase: snapshot.phase,
            store_reachable: snapshot.store_reachable,
            profile: ctx.profile,
            font_size: ctx.font_size,
            measurements,
        });
    }

    println!(
        "Menu bar density (macOS {} {} profile, {:.1} pt font)",
        ctx.profile.major_version, ctx.profile.name, ctx.font_size
    );
    println!(
        "  Spacing:  {:>2}  ->  {:.1} pt",
        snapshot.levels.spacing, measurements.item_spacing
    );
    println!(
        "  Padding:  {:>2}  ->  {:.1} pt",
        snapshot.levels.padding, measurements.item_padding
    );
    if !snapshot.store_reachable {
        eprintln!("Warning: could not read the preference store; showing level 1 defaults.");
    }
    ExitCode::SUCCESS
}

/// Loads, edits and commits. `None` means the store already holds
/// `requested`; an unreachable store always goes through a commit.
async fn apply_levels(
    service: &PreferenceService,
    requested: Levels,
    force: bool,
) -> Result<Option<CommitReport>, ServiceError> {
    let loaded = service.load().await?;
    if loaded.store_reachable && loaded.levels == requested && !force {
        return Ok(None);
    }
    service.set_spacing(requested.spacing).await?;
    service.set_padding(requested.padding).await?;
    service.commit().await.map(Some)
}

/// Persists the level pair, refreshes the menu bar and optionally logs out.
pub(crate) fn run_apply_command(
    config: &Config,
    spacing: DensityLevel,
    padding: DensityLevel,
    force: bool,
    logout: bool,
    json: bool,
) -> ExitCode {
    let requested = Levels::new(spacing, padding);
    let applied = block_on(async {
        let service = spawn_service(config);
        apply_levels(&service, requested, force).await
    });
    let report = match applied {
        Ok(Ok(report)) => report,
        Ok(Err(e)) => {
            eprintln!("Error: {e}");
            eprintln!("Nothing was refreshed. Run the command again to retry.");
            return ExitCode::FAILURE;
        }
        Err(code) => return code,
    };

    let code = match (&report, json) {
        (Some(report), true) => print_json(report),
        (None, true) => print_json(&serde_json::json!({ "levels": requested, "refresh": null })),
        (Some(report), false) => {
            println!(
                "Applied spacing {}, padding {}",
                report.levels.spacing, report.levels.padding
            );
            println!(
                "{}",
                refresh_message(&report.refresh, &config.refresh.process_name)
            );
            ExitCode::SUCCESS
        }
        (None, false) => {
            println!(
                "Spacing {spacing} and padding {padding} are already applied. \
                 Use --force to write them again."
            );
            ExitCode::SUCCESS
        }
    };

    if logout {
        session::request_logout(&SystemRunner, &config.session.osascript_command);
    }
    code
}

async fn restore_levels(service: &PreferenceService) -> Result<RefreshOutcome, ServiceError> {
    service.load().await?;
    service.restore_defaults().await
}

/// Deletes both keys once `confirmed` is set, then refreshes the menu bar.
pub(crate) fn run_restore_command(config: &Config, confirmed: bool, json: bool) -> ExitCode {
    if !confirmed {
        eprintln!(
            "Restoring defaults deletes {} and {}. Re-run with --yes to confirm.",
            config.store.spacing_key, config.store.padding_key
        );
        return ExitCode::FAILURE;
    }

    let restored = block_on(async {
        let service = spawn_service(config);
        restore_levels(&service).await
    });
    let outcome = match restored {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(e)) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
        Err(code) => return code,
    };

    if json {
        return print_json(&serde_json::json!({ "restored": true, "refresh": outcome }));
    }
    println!("Restored system default spacing and padding");
    println!(
        "{}",
        refresh_message(&outcome, &config.refresh.process_name)
    );
    ExitCode::SUCCESS
}
