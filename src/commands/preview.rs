//! `tmb preview` and `tmb profiles`.

use std::process::ExitCode;

use serde::Serialize;
use tighter_menubar::config::schema::Config;
use tighter_menubar::host::PreviewContext;
use tighter_menubar::layout::{
    calculate_for_levels, DensityLevel, LayoutMeasurements, OsProfile, PROFILES,
};

use super::print_json;

#[derive(Serialize)]
struct PreviewReport {
    spacing: DensityLevel,
    padding: DensityLevel,
    profile: &'static OsProfile,
    font_size: f64,
    measurements: LayoutMeasurements,
}

/// Prints the measurements a level pair would render as.
pub(crate) fn run_preview_command(
    config: &Config,
    spacing: DensityLevel,
    padding: DensityLevel,
    font_size: Option<f64>,
    os_version: Option<u32>,
    json: bool,
) -> ExitCode {
    let ctx = PreviewContext::resolve(
        os_version,
        config.layout.os_major_version,
        font_size,
        config.layout.font_size,
    );
    let measurements = calculate_for_levels(spacing, padding, ctx.font_size, ctx.profile);

    if json {
        return print_json(&PreviewReport {
            spacing,
            padding,
            profile: ctx.profile,
            font_size: ctx.font_size,
            measurements,
        });
    }

    println!(
        "Preview for spacing {}, padding {} (macOS {} {} profile, {:.1} pt font)",
        spacing, padding, ctx.profile.major_version, ctx.profile.name, ctx.font_size
    );
    println!("  Item spacing: {:.1} pt", measurements.item_spacing);
    println!("  Item padding: {:.1} pt", measurements.item_padding);
    ExitCode::SUCCESS
}

/// Prints the profile table, marking the one this host resolves to.
pub(crate) fn run_profiles_command(config: &Config, json: bool) -> ExitCode {
    let selected = PreviewContext::resolve(None, config.layout.os_major_version, None, None)
        .profile
        .major_version;

    if json {
        return print_json(&serde_json::json!({
            "selected": selected,
            "profiles": PROFILES,
        }));
    }

    println!("   macOS  name       spacing  padding  font  intrinsic");
    for profile in PROFILES {
        let marker = if profile.major_version == selected { '*' } else { ' ' };
        println!(
            "{} {:>5}  {:<9}  {:>7.1}  {:>7.1}  {:>4.1}  {:>9.1}",
            marker,
            profile.major_version,
            profile.name,
            profile.base_spacing,
            profile.base_padding,
            profile.default_font_size,
            profile.intrinsic_button_padding
        );
    }
    ExitCode::SUCCESS
}
