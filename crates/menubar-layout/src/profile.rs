//! Per-OS baseline constants for the layout engine.
//!
//! The table is keyed by macOS major version and must stay sorted ascending.
//! Lookups that miss (unknown or undetectable version) resolve to the last,
//! newest entry.

use serde::Serialize;

/// Empirically measured menu bar baselines for one macOS release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OsProfile {
    /// macOS major version this entry applies to.
    pub major_version: u32,
    /// Marketing name of the release.
    pub name: &'static str,
    /// Item spacing at level 1, in points.
    pub base_spacing: f64,
    /// Selection padding at level 1, in points (excluding intrinsic padding).
    pub base_padding: f64,
    /// Menu bar font size the constants were measured at.
    pub default_font_size: f64,
    /// Padding every status item button carries regardless of settings.
    pub intrinsic_button_padding: f64,
}

/// Known profiles, ascending by `major_version`.
pub static PROFILES: &[OsProfile] = &[
    OsProfile {
        major_version: 14,
        name: "Sonoma",
        base_spacing: 1.0,
        base_padding: 0.5,
        default_font_size: 14.0,
        intrinsic_button_padding: 1.0,
    },
    OsProfile {
        major_version: 15,
        name: "Sequoia",
        base_spacing: 1.0,
        base_padding: 0.5,
        default_font_size: 14.0,
        intrinsic_button_padding: 1.0,
    },
];

/// Returns the newest profile in the table.
pub fn newest_profile() -> &'static OsProfile {
    &PROFILES[PROFILES.len() - 1]
}

/// Selects the profile for `major_version`, falling back to the newest entry.
pub fn profile_for(major_version: Option<u32>) -> &'static OsProfile {
    match major_version.and_then(|v| PROFILES.iter().find(|p| p.major_version == v)) {
        Some(profile) => profile,
        None => {
            let fallback = newest_profile();
            log::debug!(
                "no layout profile for macOS {:?}, using {} ({})",
                major_version,
                fallback.name,
                fallback.major_version
            );
            fallback
        }
    }
}
