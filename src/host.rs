//! Host facts feeding the layout preview: macOS version and menu bar font size.

use menubar_layout::{profile_for, OsProfile};
use sysinfo::System;

/// Detects the running macOS major version, e.g. `15` for "15.1".
///
/// Returns `None` off macOS or when the version string is unparsable, which
/// makes profile selection fall back to the newest profile.
pub fn os_major_version() -> Option<u32> {
    if !cfg!(target_os = "macos") {
        return None;
    }
    let version = System::os_version()?;
    let major = parse_major(&version);
    tracing::debug!("running on macOS {} (major {:?})", version, major);
    major
}

/// Extracts the major component from a dotted version string.
pub fn parse_major(version: &str) -> Option<u32> {
    version.trim().split('.').next()?.parse().ok()
}

/// Layout inputs resolved from CLI flags, config and the running host.
#[derive(Debug, Clone, Copy)]
pub struct PreviewContext {
    /// Profile the engine calculates against.
    pub profile: &'static OsProfile,
    /// Menu bar font size in points.
    pub font_size: f64,
}

impl PreviewContext {
    /// Resolves the profile and font size.
    ///
    /// Precedence is explicit argument, then config value, then detection
    /// (version) or the profile's default (font size). A font size that is not
    /// finite and positive is skipped with a warning, so the reported size is
    /// always the one the engine calculates with.
    pub fn resolve(
        os_version: Option<u32>,
        configured_os_version: Option<u32>,
        font_size: Option<f64>,
        configured_font_size: Option<f64>,
    ) -> Self {
        let major = os_version
            .or(configured_os_version)
            .or_else(os_major_version);
        let profile = profile_for(major);
        let font_size = usable_font_size(font_size, "--font-size")
            .or_else(|| usable_font_size(configured_font_size, "[layout] font_size"))
            .unwrap_or(profile.default_font_size);
        Self { profile, font_size }
    }
}

fn usable_font_size(size: Option<f64>, source: &str) -> Option<f64> {
    let size = size?;
    if size.is_finite() && size > 0.0 {
        return Some(size);
    }
    tracing::warn!("ignoring {} {}: font size must be finite and positive", source, size);
    None
}
