//! Menu bar layout calculations.
//!
//! Maps a pair of 1-10 density levels plus the live menu bar font size onto
//! the point values the menu bar renderer will use: the gap between adjacent
//! status items and the horizontal padding inside one item's highlight.
//!
//! Level 1 yields the OS profile's tight baseline. Level 10 adds the full
//! reference amount (10pt spacing, 8pt padding at the profile's default font
//! size), which reproduces the stock appearance. Levels in between
//! interpolate linearly and scale with the font size.
//!
//! ```
//! use menubar_layout::{calculate_layout, profile_for};
//!
//! let profile = profile_for(Some(15));
//! let m = calculate_layout(10, 10, profile.default_font_size, profile);
//! assert_eq!(m.item_spacing, 11.0);
//! assert_eq!(m.item_padding, 9.5);
//! ```

use serde::Serialize;

mod level;
mod profile;

pub use level::{DensityLevel, LevelOutOfRange, ParseLevelError};
pub use profile::{newest_profile, profile_for, OsProfile, PROFILES};

/// Spacing added at level 10 on top of the baseline, at the default font size.
pub const SPACING_REFERENCE: f64 = 10.0;

/// Padding added at level 10 on top of the baseline, at the default font size.
pub const PADDING_REFERENCE: f64 = 8.0;

/// Rendering measurements for one level pair. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutMeasurements {
    /// Gap between adjacent menu bar items, in points.
    pub item_spacing: f64,
    /// Horizontal padding inside one item's highlight region, in points.
    pub item_padding: f64,
}

/// Computes layout measurements for raw level values.
///
/// Levels outside `1..=10` are clamped rather than rejected: this runs once
/// per rendered frame and a slightly wrong preview beats a failed one.
/// A non-finite or non-positive font size is replaced by the profile's
/// default font size. Both outputs are floored at zero.
pub fn calculate_layout(
    spacing_level: i64,
    padding_level: i64,
    current_font_size: f64,
    profile: &OsProfile,
) -> LayoutMeasurements {
    calculate_for_levels(
        DensityLevel::clamped(spacing_level),
        DensityLevel::clamped(padding_level),
        current_font_size,
        profile,
    )
}

/// Computes layout measurements for already-validated levels.
pub fn calculate_for_levels(
    spacing: DensityLevel,
    padding: DensityLevel,
    current_font_size: f64,
    profile: &OsProfile,
) -> LayoutMeasurements {
    let font_size = if current_font_size.is_finite() && current_font_size > 0.0 {
        current_font_size
    } else {
        log::warn!(
            "unusable font size {}, using profile default {}",
            current_font_size,
            profile.default_font_size
        );
        profile.default_font_size
    };
    let font_scale = font_size / profile.default_font_size;

    let spacing = profile.base_spacing + spacing.normalized() * SPACING_REFERENCE * font_scale;
    let padding = profile.intrinsic_button_padding
        + profile.base_padding
        + padding.normalized() * PADDING_REFERENCE * font_scale;

    LayoutMeasurements {
        item_spacing: spacing.max(0.0),
        item_padding: padding.max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequoia() -> &'static OsProfile {
        profile_for(Some(15))
    }

    #[test]
    fn level_one_is_baseline() {
        let p = sequoia();
        let m = calculate_layout(1, 1, p.default_font_size, p);
        assert_eq!(m.item_spacing, p.base_spacing);
        assert_eq!(m.item_padding, p.intrinsic_button_padding + p.base_padding);
    }

    #[test]
    fn level_ten_adds_full_reference() {
        let p = sequoia();
        let m = calculate_layout(10, 10, p.default_font_size, p);
        assert_eq!(m.item_spacing, p.base_spacing + SPACING_REFERENCE);
        assert_eq!(
            m.item_padding,
            p.intrinsic_button_padding + p.base_padding + PADDING_REFERENCE
        );
    }

    #[test]
    fn out_of_range_levels_are_clamped() {
        let p = sequoia();
        assert_eq!(
            calculate_layout(0, -4, 14.0, p),
            calculate_layout(1, 1, 14.0, p)
        );
        assert_eq!(
            calculate_layout(15, 99, 14.0, p),
            calculate_layout(10, 10, 14.0, p)
        );
    }

    #[test]
    fn font_size_scales_the_interpolated_part_only() {
        let p = sequoia();
        let m = calculate_layout(10, 1, p.default_font_size * 2.0, p);
        assert_eq!(m.item_spacing, p.base_spacing + SPACING_REFERENCE * 2.0);
        // padding level 1 has no interpolated part to scale
        assert_eq!(m.item_padding, p.intrinsic_button_padding + p.base_padding);
    }

    #[test]
    fn unusable_font_size_uses_profile_default() {
        let p = sequoia();
        let expected = calculate_layout(6, 6, p.default_font_size, p);
        assert_eq!(calculate_layout(6, 6, f64::NAN, p), expected);
        assert_eq!(calculate_layout(6, 6, -12.0, p), expected);
        assert_eq!(calculate_layout(6, 6, 0.0, p), expected);
    }

    #[test]
    fn measurements_serialize_with_snake_case_fields() {
        let p = sequoia();
        let json = serde_json::to_value(calculate_layout(1, 1, 14.0, p)).expect("serializable");
        assert_eq!(json["item_spacing"], 1.0);
        assert_eq!(json["item_padding"], 1.5);
    }
}
