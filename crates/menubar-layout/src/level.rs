//! The 1-10 density level used for both spacing and selection padding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A density level in the inclusive range `1..=10`.
///
/// Level 1 is the tightest setting and doubles as the default when nothing
/// has been persisted. Level 10 reproduces the stock menu bar appearance.
/// The inner value can never leave the range: construction either rejects
/// ([`DensityLevel::new`]) or clamps ([`DensityLevel::clamped`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct DensityLevel(u8);

impl DensityLevel {
    /// Tightest level, also the default.
    pub const MIN: Self = Self(1);
    /// Widest level.
    pub const MAX: Self = Self(10);

    /// Builds a level, rejecting values outside `1..=10`.
    pub fn new(value: i64) -> Result<Self, LevelOutOfRange> {
        if (i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(LevelOutOfRange(value))
        }
    }

    /// Builds a level, pinning out-of-range values to the nearest bound.
    pub fn clamped(value: i64) -> Self {
        let pinned = value.clamp(i64::from(Self::MIN.0), i64::from(Self::MAX.0));
        if pinned != value {
            log::debug!("density level {} clamped to {}", value, pinned);
        }
        Self(pinned as u8)
    }

    /// Returns the raw level value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Maps the level onto `[0.0, 1.0]`: level 1 is 0.0 and level 10 is 1.0.
    pub fn normalized(self) -> f64 {
        f64::from(self.0 - Self::MIN.0) / f64::from(Self::MAX.0 - Self::MIN.0)
    }
}

impl Default for DensityLevel {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for DensityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for DensityLevel {
    type Error = LevelOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DensityLevel> for i64 {
    fn from(level: DensityLevel) -> Self {
        i64::from(level.0)
    }
}

/// Error for a level value outside `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOutOfRange(pub i64);

impl fmt::Display for LevelOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "density level {} is out of range ({}-{})",
            self.0,
            DensityLevel::MIN,
            DensityLevel::MAX
        )
    }
}

impl std::error::Error for LevelOutOfRange {}

/// Error type for parsing a [`DensityLevel`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLevelError {
    /// The input was not an integer.
    NotANumber(String),
    /// The input was an integer outside `1..=10`.
    OutOfRange(LevelOutOfRange),
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(s) => write!(f, "invalid density level: {}", s),
            Self::OutOfRange(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for DensityLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| ParseLevelError::NotANumber(s.to_string()))?;
        Self::new(value).map_err(ParseLevelError::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_bounds() {
        assert_eq!(DensityLevel::new(1), Ok(DensityLevel::MIN));
        assert_eq!(DensityLevel::new(10), Ok(DensityLevel::MAX));
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(DensityLevel::new(0), Err(LevelOutOfRange(0)));
        assert_eq!(DensityLevel::new(11), Err(LevelOutOfRange(11)));
        assert_eq!(DensityLevel::new(-3), Err(LevelOutOfRange(-3)));
    }

    #[test]
    fn clamped_pins_to_bounds() {
        assert_eq!(DensityLevel::clamped(0), DensityLevel::MIN);
        assert_eq!(DensityLevel::clamped(15), DensityLevel::MAX);
        assert_eq!(DensityLevel::clamped(i64::MIN), DensityLevel::MIN);
        assert_eq!(DensityLevel::clamped(7).get(), 7);
    }

    #[test]
    fn normalized_endpoints() {
        assert_eq!(DensityLevel::MIN.normalized(), 0.0);
        assert_eq!(DensityLevel::MAX.normalized(), 1.0);
        let mid = DensityLevel::clamped(4).normalized();
        assert!((mid - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn default_is_tightest() {
        assert_eq!(DensityLevel::default(), DensityLevel::MIN);
    }

    #[test]
    fn from_str_parses_and_trims() {
        assert_eq!(" 5 ".parse::<DensityLevel>().map(DensityLevel::get), Ok(5));
    }

    #[test]
    fn from_str_errors() {
        assert!(matches!(
            "abc".parse::<DensityLevel>(),
            Err(ParseLevelError::NotANumber(_))
        ));
        assert!(matches!(
            "12".parse::<DensityLevel>(),
            Err(ParseLevelError::OutOfRange(LevelOutOfRange(12)))
        ));
    }

    #[test]
    fn out_of_range_display_names_bounds() {
        let msg = LevelOutOfRange(42).to_string();
        assert!(msg.contains("42"));
        assert!(msg.contains("1-10"));
    }

    #[test]
    fn display_honors_width() {
        assert_eq!(format!("{:>2}", DensityLevel::MIN), " 1");
        assert_eq!(format!("{:>2}", DensityLevel::MAX), "10");
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let ok: DensityLevel = serde_json::from_str("3").expect("3 is a valid level");
        assert_eq!(ok.get(), 3);
        assert!(serde_json::from_str::<DensityLevel>("0").is_err());
        assert_eq!(serde_json::to_string(&DensityLevel::MAX).ok(), Some("10".to_string()));
    }
}
