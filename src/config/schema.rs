//! TOML configuration schema types for tighter-menubar.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so an empty or partial file is valid. The defaults
//! target a stock macOS install; the command paths exist mainly so the tool
//! can be pointed at wrappers or test doubles.

use serde::{Deserialize, Serialize};

use crate::prefs::{PreferenceKeys, DEFAULTS_COMMAND, PADDING_KEY, SPACING_KEY};

/// Default notification posting tool.
pub const NOTIFY_COMMAND: &str = "/usr/bin/notifyutil";

/// Default tool used to restart the menu bar host.
pub const KILLALL_COMMAND: &str = "/usr/bin/killall";

/// Process that renders the menu bar status items.
pub const MENU_BAR_PROCESS: &str = "ControlCenter";

/// Default AppleScript runner used for the logout request.
pub const OSASCRIPT_COMMAND: &str = "/usr/bin/osascript";

/// Channels the menu bar host may listen on, posted in this order.
pub const REFRESH_CHANNELS: [&str; 4] = [
    "com.apple.controlcenter.settingschanged",
    "com.apple.systemuiserver.spacingchanged",
    "com.apple.menubar.settingschanged",
    "NSStatusItemSpacingChanged",
];

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// ```toml
/// [store]
/// [refresh]
/// [session]
/// [layout]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where the density keys are persisted.
    pub store: StoreConfig,
    /// How the menu bar is refreshed after a change.
    pub refresh: RefreshConfig,
    /// Logout request settings.
    pub session: SessionConfig,
    /// Preview calculation overrides.
    pub layout: LayoutConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// `[store]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the `defaults` tool.
    pub defaults_command: String,
    /// Key holding the spacing level.
    pub spacing_key: String,
    /// Key holding the selection padding level.
    pub padding_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            defaults_command: DEFAULTS_COMMAND.to_string(),
            spacing_key: SPACING_KEY.to_string(),
            padding_key: PADDING_KEY.to_string(),
        }
    }
}

impl StoreConfig {
    /// Returns the configured key names.
    pub fn keys(&self) -> PreferenceKeys {
        PreferenceKeys {
            spacing: self.spacing_key.clone(),
            padding: self.padding_key.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Refresh
// ---------------------------------------------------------------------------

/// `[refresh]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RefreshConfig {
    /// Tool invoked as `<notify_command> -p <channel>` for each channel.
    pub notify_command: String,
    /// Notification channels, posted in order.
    pub channels: Vec<String>,
    /// Tool invoked as `<killall_command> <process_name>` as a fallback.
    pub killall_command: String,
    /// Menu bar host process name.
    pub process_name: String,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            notify_command: NOTIFY_COMMAND.to_string(),
            channels: REFRESH_CHANNELS.iter().map(|c| c.to_string()).collect(),
            killall_command: KILLALL_COMMAND.to_string(),
            process_name: MENU_BAR_PROCESS.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// `[session]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Path to `osascript`.
    pub osascript_command: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            osascript_command: OSASCRIPT_COMMAND.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// `[layout]` section. Both fields are optional overrides.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Menu bar font size in points. Unset means the profile default.
    pub font_size: Option<f64>,
    /// macOS major version to pick the profile for. Unset means detect.
    pub os_major_version: Option<u32>,
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// `[logging]` section.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Verbosity when `TMB_LOG` is not set.
    pub level: LogLevel,
    /// Path to log file. Empty string means stderr.
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            file: String::new(),
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings (default).
    Warn,
    /// Informational messages.
    Info,
    /// Debug-level detail, including every external command.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Returns the `EnvFilter` directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
