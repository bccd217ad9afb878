//! Default configuration template and file creation utilities.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# tighter-menubar configuration
#
# All values shown below are the built-in defaults.
# Location: $XDG_CONFIG_HOME/tighter-menubar/config.toml

# ==============================================================================
# Preference store
# ==============================================================================

[store]

# Tool used to read, write and delete the host-scoped global defaults.
defaults_command = "/usr/bin/defaults"

# Keys read by the menu bar when it starts.
spacing_key = "NSStatusItemSpacing"
padding_key = "NSStatusItemSelectionPadding"

# ==============================================================================
# Menu bar refresh
# ==============================================================================

[refresh]

# Posted as `<notify_command> -p <channel>` for every channel after a change.
# Delivery is not confirmed; the refresh is assumed to work once posted.
notify_command = "/usr/bin/notifyutil"
channels = [
    "com.apple.controlcenter.settingschanged",
    "com.apple.systemuiserver.spacingchanged",
    "com.apple.menubar.settingschanged",
    "NSStatusItemSpacingChanged",
]

# Used only when the notifier cannot be launched: the menu bar host is
# terminated by name and relaunched by the system.
killall_command = "/usr/bin/killall"
process_name = "ControlCenter"

# ==============================================================================
# Session
# ==============================================================================

[session]

# Used by `tmb logout` and `tmb apply --logout`.
osascript_command = "/usr/bin/osascript"

# ==============================================================================
# Layout preview
# ==============================================================================

[layout]

# Menu bar font size in points. Unset uses the OS profile default (14.0).
# font_size = 14.0

# Force the OS profile instead of detecting the running macOS version.
# os_major_version = 15

# ==============================================================================
# Logging
# ==============================================================================

[logging]

# Options: "error", "warn", "info", "debug", "trace"
# The TMB_LOG environment variable overrides this.
level = "warn"

# Path to log file. Empty string means stderr.
file = ""
"#;

/// Creates (or force-overwrites) the default config file.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    create_config_at(&xdg::config_path(), force)
}

/// Same as [`create_default_config`] for an explicit path.
pub fn create_config_at(path: &Path, force: bool) -> Result<PathBuf, ConfigError> {
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(path)?;
    Ok(path.to_path_buf())
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent.filter(|p| !p.exists()) {
        xdg::ensure_dir(parent).map_err(write_error)?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_error)?;
    }

    Ok(())
}
