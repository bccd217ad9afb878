//! Where tighter-menubar keeps its config file.
//!
//! A non-empty `$XDG_CONFIG_HOME` wins on every platform. Without it the
//! directory sits under `~/Library/Application Support` on macOS and under
//! `~/.config` elsewhere.

use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "tighter-menubar";
const CONFIG_FILE: &str = "config.toml";

/// Directory holding `config.toml`.
pub fn config_dir() -> PathBuf {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|base| !base.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(platform_config_dir)
        .join(APP_DIR)
}

/// Base config directory when no override is set. Relative `.config` if the
/// home directory is unknown.
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    let base = dirs::config_dir();
    #[cfg(not(target_os = "macos"))]
    let base = dirs::home_dir().map(|home| home.join(".config"));

    base.unwrap_or_else(|| PathBuf::from(".config"))
}

/// Default location of `config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Resolves a leading `~` in the `[logging] file` setting.
pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(&rest[1..]),
        _ => PathBuf::from(path),
    }
}

/// Creates `path` and its parents, owner-only on Unix.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}
