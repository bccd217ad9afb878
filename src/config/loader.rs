//! Reads `config.toml`, either from an explicit `--config` path or from the
//! per-user config directory.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::error::ConfigError;
use crate::config::schema::Config;
use crate::config::xdg;

/// Entry points for reading the config file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `explicit` when given, otherwise the per-user file.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => Self::load_default(),
        }
    }

    /// Reads and parses `path`. A missing file is an error here.
    pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::ReadError {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Self::parse_toml(&content, path)
    }

    /// Reads the per-user file. No file means built-in defaults.
    pub fn load_default() -> Result<Config, ConfigError> {
        let path = xdg::config_path();
        if !path.exists() {
            tracing::debug!("no config at {}, using built-in defaults", path.display());
            return Ok(Config::default());
        }
        Self::load_from_path(&path)
    }

    fn parse_toml(content: &str, path: &Path) -> Result<Config, ConfigError> {
        toml::from_str(content).map_err(|e| {
            let (line, column) = e
                .span()
                .map_or((0, 0), |span| position(content, span.start));
            ConfigError::ParseError {
                path: path.to_path_buf(),
                line,
                column,
                message: e.message().to_string(),
            }
        })
    }
}

/// One-based line and character column of byte `offset` in `content`.
fn position(content: &str, offset: usize) -> (usize, usize) {
    let before = &content[..offset];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let line = before.matches('\n').count() + 1;
    (line, before[line_start..].chars().count() + 1)
}
