//! `defaults`-backed store writing to the `-currentHost` global domain.
//!
//! Host-scoped keys let a laptop and a desktop signed into the same account
//! keep different densities.

use super::{PreferenceStore, StoreError};
use crate::process::CommandRunner;

/// Default location of the `defaults` tool.
pub const DEFAULTS_COMMAND: &str = "/usr/bin/defaults";

/// [`PreferenceStore`] driving the `defaults` command line tool.
#[derive(Debug, Clone)]
pub struct DefaultsStore<R> {
    runner: R,
    command: String,
}

impl<R: CommandRunner> DefaultsStore<R> {
    /// Creates a store that invokes `command` through `runner`.
    pub fn new(runner: R, command: impl Into<String>) -> Self {
        Self {
            runner,
            command: command.into(),
        }
    }
}

impl<R: CommandRunner> PreferenceStore for DefaultsStore<R> {
    fn read_int(&self, key: &str) -> Result<Option<i64>, StoreError> {
        let output = self
            .runner
            .run(&self.command, &["-currentHost", "read", "-g", key])
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if !output.success() {
            tracing::debug!("key {} does not exist in -currentHost domain", key);
            return Ok(None);
        }
        match output.stdout.trim().parse::<i64>() {
            Ok(value) => {
                tracing::debug!("read {}: {}", key, value);
                Ok(Some(value))
            }
            Err(_) => {
                tracing::debug!("key {} holds non-integer value {:?}", key, output.stdout.trim());
                Ok(None)
            }
        }
    }

    fn write_int(&self, key: &str, value: i64) -> Result<(), StoreError> {
        let value = value.to_string();
        let output = self
            .runner
            .run(
                &self.command,
                &["-currentHost", "write", "-g", key, "-int", &value],
            )
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if output.success() {
            tracing::debug!("wrote {} = {}", key, value);
            Ok(())
        } else {
            Err(StoreError::WriteFailed {
                key: key.to_string(),
                code: output.code,
            })
        }
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let output = self
            .runner
            .run(&self.command, &["-currentHost", "delete", "-g", key])
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if output.success() {
            tracing::debug!("deleted {}", key);
            return Ok(());
        }
        // `defaults delete` also exits non-zero for a missing key
        if self.exists(key)? {
            tracing::warn!("delete {} exited with {:?} and the key remains", key, output.code);
            return Err(StoreError::WriteFailed {
                key: key.to_string(),
                code: output.code,
            });
        }
        tracing::debug!("{} was already absent", key);
        Ok(())
    }
}

impl<R: CommandRunner> DefaultsStore<R> {
    /// Whether `key` is present, whatever type its value has.
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.runner
            .run(&self.command, &["-currentHost", "read", "-g", key])
            .map(|output| output.success())
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}
