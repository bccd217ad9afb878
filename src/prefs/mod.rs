//! Host-scoped preference storage for the two density keys.
//!
//! [`PreferenceStore`] is the seam between the controller and the host's
//! configuration store. [`DefaultsStore`] talks to the real thing through
//! `defaults -currentHost ... -g`; [`MemoryStore`] keeps values in process
//! for tests and embedding hosts.

use thiserror::Error;

mod defaults;
mod memory;

pub use defaults::{DefaultsStore, DEFAULTS_COMMAND};
pub use memory::MemoryStore;

/// Default key for inter-item spacing.
pub const SPACING_KEY: &str = "NSStatusItemSpacing";

/// Default key for per-item selection padding.
pub const PADDING_KEY: &str = "NSStatusItemSelectionPadding";

/// Errors reported by a [`PreferenceStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be queried or modified at all.
    #[error("Preference store unavailable: {0}")]
    Unavailable(String),

    /// A write reached the store but was rejected.
    #[error("Failed to write {key} (exit status {})", code.map(|c| c.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    WriteFailed {
        /// Key that could not be written.
        key: String,
        /// Exit code of the store command, if any.
        code: Option<i32>,
    },
}

/// Integer key-value store in the host-scoped global namespace.
pub trait PreferenceStore: Send {
    /// Reads `key`. `Ok(None)` means the key is absent or not an integer.
    fn read_int(&self, key: &str) -> Result<Option<i64>, StoreError>;

    /// Writes `value` under `key`.
    fn write_int(&self, key: &str, value: i64) -> Result<(), StoreError>;

    /// Deletes `key`. Deleting an absent key succeeds.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + Sync + ?Sized> PreferenceStore for std::sync::Arc<S> {
    fn read_int(&self, key: &str) -> Result<Option<i64>, StoreError> {
        (**self).read_int(key)
    }

    fn write_int(&self, key: &str, value: i64) -> Result<(), StoreError> {
        (**self).write_int(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        (**self).delete(key)
    }
}

/// Names of the two persisted keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceKeys {
    /// Key holding the spacing level.
    pub spacing: String,
    /// Key holding the selection padding level.
    pub padding: String,
}

impl Default for PreferenceKeys {
    fn default() -> Self {
        Self {
            spacing: SPACING_KEY.to_string(),
            padding: PADDING_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_match_host_names() {
        let keys = PreferenceKeys::default();
        assert_eq!(keys.spacing, "NSStatusItemSpacing");
        assert_eq!(keys.padding, "NSStatusItemSelectionPadding");
    }

    #[test]
    fn display_write_failed_with_code() {
        let err = StoreError::WriteFailed {
            key: SPACING_KEY.to_string(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("NSStatusItemSpacing"));
        assert!(msg.contains("exit status 1"));
    }

    #[test]
    fn display_write_failed_without_code() {
        let err = StoreError::WriteFailed {
            key: PADDING_KEY.to_string(),
            code: None,
        };
        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn display_unavailable() {
        let err = StoreError::Unavailable("defaults missing".to_string());
        assert!(err.to_string().contains("defaults missing"));
    }
}
