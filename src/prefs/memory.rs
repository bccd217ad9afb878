//! In-process store for tests and hosts without a `defaults` tool.

use super::{PreferenceStore, StoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// [`PreferenceStore`] keeping values in a `HashMap`.
///
/// Can be switched offline to simulate an unreachable host store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, i64>>,
    offline: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty, reachable store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, i64)>) -> Self {
        let store = Self::new();
        {
            let mut values = store.lock();
            for (key, value) in entries {
                values.insert(key.to_string(), value);
            }
        }
        store
    }

    /// Makes every subsequent operation fail with [`StoreError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Returns the raw stored value, bypassing the offline switch.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.lock().get(key).copied()
    }

    /// Returns `true` if `key` is present, bypassing the offline switch.
    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, i64>> {
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("memory store is offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn read_int(&self, key: &str) -> Result<Option<i64>, StoreError> {
        self.check_online()?;
        Ok(self.get(key))
    }

    fn write_int(&self, key: &str, value: i64) -> Result<(), StoreError> {
        self.check_online()?;
        self.lock().insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.check_online()?;
        self.lock().remove(key);
        Ok(())
    }
}
