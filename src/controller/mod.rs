//! Preference controller: load, edit, commit and restore the density levels.
//!
//! [`PreferenceController`] is the synchronous state machine. Every store and
//! refresh call it makes blocks, so interactive hosts drive it through
//! [`PreferenceService`], which owns the controller on a single task and runs
//! the blocking work off the async executor.
//!
//! ```text
//! Uninitialized -> Loaded <-> Dirty -> Committing -> Loaded
//!                  Loaded -> RestoringDefaults -> Loaded
//! ```

use menubar_layout::DensityLevel;
use serde::Serialize;
use thiserror::Error;

use crate::prefs::{PreferenceKeys, PreferenceStore, StoreError};
use crate::refresh::{Refresh, RefreshOutcome};

mod service;

pub use service::{PreferenceService, ServiceError};

#[cfg(test)]
mod tests;

/// Lifecycle phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing has been loaded yet.
    Uninitialized,
    /// In-memory levels match the store.
    Loaded,
    /// In-memory levels have unsaved edits.
    Dirty,
    /// A commit is writing to the store.
    Committing,
    /// A restore is deleting the keys.
    RestoringDefaults,
}

/// The spacing and padding level pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Levels {
    /// Inter-item spacing level.
    pub spacing: DensityLevel,
    /// Selection padding level.
    pub padding: DensityLevel,
}

impl Levels {
    /// Creates a level pair.
    pub fn new(spacing: DensityLevel, padding: DensityLevel) -> Self {
        Self { spacing, padding }
    }
}

/// Point-in-time view of the controller, published to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Current in-memory levels.
    pub levels: Levels,
    /// Whether there are unsaved edits.
    pub dirty: bool,
    /// Current lifecycle phase.
    pub phase: Phase,
    /// Whether the last load, commit or restore reached the store. `false`
    /// means the levels are a fallback, not what the store holds.
    pub store_reachable: bool,
}

/// Result of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitReport {
    /// Levels now persisted in the store.
    pub levels: Levels,
    /// What the refresh attempt did.
    pub refresh: RefreshOutcome,
}

/// Errors from commit and restore.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// There are no pending edits to commit.
    #[error("No pending changes to apply")]
    NothingToCommit,

    /// The store rejected or could not perform the change.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Owns the density levels and their persistence lifecycle.
pub struct PreferenceController<S, F> {
    store: S,
    refresher: F,
    keys: PreferenceKeys,
    levels: Levels,
    phase: Phase,
    store_reachable: bool,
}

impl<S: PreferenceStore, F: Refresh> PreferenceController<S, F> {
    /// Creates an uninitialized controller.
    pub fn new(store: S, refresher: F, keys: PreferenceKeys) -> Self {
        Self {
            store,
            refresher,
            keys,
            levels: Levels::default(),
            phase: Phase::Uninitialized,
            store_reachable: false,
        }
    }

    /// Returns the current in-memory levels.
    pub fn levels(&self) -> Levels {
        self.levels
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` when there are unsaved edits.
    pub fn is_dirty(&self) -> bool {
        self.phase == Phase::Dirty
    }

    /// Returns a snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            levels: self.levels,
            dirty: self.is_dirty(),
            phase: self.phase,
            store_reachable: self.store_reachable,
        }
    }

    /// Returns `false` until the store has answered a load, commit or restore.
    pub fn store_reachable(&self) -> bool {
        self.store_reachable
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Reads both levels from the store, discarding unsaved edits.
    ///
    /// A missing key reads as level 1. Stored values outside `1..=10` are
    /// clamped. Read failures never surface: an unreachable store loads as
    /// level 1 with [`store_reachable`](Self::store_reachable) cleared.
    pub fn load_current_settings(&mut self) -> Levels {
        let spacing = self.read_level(&self.keys.spacing);
        let padding = self.read_level(&self.keys.padding);
        self.store_reachable = spacing.is_ok() && padding.is_ok();
        let (spacing, padding) = (spacing.unwrap_or(None), padding.unwrap_or(None));

        self.levels = match (spacing, padding) {
            (None, None) => {
                tracing::info!("no custom settings found, using default values");
                Levels::default()
            }
            (spacing, padding) => {
                let levels = Levels::new(
                    spacing.map(DensityLevel::clamped).unwrap_or_default(),
                    padding.map(DensityLevel::clamped).unwrap_or_default(),
                );
                tracing::info!(
                    "loaded existing settings: spacing {}, padding {}",
                    levels.spacing,
                    levels.padding
                );
                levels
            }
        };
        self.phase = Phase::Loaded;
        self.levels
    }

    fn read_level(&self, key: &str) -> Result<Option<i64>, StoreError> {
        self.store.read_int(key).map_err(|e| {
            tracing::warn!("treating {} as absent: {}", key, e);
            e
        })
    }

    /// Flags unsaved edits. No-op when already dirty.
    pub fn mark_dirty(&mut self) {
        if self.phase != Phase::Dirty {
            self.phase = Phase::Dirty;
        }
    }

    /// Sets the spacing level and marks the controller dirty.
    pub fn set_spacing(&mut self, level: DensityLevel) {
        tracing::debug!("spacing changed to {}", level);
        self.levels.spacing = level;
        self.mark_dirty();
    }

    /// Sets the selection padding level and marks the controller dirty.
    pub fn set_padding(&mut self, level: DensityLevel) {
        tracing::debug!("selection padding changed to {}", level);
        self.levels.padding = level;
        self.mark_dirty();
    }

    /// Persists `levels`, then refreshes the menu bar.
    ///
    /// Levels that differ from the in-memory ones count as an edit. Fails
    /// with [`ControllerError::NothingToCommit`] when nothing is pending.
    /// Both keys are written before any refresh is attempted. On a store
    /// failure the edits stay pending so the commit can be retried. Once
    /// both writes land the edits are cleared, whatever the refresh does.
    pub fn commit(&mut self, levels: Levels) -> Result<CommitReport, ControllerError> {
        if levels != self.levels {
            self.levels = levels;
            self.mark_dirty();
        }
        if !self.is_dirty() {
            return Err(ControllerError::NothingToCommit);
        }

        self.phase = Phase::Committing;
        tracing::info!(
            "writing defaults: spacing {}, padding {}",
            levels.spacing,
            levels.padding
        );
        if let Err(e) = self.persist(levels) {
            tracing::warn!("commit failed, changes remain pending: {}", e);
            self.phase = Phase::Dirty;
            return Err(e.into());
        }
        self.phase = Phase::Loaded;
        self.store_reachable = true;

        let refresh = self.refresher.refresh();
        Ok(CommitReport { levels, refresh })
    }

    fn persist(&self, levels: Levels) -> Result<(), StoreError> {
        self.store
            .write_int(&self.keys.spacing, levels.spacing.into())?;
        self.store
            .write_int(&self.keys.padding, levels.padding.into())
    }

    /// Deletes both keys, resets the levels to 1, then refreshes.
    ///
    /// On a store failure the previous levels and phase are kept.
    pub fn restore_defaults(&mut self) -> Result<RefreshOutcome, ControllerError> {
        let previous = self.phase;
        self.phase = Phase::RestoringDefaults;
        tracing::info!("deleting custom defaults to restore system behavior");

        let deleted = self
            .store
            .delete(&self.keys.spacing)
            .and_then(|()| self.store.delete(&self.keys.padding));
        if let Err(e) = deleted {
            tracing::warn!("restore failed: {}", e);
            self.phase = previous;
            return Err(e.into());
        }

        self.levels = Levels::default();
        self.phase = Phase::Loaded;
        self.store_reachable = true;
        Ok(self.refresher.refresh())
    }
}
