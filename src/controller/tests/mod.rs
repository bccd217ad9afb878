//! Tests for the preference controller and its async service.
//!
//! Tests are organized into categories:
//! - `load`: reading persisted levels, absence and degraded stores
//! - `dirty`: the pending-change flag across edits
//! - `commit`: persisting levels, write failures and refresh outcomes
//! - `restore`: deleting keys and resetting levels
//! - `service`: the tokio task front end and its snapshot channel

mod commit;

use super::{Levels, PreferenceController};
use crate::prefs::{MemoryStore, PreferenceKeys};
use crate::refresh::{Refresh, RefreshOutcome};
use menubar_layout::DensityLevel;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Refresh stub that counts invocations and returns a fixed outcome.
#[derive(Debug, Clone)]
pub(super) struct CountingRefresh {
    calls: Arc<AtomicUsize>,
    outcome: RefreshOutcome,
}

impl CountingRefresh {
    pub(super) fn soft() -> Self {
        Self::returning(RefreshOutcome::SoftAssumed { channels: 4 })
    }

    pub(super) fn returning(outcome: RefreshOutcome) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            outcome,
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Refresh for CountingRefresh {
    fn refresh(&self) -> RefreshOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

pub(super) type TestController = PreferenceController<Arc<MemoryStore>, CountingRefresh>;

/// Builds a controller over a shared in-memory store.
pub(super) fn controller_with(
    store: MemoryStore,
) -> (TestController, Arc<MemoryStore>, CountingRefresh) {
    let store = Arc::new(store);
    let refresher = CountingRefresh::soft();
    let controller =
        PreferenceController::new(store.clone(), refresher.clone(), PreferenceKeys::default());
    (controller, store, refresher)
}

/// Shorthand for a level known to be in range.
pub(super) fn level(value: u8) -> DensityLevel {
    DensityLevel::new(i64::from(value)).expect("test level in range")
}

pub(super) fn levels(spacing: u8, padding: u8) -> Levels {
    Levels::new(level(spacing), level(padding))
}
