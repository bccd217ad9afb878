//! Committing levels to the store.

use super::{controller_with, level, levels, CountingRefresh};
use crate::controller::{ControllerError, Phase, PreferenceController};
use crate::prefs::{MemoryStore, PreferenceKeys, StoreError, PADDING_KEY, SPACING_KEY};
use crate::refresh::RefreshOutcome;
use std::sync::Arc;

#[test]
fn test_commit_then_load_round_trips() {
    let (mut controller, store, _) = controller_with(MemoryStore::new());
    controller.load_current_settings();

    let report = controller.commit(levels(5, 7)).expect("commit succeeds");
    assert_eq!(report.levels, levels(5, 7));
    assert_eq!(store.get(SPACING_KEY), Some(5));
    assert_eq!(store.get(PADDING_KEY), Some(7));

    assert_eq!(controller.load_current_settings(), levels(5, 7));
}

#[test]
fn test_scenario_set_spacing_then_commit() {
    let (mut controller, store, refresher) = controller_with(MemoryStore::new());
    assert_eq!(controller.load_current_settings(), levels(1, 1));
    assert!(!controller.is_dirty());

    controller.set_spacing(level(3));
    assert!(controller.is_dirty());

    let current = controller.levels();
    controller.commit(current).expect("commit succeeds");
    assert_eq!(store.get(SPACING_KEY), Some(3));
    assert_eq!(store.get(PADDING_KEY), Some(1));
    assert!(!controller.is_dirty());
    assert_eq!(controller.phase(), Phase::Loaded);
    assert_eq!(refresher.calls(), 1);
}

#[test]
fn test_commit_clean_state_is_rejected() {
    let (mut controller, store, refresher) = controller_with(MemoryStore::new());
    controller.load_current_settings();

    let err = controller.commit(levels(1, 1)).unwrap_err();
    assert!(matches!(err, ControllerError::NothingToCommit));
    assert!(!store.contains(SPACING_KEY));
    assert_eq!(refresher.calls(), 0);
}

#[test]
fn test_commit_with_new_levels_counts_as_edit() {
    let (mut controller, _, _) = controller_with(MemoryStore::new());
    controller.load_current_settings();
    assert!(controller.commit(levels(2, 2)).is_ok());
}

#[test]
fn test_forced_commit_of_unchanged_levels() {
    let (mut controller, store, _) = controller_with(MemoryStore::new());
    controller.load_current_settings();
    controller.mark_dirty();
    controller.commit(levels(1, 1)).expect("dirty state commits");
    assert_eq!(store.get(SPACING_KEY), Some(1));
    assert_eq!(store.get(PADDING_KEY), Some(1));
}

#[test]
fn test_write_failure_keeps_changes_pending() {
    let (mut controller, store, refresher) = controller_with(MemoryStore::new());
    controller.load_current_settings();
    controller.set_spacing(level(6));
    store.set_offline(true);

    let current = controller.levels();
    let err = controller.commit(current).unwrap_err();
    assert!(matches!(
        err,
        ControllerError::Store(StoreError::Unavailable(_))
    ));
    assert!(controller.is_dirty());
    assert_eq!(controller.levels(), levels(6, 1));
    assert_eq!(refresher.calls(), 0, "no refresh before both writes land");

    store.set_offline(false);
    controller.commit(current).expect("retry succeeds");
    assert!(!controller.is_dirty());
    assert_eq!(store.get(SPACING_KEY), Some(6));
}

#[test]
fn test_refresh_outcome_does_not_affect_dirty_flag() {
    let store = Arc::new(MemoryStore::new());
    let refresher = CountingRefresh::returning(RefreshOutcome::HardFailed {
        reason: "killall exited with status 1".to_string(),
    });
    let mut controller =
        PreferenceController::new(store.clone(), refresher.clone(), PreferenceKeys::default());
    controller.load_current_settings();

    let report = controller.commit(levels(4, 4)).expect("persisted");
    assert!(matches!(report.refresh, RefreshOutcome::HardFailed { .. }));
    assert!(!controller.is_dirty());
    assert_eq!(store.get(SPACING_KEY), Some(4));
}

#[test]
fn test_commit_uses_configured_keys() {
    let store = Arc::new(MemoryStore::new());
    let keys = PreferenceKeys {
        spacing: "TestSpacing".to_string(),
        padding: "TestPadding".to_string(),
    };
    let mut controller = PreferenceController::new(store.clone(), CountingRefresh::soft(), keys);
    controller.load_current_settings();
    controller.commit(levels(8, 2)).expect("commit succeeds");

    assert_eq!(store.get("TestSpacing"), Some(8));
    assert_eq!(store.get("TestPadding"), Some(2));
    assert!(!store.contains(SPACING_KEY));
}

#[test]
fn test_successful_commit_marks_store_reachable() {
    let store = MemoryStore::new();
    store.set_offline(true);
    let (mut controller, store, _) = controller_with(store);
    controller.load_current_settings();
    assert!(!controller.store_reachable());

    store.set_offline(false);
    controller.commit(levels(2, 2)).expect("commit succeeds");
    assert!(controller.store_reachable());
}
