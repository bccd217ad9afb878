//! tighter-menubar library
//!
//! Tunes the density of the macOS menu bar: the spacing between status items
//! and the selection padding inside each one. The two levels are persisted as
//! host-scoped global defaults and the menu bar host is nudged to pick them up.
//!
//! The pure layout math lives in the [`menubar_layout`] crate and is
//! re-exported here. This crate owns everything that touches the host:
//! the preference store, the refresh protocol, logout, host probing and the
//! configuration that names the commands involved.
//!
//! # Platform Support
//!
//! The store and refresh commands only exist on macOS. Everything runs on
//! any Unix, which is how the test suites drive it with stand-in commands.

pub use menubar_layout as layout;

/// Configuration file schema, loading and XDG path resolution.
pub mod config;

/// Preference controller state machine and its async service.
pub mod controller;

/// Host OS version detection and preview input resolution.
pub mod host;

/// Tracing subscriber setup.
pub mod logging;

/// Host-scoped preference storage.
pub mod prefs;

/// External command execution.
pub mod process;

/// Menu bar refresh after a preference change.
pub mod refresh;

/// Session logout request.
pub mod session;
