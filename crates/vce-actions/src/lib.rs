//! vce-actions library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does vce-actions do? (for beginners)
//!
//! A voice-command framework triggers actions by name: "deploy heat sink"
//! maps to `DeployHeatSinkAction`.  This crate builds those actions from the
//! player's own Elite Dangerous bindings, so the framework presses whatever
//! key the player actually assigned in-game.
//!
//! 1. Locate the newest `Custom.<version>.binds` file (or take an override).
//! 2. Extract keyboard/mouse bindings per command with `vce_core`.
//! 3. Translate each game key to an automation-layer key name.
//! 4. Register a [`application::press_action::PressAction`] per command in an
//!    [`application::catalog::ActionCatalog`].
//!
//! A broken binding for one command is logged and skipped; a missing binds
//! file yields an empty catalog whose lookups explain what to configure.

/// Application layer: actions, catalog, conditions.
pub mod application;

/// Infrastructure layer: binds file discovery, settings, mock executor.
pub mod infrastructure;

pub use application::catalog::{ActionCatalog, LookupError, BINDINGS_FILE_ENV};
pub use application::condition::{WindowFocusProbe, WindowIsActive};
pub use application::execute::{PressError, PressExecutor};
pub use application::press_action::PressAction;

use tracing::warn;

use crate::infrastructure::{bindings_file, config};

/// Builds the catalog from the user's settings file and environment.
///
/// An unreadable settings file falls back to defaults with a warning.  Binds
/// file problems never fail here; see [`bindings_file::load_catalog`].
pub fn load_default_catalog() -> ActionCatalog {
    let settings = config::load_config().unwrap_or_else(|e| {
        warn!(error = %e, "failed to load settings, using defaults");
        config::AppConfig::default()
    });
    bindings_file::load_catalog(&settings.with_env_overrides().bindings)
}
