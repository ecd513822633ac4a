//! # vce-core
//!
//! Shared library for Voice Commander Elite containing the binding-file
//! extractor, the device/key translation tables, and the fixed catalog of
//! in-game command names.
//!
//! This crate has zero dependencies on the filesystem, OS input APIs, or the
//! automation framework.  It takes binding document text in and hands back
//! typed records and translated key names.
//!
//! # Architecture overview (for beginners)
//!
//! Elite Dangerous stores the player's control setup in an XML "binds" file.
//! Each child of the root element is one in-game command (for example
//! `PrimaryFire`) with up to two physical inputs attached to it: a `Primary`
//! and a `Secondary` slot.  Voice Commander Elite reads that file and turns
//! every keyboard- or mouse-bound command into a "press this key" action that
//! a voice-command framework can trigger by name.
//!
//! This crate (`vce-core`) is the pure foundation.  It defines:
//!
//! - **`binding`** – The normalized [`BindingRecord`] plus the extractor that
//!   walks a binds document and resolves the Primary/Secondary slot per command.
//!
//! - **`keymap`** – Translation tables that convert the game's internal key
//!   identifiers (`Key_Space`, `Mouse_1`, ...) into the automation framework's
//!   key names (`Space`, `LButton`, ...).
//!
//! - **`commands`** – The ordered list of every command name the game defines,
//!   used to tell "known but unbound" apart from "never heard of it".

pub mod binding;
pub mod commands;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `vce_core::BindingRecord` instead of `vce_core::binding::BindingRecord`.
pub use binding::extract::{extract_bindings, ExtractError};
pub use binding::{BindingDevice, BindingRecord};
pub use commands::{is_known_command, COMMANDS};
pub use keymap::{KeyMapper, KeyTarget, UnsupportedBinding};
