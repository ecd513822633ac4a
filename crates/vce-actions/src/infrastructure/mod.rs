//! Infrastructure layer for Voice Commander Elite.
//!
//! Contains the filesystem-facing adapters: binds file discovery and reading,
//! the TOML settings file, and the mock press executor used by tests.
//!
//! **Dependency rule**: this layer may depend on `application` and `vce_core`,
//! but MUST NOT be imported by the `application` layer (tests excepted).
//!
//! # Sub-modules
//!
//! - **`bindings_file`** – Finds the newest `Custom.<version>.binds` file in
//!   the game's bindings directory (or takes an explicit override), reads it,
//!   and builds the [`crate::application::catalog::ActionCatalog`].
//!
//! - **`config`** – `config.toml` in the platform config directory plus the
//!   environment override for the binds file.
//!
//! - **`press_emulation`** – [`crate::application::execute::PressExecutor`]
//!   implementations.  Only the recording mock lives here; real delivery is
//!   the automation framework's job.

pub mod bindings_file;
pub mod config;
pub mod press_emulation;
