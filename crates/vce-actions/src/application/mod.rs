//! Application layer for Voice Commander Elite.
//!
//! # What lives here?
//!
//! - **`press_action`** – Turns a [`vce_core::BindingRecord`] into a
//!   [`press_action::PressAction`]: an immutable "press and release this key"
//!   descriptor with a stable fully-qualified name.
//!
//! - **`catalog`** – Collects every synthesized action under
//!   `<Command>Action` and answers lookups, telling "unknown action" apart
//!   from "known command without a keyboard or mouse binding".
//!
//! - **`condition`** – The "window is active" condition, generic over the
//!   window title, with the game window as a preset.
//!
//! - **`execute`** – The [`execute::PressExecutor`] trait through which the
//!   automation framework delivers key and button events.  Nothing in this
//!   crate talks to the OS directly.

pub mod catalog;
pub mod condition;
pub mod execute;
pub mod press_action;
