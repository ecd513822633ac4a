//! Press delivery seam.
//!
//! The automation framework owns the actual input injection (AutoHotkey
//! `Send`/`Click`, `SendInput`, XTest, ...).  It implements
//! [`PressExecutor`] and hands it to [`crate::application::press_action::PressAction::execute`].
//! The mock implementation lives in
//! [`crate::infrastructure::press_emulation::mock`].

use thiserror::Error;

/// Error type for press delivery.
#[derive(Debug, Error)]
pub enum PressError {
    #[error("platform error: {0}")]
    Platform(String),
    #[error("executor does not recognize key {0:?}")]
    UnknownKey(String),
}

/// Delivers key and mouse-button events on behalf of a press action.
///
/// Keys and buttons are passed by their automation-layer names
/// (`Space`, `Numpad7`, `LButton`), i.e. the translated side of the keymap.
pub trait PressExecutor: Send + Sync {
    /// Emulates a key press (key-down event).
    fn emit_key_down(&self, key: &str) -> Result<(), PressError>;

    /// Emulates a key release (key-up event).
    fn emit_key_up(&self, key: &str) -> Result<(), PressError>;

    /// Emulates a mouse button press or release.
    fn emit_mouse_button(&self, button: &str, pressed: bool) -> Result<(), PressError>;
}
