//! Mock press executor for unit testing.
//!
//! Records every emitted event in a `Mutex<Vec<...>>` so assertions can check
//! exactly what an action pressed and in what order.  Set `should_fail` to
//! exercise error paths.  Names that no keymap entry translates to are
//! rejected with `PressError::UnknownKey`, as a real executor would.
//!
//! ```ignore
//! let executor = MockPressExecutor::new();
//! catalog.lookup("PrimaryFireAction")?.execute(&executor)?;
//! assert_eq!(*executor.key_downs.lock().unwrap(), ["Space"]);
//! ```

use std::sync::Mutex;

use vce_core::{BindingDevice, KeyMapper, KeyTarget};

use crate::application::execute::{PressError, PressExecutor};

/// A press executor that records all calls without touching the OS.
#[derive(Debug, Default)]
pub struct MockPressExecutor {
    /// Keys passed to `emit_key_down`.
    pub key_downs: Mutex<Vec<String>>,
    /// Keys passed to `emit_key_up`.
    pub key_ups: Mutex<Vec<String>>,
    /// `(button, pressed)` pairs from `emit_mouse_button`.
    pub mouse_buttons: Mutex<Vec<(String, bool)>>,
    /// When `true`, every method returns `PressError::Platform`.
    pub should_fail: bool,
}

impl MockPressExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    fn check(&self) -> Result<(), PressError> {
        if self.should_fail {
            return Err(PressError::Platform("mock failure".into()));
        }
        Ok(())
    }

    fn check_name(device: BindingDevice, name: &str) -> Result<(), PressError> {
        let known = KeyMapper::table(device)
            .iter()
            .any(|(_, target)| matches!(target, KeyTarget::Mapped(mapped) if *mapped == name));
        if known {
            Ok(())
        } else {
            Err(PressError::UnknownKey(name.to_string()))
        }
    }
}

impl PressExecutor for MockPressExecutor {
    fn emit_key_down(&self, key: &str) -> Result<(), PressError> {
        self.check()?;
        Self::check_name(BindingDevice::Keyboard, key)?;
        self.key_downs
            .lock()
            .map_err(|e| PressError::Platform(e.to_string()))?
            .push(key.to_string());
        Ok(())
    }

    fn emit_key_up(&self, key: &str) -> Result<(), PressError> {
        self.check()?;
        Self::check_name(BindingDevice::Keyboard, key)?;
        self.key_ups
            .lock()
            .map_err(|e| PressError::Platform(e.to_string()))?
            .push(key.to_string());
        Ok(())
    }

    fn emit_mouse_button(&self, button: &str, pressed: bool) -> Result<(), PressError> {
        self.check()?;
        Self::check_name(BindingDevice::Mouse, button)?;
        self.mouse_buttons
            .lock()
            .map_err(|e| PressError::Platform(e.to_string()))?
            .push((button.to_string(), pressed));
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
