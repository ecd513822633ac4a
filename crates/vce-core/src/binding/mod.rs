//! Normalized binding records.
//!
//! A [`BindingRecord`] is what remains of one command element after the
//! extractor has picked the slot (Primary or Secondary) that points at a
//! keyboard key or mouse button.  Records are built once during parsing and
//! never mutated afterwards.

pub mod extract;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Input hardware class of a resolved binding.
///
/// Only keyboard and mouse bindings are representable; joystick, HOTAS and
/// gamepad slots are filtered out during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BindingDevice {
    Keyboard,
    Mouse,
}

impl BindingDevice {
    /// Parses the `Device` attribute value used in the binds file.
    ///
    /// Returns `None` for every other hardware name (`ThrustMasterHOTAS4`,
    /// `{NoDevice}`, ...).
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "Keyboard" => Some(Self::Keyboard),
            "Mouse" => Some(Self::Mouse),
            _ => None,
        }
    }

    /// The attribute spelling of this device, as it appears in the binds file.
    pub fn as_attribute(self) -> &'static str {
        match self {
            Self::Keyboard => "Keyboard",
            Self::Mouse => "Mouse",
        }
    }
}

impl fmt::Display for BindingDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_attribute())
    }
}

/// One resolved physical input assignment for one logical command.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindingRecord {
    /// Logical command name, taken from the element's tag name.
    pub name: String,
    /// Hardware class the key belongs to.
    pub device: BindingDevice,
    /// The game's internal key identifier, e.g. `Key_Space` or `Mouse_1`.
    pub key: String,
}

impl BindingRecord {
    pub fn new(name: impl Into<String>, device: BindingDevice, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            device,
            key: key.into(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_from_attribute_accepts_keyboard_and_mouse() {
        assert_eq!(
            BindingDevice::from_attribute("Keyboard"),
            Some(BindingDevice::Keyboard)
        );
        assert_eq!(BindingDevice::from_attribute("Mouse"), Some(BindingDevice::Mouse));
    }

    #[test]
    fn test_device_from_attribute_rejects_other_hardware() {
        for name in ["ThrustMasterHOTAS4", "{NoDevice}", "keyboard", "", "GamePad"] {
            assert_eq!(
                BindingDevice::from_attribute(name),
                None,
                "{name:?} must not be treated as keyboard or mouse"
            );
        }
    }

    #[test]
    fn test_device_display_matches_attribute_spelling() {
        assert_eq!(BindingDevice::Keyboard.to_string(), "Keyboard");
        assert_eq!(BindingDevice::Mouse.to_string(), "Mouse");
    }
}
