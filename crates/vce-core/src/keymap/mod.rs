//! Device/key translation tables.
//!
//! The game names keys with its own identifiers (`Key_Space`, `Key_Numpad_7`,
//! `Mouse_2`).  The automation framework presses keys by AutoHotkey key name
//! (`Space`, `Numpad7`, `RButton`).  Each device class has one static table
//! mapping the former to the latter.
//!
//! Every identifier the game can emit is listed.  An entry is either
//! [`KeyTarget::Mapped`] with a non-empty target name, or
//! [`KeyTarget::Unsupported`] when the host has no name for the key (regional
//! keys such as `Key_Kana` or `Key_Yen`).  Translation never guesses: anything
//! not mapped fails with [`UnsupportedBinding`].

pub mod keyboard;
pub mod mouse;

use thiserror::Error;

use crate::binding::BindingDevice;

/// Target of one table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyTarget {
    /// The automation-layer key or button name.
    Mapped(&'static str),
    /// The game emits this identifier but the automation layer cannot press it.
    Unsupported,
}

/// A device/key pair that cannot be pressed by the automation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnsupportedBinding {
    /// The table lists the key but marks it as having no equivalent.
    #[error("{device} key {key:?} has no automation-layer equivalent")]
    Unsupported { device: BindingDevice, key: String },

    /// The key is not in the table at all (e.g. added by a newer game version).
    #[error("{device} key {key:?} is not a recognized key identifier")]
    Unrecognized { device: BindingDevice, key: String },
}

impl UnsupportedBinding {
    /// The game's internal key identifier that failed to translate.
    pub fn key(&self) -> &str {
        match self {
            Self::Unsupported { key, .. } | Self::Unrecognized { key, .. } => key,
        }
    }
}

/// Unified key mapper over both device tables.
pub struct KeyMapper;

impl KeyMapper {
    /// Returns the static table for `device`.
    pub fn table(device: BindingDevice) -> &'static [(&'static str, KeyTarget)] {
        match device {
            BindingDevice::Keyboard => keyboard::KEYBOARD_TABLE,
            BindingDevice::Mouse => mouse::MOUSE_TABLE,
        }
    }

    /// Looks up the raw table entry for `key` on `device`.
    ///
    /// Returns `None` when the identifier is not listed.
    pub fn lookup(device: BindingDevice, key: &str) -> Option<KeyTarget> {
        // Linear scan: tables hold a few hundred entries at most and the
        // lookup runs once per command at startup.
        Self::table(device)
            .iter()
            .find(|(game_key, _)| *game_key == key)
            .map(|&(_, target)| target)
    }

    /// Translates a game key identifier to the automation-layer key name.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedBinding::Unsupported`] for keys the table marks as
    /// having no equivalent and [`UnsupportedBinding::Unrecognized`] for keys
    /// missing from the table.
    pub fn translate(device: BindingDevice, key: &str) -> Result<&'static str, UnsupportedBinding> {
        match Self::lookup(device, key) {
            Some(KeyTarget::Mapped(target)) => Ok(target),
            Some(KeyTarget::Unsupported) => Err(UnsupportedBinding::Unsupported {
                device,
                key: key.to_string(),
            }),
            None => Err(UnsupportedBinding::Unrecognized {
                device,
                key: key.to_string(),
            }),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
