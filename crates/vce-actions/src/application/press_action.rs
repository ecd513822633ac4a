//! Press actions synthesized from binding records.
//!
//! A [`PressAction`] is a small immutable value: the command it belongs to,
//! the device class, and the translated automation-layer key.  When executed
//! it presses and releases that key (or clicks that button).  The key is
//! fixed at synthesis time; bindings come from the game's configuration and
//! are never improvised by the caller.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;
use vce_core::{BindingDevice, BindingRecord, KeyMapper, UnsupportedBinding};

use crate::application::execute::{PressError, PressExecutor};

/// Namespace prefix of every action's fully-qualified name.
pub const ACTION_NAMESPACE: &str = "voice_commander_elite.actions";

/// Suffix appended to the command name to form the action name.
pub const ACTION_SUFFIX: &str = "Action";

/// Config key a caller might try to use to override the bound key.
const KEY_OVERRIDE_FIELD: &str = "key";

/// A binding could not be turned into an action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot synthesize action for {command:?}: {source}")]
pub struct SynthesisError {
    pub command: String,
    #[source]
    pub source: UnsupportedBinding,
}

/// Serialized reference to an action, as stored by the automation framework.
///
/// Only the type name is recorded; the key is re-resolved from the current
/// binds file when the record is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub action_type: String,
    #[serde(default)]
    pub action_config: Map<String, Value>,
}

/// "Press and release this key" action for one in-game command.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PressAction {
    command: String,
    device: BindingDevice,
    key: &'static str,
}

impl PressAction {
    /// Builds the action for `record`, translating its key through the keymap.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError`] when the device/key pair has no
    /// automation-layer equivalent.
    pub fn synthesize(record: &BindingRecord) -> Result<Self, SynthesisError> {
        let key = KeyMapper::translate(record.device, &record.key).map_err(|source| {
            SynthesisError {
                command: record.name.clone(),
                source,
            }
        })?;
        Ok(Self {
            command: record.name.clone(),
            device: record.device,
            key,
        })
    }

    /// The logical command name, e.g. `PrimaryFire`.
    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn device(&self) -> BindingDevice {
        self.device
    }

    /// The automation-layer key or button name, e.g. `Space` or `LButton`.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Catalog name: `<Command>Action`.
    pub fn name(&self) -> String {
        action_name(&self.command)
    }

    /// Stable fully-qualified name, independent of process identity.
    pub fn fqn(&self) -> String {
        format!("{ACTION_NAMESPACE}.{}", self.name())
    }

    /// Constructs an instance from framework-supplied configuration.
    ///
    /// The bound key cannot be overridden: a `key` entry in `config` is
    /// ignored with a warning.
    pub fn configure(&self, config: &Map<String, Value>) -> Self {
        if let Some(requested) = config.get(KEY_OVERRIDE_FIELD) {
            warn!(
                action = %self.name(),
                requested = %requested,
                bound = self.key,
                "parameter key was provided, but will be ignored"
            );
        }
        self.clone()
    }

    /// Serialized reference for the automation framework's saved configs.
    pub fn to_record(&self) -> ActionRecord {
        ActionRecord {
            action_type: self.fqn(),
            action_config: Map::new(),
        }
    }

    /// Presses and releases the bound key or button through `executor`.
    ///
    /// # Errors
    ///
    /// Returns the first [`PressError`] reported by the executor; the release
    /// is not attempted if the press fails.
    pub fn execute(&self, executor: &dyn PressExecutor) -> Result<(), PressError> {
        match self.device {
            BindingDevice::Keyboard => {
                executor.emit_key_down(self.key)?;
                executor.emit_key_up(self.key)
            }
            BindingDevice::Mouse => {
                executor.emit_mouse_button(self.key, true)?;
                executor.emit_mouse_button(self.key, false)
            }
        }
    }
}

/// `<command>Action`.
pub fn action_name(command: &str) -> String {
    format!("{command}{ACTION_SUFFIX}")
}

/// Strips the `Action` suffix, returning `None` for names without it.
pub fn command_name(action_name: &str) -> Option<&str> {
    action_name.strip_suffix(ACTION_SUFFIX)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
