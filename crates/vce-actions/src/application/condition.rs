//! "Window is active" condition.
//!
//! [`WindowIsActive`] is true exactly when a window with a given title has
//! input focus.  The focus check itself is the automation framework's
//! primitive, reached through [`WindowFocusProbe`].
//!
//! Game-specific variants are not subtypes but [`WindowPreset`]s: a fixed
//! type name plus a built-in title.  [`ELITE_DANGEROUS`] is the only preset.
//!
//! # Serialization forms
//!
//! A generic condition always records its title:
//!
//! ```json
//! { "condition_type": "voice_commander.conditions.AHKWindowIsActive",
//!   "condition_config": { "title": "Notepad" } }
//! ```
//!
//! A preset records no title, so saved configurations pick up a changed
//! built-in title on load.  The *full* form carries an explicit empty config,
//! the *simplified* form only the type name:
//!
//! ```json
//! { "condition_type": "voice_commander_elite.conditions.EliteDangerousIsActive",
//!   "condition_config": {} }
//! { "condition_type": "voice_commander_elite.conditions.EliteDangerousIsActive" }
//! ```
//!
//! Both forms load back into the same condition.
//!
//! The simplified form keeps the preset's own type name rather than
//! rewriting itself as a titled generic `AHKWindowIsActive` record.  A saved
//! configuration therefore stays tied to the preset and follows its built-in
//! title, at the cost of needing this crate to load it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

/// Type name of the framework's generic window condition.
pub const WINDOW_IS_ACTIVE_TYPE: &str = "voice_commander.conditions.AHKWindowIsActive";

const TITLE_FIELD: &str = "title";

/// A fixed parameter set for [`WindowIsActive`].
#[derive(Debug, PartialEq, Eq)]
pub struct WindowPreset {
    /// Fully-qualified type name written to saved configurations.
    pub type_name: &'static str,
    /// Built-in window title.
    pub title: &'static str,
}

/// The game client's main window.
pub static ELITE_DANGEROUS: WindowPreset = WindowPreset {
    type_name: "voice_commander_elite.conditions.EliteDangerousIsActive",
    title: "Elite - Dangerous (CLIENT)",
};

static PRESETS: &[&WindowPreset] = &[&ELITE_DANGEROUS];

/// Checks whether a window currently has input focus.
pub trait WindowFocusProbe {
    fn is_window_active(&self, title: &str) -> bool;
}

/// How a preset condition is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerializationForm {
    /// Type name plus an explicit empty config.
    #[default]
    Full,
    /// Type name only.
    Simplified,
}

/// Error type for loading a condition record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    #[error("unknown condition type {0:?}")]
    UnknownType(String),
    #[error("condition {0:?} requires a string \"title\" in its config")]
    MissingTitle(String),
}

/// Serialized condition, as stored by the automation framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRecord {
    pub condition_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_config: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Title(String),
    Preset(&'static WindowPreset),
}

/// True when the target window has input focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowIsActive {
    target: Target,
    form: SerializationForm,
}

impl WindowIsActive {
    /// A generic condition for an arbitrary window title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            target: Target::Title(title.into()),
            form: SerializationForm::Full,
        }
    }

    pub fn from_preset(preset: &'static WindowPreset) -> Self {
        Self {
            target: Target::Preset(preset),
            form: SerializationForm::Full,
        }
    }

    /// True when the game client window has focus.
    pub fn elite_dangerous() -> Self {
        Self::from_preset(&ELITE_DANGEROUS)
    }

    /// Writes this condition in the simplified form.  No effect on generic
    /// conditions, which always record their title.
    pub fn with_simplified_serialization(mut self) -> Self {
        self.form = SerializationForm::Simplified;
        self
    }

    pub fn title(&self) -> &str {
        match &self.target {
            Target::Title(title) => title,
            Target::Preset(preset) => preset.title,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self.target {
            Target::Title(_) => WINDOW_IS_ACTIVE_TYPE,
            Target::Preset(preset) => preset.type_name,
        }
    }

    pub fn serialization_form(&self) -> SerializationForm {
        self.form
    }

    /// Evaluates the condition through the framework's focus primitive.
    pub fn check(&self, probe: &dyn WindowFocusProbe) -> bool {
        probe.is_window_active(self.title())
    }

    pub fn to_record(&self) -> ConditionRecord {
        let condition_config = match (&self.target, self.form) {
            (Target::Title(title), _) => {
                let mut config = Map::new();
                config.insert(TITLE_FIELD.to_string(), Value::String(title.clone()));
                Some(config)
            }
            (Target::Preset(_), SerializationForm::Full) => Some(Map::new()),
            (Target::Preset(_), SerializationForm::Simplified) => None,
        };
        ConditionRecord {
            condition_type: self.type_name().to_string(),
            condition_config,
        }
    }

    /// Rebuilds a condition from either serialization form.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionError::UnknownType`] for type names that are neither
    /// the generic condition nor a preset, and [`ConditionError::MissingTitle`]
    /// for a generic record without a title.
    pub fn from_record(record: &ConditionRecord) -> Result<Self, ConditionError> {
        if record.condition_type == WINDOW_IS_ACTIVE_TYPE {
            let title = record
                .condition_config
                .as_ref()
                .and_then(|config| config.get(TITLE_FIELD))
                .and_then(Value::as_str)
                .ok_or_else(|| ConditionError::MissingTitle(record.condition_type.clone()))?;
            return Ok(Self::new(title));
        }

        let preset = PRESETS
            .iter()
            .copied()
            .find(|preset| preset.type_name == record.condition_type)
            .ok_or_else(|| ConditionError::UnknownType(record.condition_type.clone()))?;

        let mut condition = Self::from_preset(preset);
        match &record.condition_config {
            None => condition.form = SerializationForm::Simplified,
            Some(config) if config.contains_key(TITLE_FIELD) => warn!(
                condition = preset.type_name,
                "parameter title was provided, but will be ignored"
            ),
            Some(_) => {}
        }
        Ok(condition)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
