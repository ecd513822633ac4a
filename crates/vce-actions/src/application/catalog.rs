//! The action catalog.
//!
//! [`ActionCatalog`] is built once at startup from the extracted bindings and
//! is read-only afterwards.  A binding that cannot be synthesized is logged
//! and skipped; it never prevents the other commands from being registered.
//!
//! Lookups distinguish three outcomes for a name that is not registered:
//!
//! | Situation                                         | Error                                   |
//! |---------------------------------------------------|-----------------------------------------|
//! | Base name is a game command, bindings loaded      | [`LookupError::MisconfiguredBinding`]   |
//! | Base name is a game command, bindings not loaded  | [`LookupError::BindingsUnavailable`]    |
//! | Anything else                                     | [`LookupError::UnknownAction`]          |

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, info, warn};
use vce_core::{extract_bindings, is_known_command, BindingRecord, ExtractError, COMMANDS};

use crate::application::press_action::{action_name, command_name, PressAction, ACTION_NAMESPACE};

/// Environment variable naming an explicit binds file.
pub const BINDINGS_FILE_ENV: &str = "VOICE_COMMANDER_ELITE_BINDINGS_FILE";

/// Error type for action lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The name does not correspond to any game command.
    #[error("unknown action {0:?}")]
    UnknownAction(String),

    /// The command exists but has no usable keyboard or mouse binding.
    #[error(
        "did not find a valid mouse button or keyboard key binding for {command:?} in your \
         Elite Dangerous custom keybinds; set either the primary or secondary binding to a \
         mouse button or keyboard key in the in-game controls settings"
    )]
    MisconfiguredBinding { command: String },

    /// The command exists but the binds file could not be loaded at startup.
    #[error(
        "no bindings are available for {command:?} because the bindings file could not be \
         loaded ({reason}); set the {env} environment variable to your custom \
         bindings file",
        env = BINDINGS_FILE_ENV
    )]
    BindingsUnavailable { command: String, reason: String },
}

/// Read-only mapping from `<Command>Action` to its [`PressAction`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionCatalog {
    actions: BTreeMap<String, PressAction>,
    load_failure: Option<String>,
}

impl ActionCatalog {
    /// An empty catalog with no recorded failure.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty catalog remembering why the bindings could not be loaded.
    ///
    /// Lookups of known commands report `reason` instead of blaming the
    /// in-game binding.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            actions: BTreeMap::new(),
            load_failure: Some(reason.into()),
        }
    }

    /// Synthesizes one action per binding.
    ///
    /// Bindings whose key has no automation-layer equivalent are logged at
    /// `warn` and left out.
    pub fn from_bindings<'a>(bindings: impl IntoIterator<Item = &'a BindingRecord>) -> Self {
        let mut actions = BTreeMap::new();
        for record in bindings {
            match PressAction::synthesize(record) {
                Ok(action) => {
                    debug!(action = %action.name(), key = action.key(), "registered action");
                    actions.insert(action.name(), action);
                }
                Err(e) => warn!(
                    command = %record.name,
                    error = %e,
                    "failed to register binding, ignoring"
                ),
            }
        }
        info!(count = actions.len(), "action catalog built");
        Self {
            actions,
            load_failure: None,
        }
    }

    /// Extracts bindings from a binds document and synthesizes the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError`] when the document cannot be parsed.  Per-command
    /// failures are not errors.
    pub fn from_document(document_text: &str) -> Result<Self, ExtractError> {
        let bindings = extract_bindings(document_text)?;
        Ok(Self::from_bindings(bindings.values()))
    }

    /// Returns the action registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&PressAction> {
        self.actions.get(name)
    }

    /// Looks up `name` (`<Command>Action`), explaining any miss.
    ///
    /// # Errors
    ///
    /// See the module-level table.
    pub fn lookup(&self, name: &str) -> Result<&PressAction, LookupError> {
        if let Some(action) = self.actions.get(name) {
            return Ok(action);
        }
        match command_name(name) {
            Some(command) if is_known_command(command) => Err(match &self.load_failure {
                Some(reason) => LookupError::BindingsUnavailable {
                    command: command.to_string(),
                    reason: reason.clone(),
                },
                None => LookupError::MisconfiguredBinding {
                    command: command.to_string(),
                },
            }),
            _ => Err(LookupError::UnknownAction(name.to_string())),
        }
    }

    /// Looks up an action by its fully-qualified name.
    ///
    /// # Errors
    ///
    /// Names outside the action namespace are [`LookupError::UnknownAction`];
    /// otherwise as [`ActionCatalog::lookup`].
    pub fn resolve_fqn(&self, fqn: &str) -> Result<&PressAction, LookupError> {
        let name = fqn
            .strip_prefix(ACTION_NAMESPACE)
            .and_then(|rest| rest.strip_prefix('.'))
            .ok_or_else(|| LookupError::UnknownAction(fqn.to_string()))?;
        self.lookup(name)
    }

    /// Registered action names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PressAction> {
        self.actions.values()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Why the bindings could not be loaded, if they could not.
    pub fn load_failure(&self) -> Option<&str> {
        self.load_failure.as_deref()
    }

    /// Game commands with no registered action, in catalog order.
    pub fn unbound_commands(&self) -> Vec<&'static str> {
        COMMANDS
            .iter()
            .copied()
            .filter(|command| !self.actions.contains_key(&action_name(command)))
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
