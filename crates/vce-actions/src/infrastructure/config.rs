//! TOML-based settings for Voice Commander Elite.
//!
//! Reads `AppConfig` from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\VoiceCommanderElite\config.toml`
//! - Linux:    `~/.config/voice-commander-elite/config.toml`
//! - macOS:    `~/Library/Application Support/VoiceCommanderElite/config.toml`
//!
//! Every field is optional:
//!
//! ```toml
//! [bindings]
//! file = 'C:\Users\cmdr\AppData\Local\Frontier Developments\Elite Dangerous\Options\Bindings\Custom.4.0.binds'
//! directory = '/mnt/games/ed/Bindings'
//!
//! [logging]
//! level = "debug"
//! ```
//!
//! The `VOICE_COMMANDER_ELITE_BINDINGS_FILE` environment variable takes
//! precedence over `[bindings] file`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::catalog::BINDINGS_FILE_ENV;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level settings stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub bindings: BindingsSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where to find the binds file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BindingsSettings {
    /// Explicit binds file; skips directory scanning entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Directory to scan instead of the game's default bindings directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` level used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Replaces `[bindings] file` when `file` is `Some`.
    pub fn with_bindings_file_override(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.bindings.file = Some(file);
        }
        self
    }

    /// Applies the `VOICE_COMMANDER_ELITE_BINDINGS_FILE` environment variable.
    pub fn with_env_overrides(self) -> Self {
        let file = std::env::var_os(BINDINGS_FILE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        self.with_bindings_file_override(file)
    }

    /// Renders the settings as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from the platform config file, returning defaults if the
/// file does not exist.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads `AppConfig` from `path`, returning `AppConfig::default()` if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Resolves the platform config base directory for this application.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("VoiceCommanderElite"))
    }

    #[cfg(target_os = "linux")]
    {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("voice-commander-elite"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("VoiceCommanderElite")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_overrides() {
        let cfg = AppConfig::default();

        assert_eq!(cfg.bindings.file, None);
        assert_eq!(cfg.bindings.directory, None);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").expect("deserialize empty");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_deserialize_bindings_section() {
        // Arrange
        let toml_str = r#"
[bindings]
file = "/games/ed/Custom.4.0.binds"

[logging]
level = "debug"
"#;

        // Act
        let cfg: AppConfig = toml::from_str(toml_str).expect("deserialize");

        // Assert
        assert_eq!(
            cfg.bindings.file,
            Some(PathBuf::from("/games/ed/Custom.4.0.binds"))
        );
        assert_eq!(cfg.bindings.directory, None);
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn test_deserialize_invalid_toml_returns_parse_error() {
        let result: Result<AppConfig, toml::de::Error> = toml::from_str("[[[ not valid toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_to_toml_omits_unset_paths() {
        let toml_str = AppConfig::default().to_toml().expect("serialize");

        assert!(!toml_str.contains("file"));
        assert!(!toml_str.contains("directory"));
        assert!(toml_str.contains("level = \"info\""));
    }

    #[test]
    fn test_bindings_file_override_replaces_configured_file() {
        let mut cfg = AppConfig::default();
        cfg.bindings.file = Some(PathBuf::from("from-config.binds"));

        let cfg = cfg.with_bindings_file_override(Some(PathBuf::from("from-env.binds")));

        assert_eq!(cfg.bindings.file, Some(PathBuf::from("from-env.binds")));
    }

    #[test]
    fn test_absent_override_keeps_configured_file() {
        let mut cfg = AppConfig::default();
        cfg.bindings.file = Some(PathBuf::from("from-config.binds"));

        let cfg = cfg.with_bindings_file_override(None);

        assert_eq!(cfg.bindings.file, Some(PathBuf::from("from-config.binds")));
    }

    fn binds_doc(key: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" ?>
<Root PresetName="Custom" MajorVersion="4" MinorVersion="0">
    <Pause>
        <Primary Device="Keyboard" Key="{key}" />
        <Secondary Device="{{NoDevice}}" Key="" />
    </Pause>
</Root>"#
        )
    }

    // The only test in this crate that touches the process environment, so
    // every variable-dependent assertion lives here.
    #[test]
    fn test_bindings_file_env_var_overrides_directory_scan() {
        use crate::infrastructure::bindings_file::load_catalog;

        // Arrange
        let scanned = tempfile::tempdir().unwrap();
        std::fs::write(scanned.path().join("Custom.4.0.binds"), binds_doc("Key_O")).unwrap();
        let explicit = tempfile::tempdir().unwrap();
        let explicit_file = explicit.path().join("whatever.xml");
        std::fs::write(&explicit_file, binds_doc("Key_P")).unwrap();

        let mut cfg = AppConfig::default();
        cfg.bindings.directory = Some(scanned.path().to_path_buf());
        cfg.bindings.file = Some(PathBuf::from("from-config.binds"));

        // Act / Assert: a set variable wins over the configured file and directory.
        std::env::set_var(BINDINGS_FILE_ENV, &explicit_file);
        let overridden = cfg.clone().with_env_overrides();
        assert_eq!(overridden.bindings.file.as_deref(), Some(explicit_file.as_path()));
        let catalog = load_catalog(&overridden.bindings);
        assert_eq!(catalog.lookup("PauseAction").map(|a| a.key()), Ok("p"));

        let default_catalog = crate::load_default_catalog();
        assert_eq!(default_catalog.lookup("PauseAction").map(|a| a.key()), Ok("p"));

        // Act / Assert: an empty value is ignored.
        std::env::set_var(BINDINGS_FILE_ENV, "");
        let kept = cfg.clone().with_env_overrides();
        assert_eq!(kept.bindings.file, Some(PathBuf::from("from-config.binds")));

        // Act / Assert: an unset variable leaves the directory scan in charge.
        std::env::remove_var(BINDINGS_FILE_ENV);
        let mut scan_only = cfg.with_env_overrides();
        scan_only.bindings.file = None;
        let catalog = load_catalog(&scan_only.bindings);
        assert_eq!(catalog.lookup("PauseAction").map(|a| a.key()), Ok("o"));
    }

    #[test]
    fn test_load_config_from_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();

        let cfg = load_config_from(&dir.path().join("config.toml")).expect("load");

        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_load_config_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[bindings]\ndirectory = \"/tmp/binds\"\n").unwrap();

        let cfg = load_config_from(&path).expect("load");

        assert_eq!(cfg.bindings.directory, Some(PathBuf::from("/tmp/binds")));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_load_config_from_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[bindings\n").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(path.ends_with("config.toml"), "got {path:?}");
        }
        // NoPlatformConfigDir in a stripped CI environment is also acceptable.
    }
}
