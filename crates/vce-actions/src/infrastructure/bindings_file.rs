//! Binds file discovery and loading.
//!
//! The game writes one `Custom.<major>.<minor>[.<patch>...].binds` file per
//! bindings format version into
//! `<LocalAppData>/Frontier Developments/Elite Dangerous/Options/Bindings`.
//! Old versions are left behind after upgrades, so the newest version wins.
//! Versions compare component-wise as integers: `4.10` is newer than `4.9`.
//!
//! An explicit file from [`BindingsSettings::file`] bypasses scanning and is
//! not checked here; a bad path surfaces as [`BindingsFileError::Read`].

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, info, warn};
use vce_core::ExtractError;

use crate::application::catalog::{ActionCatalog, BINDINGS_FILE_ENV};
use crate::infrastructure::config::BindingsSettings;

/// File name pattern; group 1 is the dotted version.
const BINDS_FILE_PATTERN: &str = r"^Custom\.(\d+(?:\.\d+)+)\.binds$";

/// Error type for locating and reading the binds file.
#[derive(Debug, Error)]
pub enum BindingsFileError {
    /// The bindings directory holds no `Custom.<version>.binds` file.
    #[error(
        "could not find a Custom.<version>.binds file in {dir}; set the {env} environment \
         variable to your custom bindings file",
        env = BINDINGS_FILE_ENV
    )]
    NotFound { dir: PathBuf },

    /// No default bindings directory exists on this platform.
    #[error(
        "could not determine the Elite Dangerous bindings directory; set the {env} \
         environment variable to your custom bindings file",
        env = BINDINGS_FILE_ENV
    )]
    NoDefaultDirectory,

    #[error("failed to list bindings directory {dir}: {source}")]
    DirectoryRead {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read bindings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Extract {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },
}

fn binds_file_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BINDS_FILE_PATTERN).expect("valid binds file pattern"))
}

/// Parses the version out of a binds file name.
///
/// Returns `None` for names that do not match the pattern or whose version
/// components overflow `u64`.
pub fn binds_file_version(file_name: &str) -> Option<Vec<u64>> {
    let captures = binds_file_regex().captures(file_name)?;
    captures[1]
        .split('.')
        .map(|part| part.parse::<u64>().ok())
        .collect()
}

/// Picks the file name with the greatest version.
///
/// On equal versions (e.g. `4.0` and `4.00`) the first one seen wins.
pub fn newest_binds_file<'a>(
    file_names: impl IntoIterator<Item = &'a str>,
) -> Option<(&'a str, Vec<u64>)> {
    let mut newest: Option<(&'a str, Vec<u64>)> = None;
    for name in file_names {
        let Some(version) = binds_file_version(name) else {
            if binds_file_regex().is_match(name) {
                debug!(file = name, "version component out of range, skipping");
            }
            continue;
        };
        let is_newer = newest.as_ref().map_or(true, |(_, best)| version > *best);
        if is_newer {
            newest = Some((name, version));
        }
    }
    newest
}

/// The game's default bindings directory for the current user.
pub fn default_bindings_dir() -> Option<PathBuf> {
    const SUFFIX: [&str; 4] = [
        "Frontier Developments",
        "Elite Dangerous",
        "Options",
        "Bindings",
    ];

    #[cfg(target_os = "windows")]
    let base = std::env::var_os("LOCALAPPDATA")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("USERPROFILE").map(|p| PathBuf::from(p).join("AppData").join("Local"))
        });

    // Elsewhere the game runs under a compatibility layer that maps the
    // Windows profile into the home directory.
    #[cfg(not(target_os = "windows"))]
    let base = std::env::var_os("HOME").map(|h| PathBuf::from(h).join("AppData").join("Local"));

    base.map(|base| SUFFIX.iter().fold(base, |path, part| path.join(part)))
}

/// Finds the newest binds file in `dir`.
///
/// # Errors
///
/// Returns [`BindingsFileError::DirectoryRead`] if `dir` cannot be listed and
/// [`BindingsFileError::NotFound`] if it holds no matching file.
pub fn locate_in(dir: &Path) -> Result<PathBuf, BindingsFileError> {
    let entries = std::fs::read_dir(dir).map_err(|source| BindingsFileError::DirectoryRead {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| BindingsFileError::DirectoryRead {
            dir: dir.to_path_buf(),
            source,
        })?;
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }

    let (name, version) = newest_binds_file(names.iter().map(String::as_str)).ok_or_else(|| {
        BindingsFileError::NotFound {
            dir: dir.to_path_buf(),
        }
    })?;
    debug!(file = name, ?version, "selected newest bindings file");
    Ok(dir.join(name))
}

/// Resolves the binds file to load.
///
/// An explicit `file` is returned unchanged.  Otherwise `directory` (or the
/// game's default directory) is scanned for the newest version.
///
/// # Errors
///
/// See [`locate_in`]; additionally [`BindingsFileError::NoDefaultDirectory`]
/// when no directory is configured and the default cannot be determined.
pub fn locate(settings: &BindingsSettings) -> Result<PathBuf, BindingsFileError> {
    if let Some(file) = &settings.file {
        return Ok(file.clone());
    }
    let dir = match &settings.directory {
        Some(dir) => dir.clone(),
        None => default_bindings_dir().ok_or(BindingsFileError::NoDefaultDirectory)?,
    };
    locate_in(&dir)
}

/// Reads `path` and builds the action catalog from it.
///
/// # Errors
///
/// Returns [`BindingsFileError::Read`] if the file cannot be read and
/// [`BindingsFileError::Extract`] if it is not a valid binds document.
pub fn read_catalog(path: &Path) -> Result<ActionCatalog, BindingsFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| BindingsFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ActionCatalog::from_document(&text).map_err(|source| BindingsFileError::Extract {
        path: path.to_path_buf(),
        source,
    })
}

/// Locates, reads, and synthesizes the catalog.
///
/// Never fails: any error is logged and yields an empty catalog that
/// remembers the reason, so the failure surfaces on the first lookup.
pub fn load_catalog(settings: &BindingsSettings) -> ActionCatalog {
    let result = locate(settings).and_then(|path| {
        info!(path = %path.display(), "reading bindings");
        read_catalog(&path)
    });
    match result {
        Ok(catalog) => catalog,
        Err(e) => {
            warn!(error = %e, "failed to read bindings");
            ActionCatalog::unavailable(e.to_string())
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
