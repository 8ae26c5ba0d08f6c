//! JSON settings persistence.
//!
//! Reads and writes [`Settings`] to one of three locations:
//!
//! - `HomeDotDir` (default): `~/.sky_folder_selector/settings.json`
//! - `WorkingDir`: `./sky_settings.json`, for a portable copy kept next to the tool
//! - `Explicit`: any path given with `--settings` or `SKY_FOLDER_SETTINGS`
//!
//! The file is pretty-printed with two-space indentation, keys in a fixed
//! order, and non-ASCII characters written literally, so loading and saving
//! unchanged settings reproduces the file byte for byte.
//!
//! # First run
//!
//! When the file is missing or cannot be parsed, [`SettingsStore::load`]
//! fills both folders from the platform defaults and writes the file right
//! away.  If the platform has no default the store stays empty and folders
//! are resolved on demand, which fails until the user sets them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use skyfolder_core::{default_folder_path, default_settings, Environment, FolderKind, Settings};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::application::open_folders::{FolderError, FolderSource};

/// Directory created under the home directory for the default location.
pub const SETTINGS_DIR_NAME: &str = ".sky_folder_selector";

/// File name inside [`SETTINGS_DIR_NAME`].
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// File name used in the working directory by the portable location.
pub const PORTABLE_SETTINGS_FILE_NAME: &str = "sky_settings.json";

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Neither the home nor the working directory could be determined.
    #[error("could not determine where to keep the settings file")]
    NoSettingsDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid settings object.
    #[error("failed to parse settings JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The settings could not be serialized.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Where the settings file lives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsLocation {
    /// `<home>/.sky_folder_selector/settings.json`.
    #[default]
    HomeDotDir,
    /// `<cwd>/sky_settings.json`.
    WorkingDir,
    /// A caller-chosen file.
    Explicit(PathBuf),
}

impl SettingsLocation {
    /// Resolves the full path of the settings file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NoSettingsDir`] when the home (or working)
    /// directory needed by this location is unknown.
    pub fn resolve(&self, env: &dyn Environment) -> Result<PathBuf, SettingsError> {
        match self {
            Self::HomeDotDir => env
                .home_dir()
                .map(|home| home.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
                .ok_or(SettingsError::NoSettingsDir),
            Self::WorkingDir => env
                .current_dir()
                .map(|cwd| cwd.join(PORTABLE_SETTINGS_FILE_NAME))
                .ok_or(SettingsError::NoSettingsDir),
            Self::Explicit(path) => Ok(path.clone()),
        }
    }
}

/// Where the settings held by the store came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsSource {
    /// Read from the settings file.
    File,
    /// Synthesized from the platform defaults on first run.
    Defaults,
    /// No file and no platform default: nothing configured.
    Empty,
}

/// Result of [`SettingsStore::load`].
#[derive(Debug)]
pub struct LoadOutcome {
    /// The settings now held by the store.
    pub settings: Settings,
    /// Where they came from.
    pub source: SettingsSource,
    /// Set when freshly synthesized defaults could not be written to disk.
    /// The defaults are still in use for this session.
    pub persist_error: Option<SettingsError>,
}

/// Owns the settings file and the in-memory copy of its content.
pub struct SettingsStore {
    path: PathBuf,
    env: Arc<dyn Environment>,
    settings: Settings,
}

impl SettingsStore {
    /// Creates a store for `location` holding empty settings.  Nothing is
    /// read until [`load`](Self::load) is called.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NoSettingsDir`] if the location cannot be resolved.
    pub fn new(location: &SettingsLocation, env: Arc<dyn Environment>) -> Result<Self, SettingsError> {
        let path = location.resolve(env.as_ref())?;
        Ok(Self::with_path(path, env))
    }

    /// Like [`new`](Self::new), but never fails.
    ///
    /// When `location` cannot be resolved the store falls back to the
    /// portable file in the working directory (or a bare relative
    /// `sky_settings.json` if even that is unknown) and the resolution error
    /// is returned alongside, so the caller can warn and carry on.
    pub fn new_or_fallback(
        location: &SettingsLocation,
        env: Arc<dyn Environment>,
    ) -> (Self, Option<SettingsError>) {
        match location.resolve(env.as_ref()) {
            Ok(path) => (Self::with_path(path, env), None),
            Err(e) => {
                let path = SettingsLocation::WorkingDir
                    .resolve(env.as_ref())
                    .unwrap_or_else(|_| PathBuf::from(PORTABLE_SETTINGS_FILE_NAME));
                warn!(?location, error = %e, fallback = %path.display(), "using fallback settings file");
                (Self::with_path(path, env), Some(e))
            }
        }
    }

    fn with_path(path: PathBuf, env: Arc<dyn Environment>) -> Self {
        Self {
            path,
            env,
            settings: Settings::default(),
        }
    }

    /// Path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The settings currently held in memory.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The environment the store resolves defaults against.
    pub fn environment(&self) -> &dyn Environment {
        self.env.as_ref()
    }

    /// Loads the settings file, synthesizing and persisting defaults when it
    /// is missing or unusable.
    ///
    /// Never fails: a file that cannot be read or parsed is replaced by the
    /// defaults, and a failure to write them is reported in
    /// [`LoadOutcome::persist_error`].
    pub fn load(&mut self) -> LoadOutcome {
        match read_settings(&self.path) {
            Ok(Some(settings)) => {
                debug!(path = %self.path.display(), "loaded settings");
                self.settings = settings;
                return LoadOutcome {
                    settings: self.settings.clone(),
                    source: SettingsSource::File,
                    persist_error: None,
                };
            }
            Ok(None) => info!(path = %self.path.display(), "no settings file yet"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "ignoring unusable settings file"),
        }

        match default_settings(self.env.as_ref()) {
            Ok(defaults) => {
                self.settings = defaults;
                let persist_error = write_settings(&self.path, &self.settings).err();
                match &persist_error {
                    Some(e) => debug!(error = %e, "could not write default settings"),
                    None => info!(path = %self.path.display(), "wrote default settings"),
                }
                LoadOutcome {
                    settings: self.settings.clone(),
                    source: SettingsSource::Defaults,
                    persist_error,
                }
            }
            Err(reason) => {
                info!(%reason, "no default folder location; starting with empty settings");
                self.settings = Settings::default();
                LoadOutcome {
                    settings: Settings::default(),
                    source: SettingsSource::Empty,
                    persist_error: None,
                }
            }
        }
    }

    /// Writes `settings` to disk and makes them the current settings.
    ///
    /// Creates the settings directory if it does not exist.  On failure the
    /// in-memory settings are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Io`] for file-system failures or
    /// [`SettingsError::Serialize`] if serialization fails.
    pub fn save(&mut self, settings: Settings) -> Result<(), SettingsError> {
        write_settings(&self.path, &settings)?;
        info!(path = %self.path.display(), "saved settings");
        self.settings = settings;
        Ok(())
    }

    /// Returns the folder to open for `kind`: the stored path when set,
    /// otherwise the platform default.
    ///
    /// # Errors
    ///
    /// Returns [`FolderError::ConfigUnresolvable`] when nothing is stored and
    /// the platform has no default.
    pub fn resolve_folder(&self, kind: FolderKind) -> Result<PathBuf, FolderError> {
        if let Some(stored) = self.settings.folder(kind) {
            return Ok(PathBuf::from(stored));
        }
        let path = default_folder_path(self.env.as_ref(), kind)?;
        debug!(folder = kind.label(), path = %path.display(), "using default folder");
        Ok(path)
    }

    /// Recomputes both folders from the platform defaults.
    ///
    /// Nothing is saved; pass the result to [`save`](Self::save) to persist it.
    ///
    /// # Errors
    ///
    /// Returns [`FolderError::ConfigUnresolvable`] when the platform has no
    /// default; no values are produced in that case.
    pub fn reset_to_default(&self) -> Result<Settings, FolderError> {
        Ok(default_settings(self.env.as_ref())?)
    }
}

impl FolderSource for SettingsStore {
    fn resolve_folder(&self, kind: FolderKind) -> Result<PathBuf, FolderError> {
        SettingsStore::resolve_folder(self, kind)
    }
}

/// Reads the settings file, returning `Ok(None)` if it does not exist.
fn read_settings(path: &Path) -> Result<Option<Settings>, SettingsError> {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content)
            .map(Some)
            .map_err(SettingsError::Parse),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SettingsError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Serializes `settings` and overwrites the file at `path`.
fn write_settings(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| SettingsError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = serde_json::to_string_pretty(settings).map_err(SettingsError::Serialize)?;
    std::fs::write(path, content).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
