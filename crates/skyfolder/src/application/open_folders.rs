//! FolderLauncher: checks a game folder exists and reveals it in the file manager.
//!
//! This use case sits at the application layer and delegates to two ports:
//!
//! - [`FolderSource`] answers "where is the images / Record folder?".  The
//!   settings store implements it in the infrastructure layer.
//! - [`FolderOpener`] performs the actual OS call.  Platform implementations
//!   live in `infrastructure::opener`.
//!
//! Every operation is independent: opening both folders attempts the second
//! even when the first fails, and no failure is fatal to the process.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use skyfolder_core::{FolderKind, ResolveError};
use thiserror::Error;
use tracing::{debug, info};

/// Error returned by a [`FolderOpener`] when the OS refused or failed to
/// start the file manager.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The helper program could not be started (e.g. `xdg-open` missing).
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The Win32 shell reported an error code.
    #[error("the shell could not open the folder (error code {code})")]
    Shell { code: isize },

    /// Any other platform failure.
    #[error("platform error: {0}")]
    Platform(String),
}

/// Error type for the folder workflow, as surfaced to the user.
#[derive(Debug, Error)]
pub enum FolderError {
    /// No folder is configured and the platform default is unknown.
    #[error("cannot determine the folder location: {0}")]
    ConfigUnresolvable(#[from] ResolveError),

    /// The configured or default folder does not exist.
    #[error("the folder '{}' does not exist", .path.display())]
    PathNotFound { path: PathBuf },

    /// The folder exists but the file manager could not be launched.
    #[error("could not open '{}': {message}", .path.display())]
    Launch { path: PathBuf, message: String },
}

impl FolderError {
    /// Remediation text shown to the user below the error.
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::ConfigUnresolvable(_) => {
                "No default location is known here; set the folder manually in the settings."
            }
            Self::PathNotFound { .. } => {
                "If you did not set this folder yourself, the default location may not exist \
                 on this machine. Check the path or set it manually in the settings."
            }
            Self::Launch { .. } => {
                "Check that a file manager is available, or open the path by hand."
            }
        }
    }

    /// The offending path, when the error concerns a specific folder.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ConfigUnresolvable(_) => None,
            Self::PathNotFound { path } | Self::Launch { path, .. } => Some(path),
        }
    }
}

/// Reveals a folder in the platform file manager.
///
/// Implementations are fire-and-forget: they return once the request has
/// been handed to the OS, without waiting for a window to appear.
pub trait FolderOpener: Send + Sync {
    /// Opens `path` in the file manager.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError`] if the OS call or helper process fails to start.
    fn reveal(&self, path: &Path) -> Result<(), LaunchError>;
}

/// Resolves the location of a game folder.
pub trait FolderSource {
    /// Returns the folder to open for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`FolderError::ConfigUnresolvable`] when nothing is configured
    /// and no platform default exists.
    fn resolve_folder(&self, kind: FolderKind) -> Result<PathBuf, FolderError>;
}

/// Independent outcomes of [`FolderLauncher::open_both`].
#[derive(Debug)]
pub struct BothOutcome {
    pub images: Result<(), FolderError>,
    pub record: Result<(), FolderError>,
}

impl BothOutcome {
    /// `true` when both folders were opened.
    pub fn all_ok(&self) -> bool {
        self.images.is_ok() && self.record.is_ok()
    }
}

/// The folder-launch use case.
pub struct FolderLauncher {
    opener: Arc<dyn FolderOpener>,
}

impl FolderLauncher {
    /// Creates a launcher that reveals folders through `opener`.
    pub fn new(opener: Arc<dyn FolderOpener>) -> Self {
        Self { opener }
    }

    /// Opens `path` in the file manager.
    ///
    /// # Errors
    ///
    /// - [`FolderError::PathNotFound`] if `path` does not exist.  The opener
    ///   is not called in that case.
    /// - [`FolderError::Launch`] if the opener fails.
    pub fn open(&self, path: &Path) -> Result<(), FolderError> {
        if !path.exists() {
            debug!(path = %path.display(), "folder does not exist");
            return Err(FolderError::PathNotFound {
                path: path.to_path_buf(),
            });
        }

        self.opener.reveal(path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "failed to open folder");
            FolderError::Launch {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        info!(path = %path.display(), "opened folder");
        Ok(())
    }

    /// Opens two already-resolved folders one after the other.
    ///
    /// A failure on `images` does not prevent the attempt on `record`.
    /// Callers that still need to resolve the folders use
    /// [`open_all`](Self::open_all) instead, which keeps a resolution failure
    /// on one folder from blocking the other.
    pub fn open_both(&self, images: &Path, record: &Path) -> BothOutcome {
        BothOutcome {
            images: self.open(images),
            record: self.open(record),
        }
    }

    /// Resolves `kind` through `source` and opens it, returning the path that
    /// was opened.
    ///
    /// # Errors
    ///
    /// Propagates resolution errors from `source` and errors from [`open`](Self::open).
    pub fn open_kind(&self, source: &dyn FolderSource, kind: FolderKind) -> Result<PathBuf, FolderError> {
        let path = source.resolve_folder(kind)?;
        self.open(&path)?;
        Ok(path)
    }

    /// Resolves and opens every folder kind independently, in
    /// [`FolderKind::ALL`] order.
    ///
    /// This is the "open both" entry point for the command line: for folders
    /// that resolve it behaves exactly like [`open_both`](Self::open_both).
    pub fn open_all(&self, source: &dyn FolderSource) -> Vec<(FolderKind, Result<PathBuf, FolderError>)> {
        FolderKind::ALL
            .iter()
            .map(|&kind| (kind, self.open_kind(source, kind)))
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
