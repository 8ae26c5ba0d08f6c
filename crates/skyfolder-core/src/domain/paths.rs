//! Default location of the game's user data on each platform.
//!
//! | Platform    | Base path                                                       |
//! |-------------|-----------------------------------------------------------------|
//! | WindowsLike | `%APPDATA%\ThatGameCompany\com.netease.sky`                     |
//! | MacLike     | `~/Library/Containers/com.tgc.sky.macos/Data/Documents`         |
//! | Other       | none                                                            |
//!
//! Screenshots live in `<base>/images`, recordings in `<base>/Record`.
//!
//! Paths are composed with the separator of the *target* platform rather than
//! the host's, so the result only depends on the [`Environment`] snapshot.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::platform::{Environment, PlatformKind};

/// Segments appended to `%APPDATA%` on Windows.
const WINDOWS_BASE_SEGMENTS: [&str; 2] = ["ThatGameCompany", "com.netease.sky"];

/// Segments appended to the home directory on macOS.
const MACOS_BASE_SEGMENTS: [&str; 5] = [
    "Library",
    "Containers",
    "com.tgc.sky.macos",
    "Data",
    "Documents",
];

/// Why no default base path could be computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The game has no known data directory on this platform.
    #[error("no default game folder is known for platform '{0}'")]
    UnsupportedPlatform(PlatformKind),

    /// A required environment variable is unset or empty.
    #[error("environment variable {0} is not set")]
    MissingVariable(&'static str),

    /// The home directory could not be determined.
    #[error("the home directory could not be determined")]
    MissingHome,
}

/// The two game folders the tool knows how to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FolderKind {
    /// Screenshots.
    Images,
    /// Screen recordings.
    Record,
}

impl FolderKind {
    /// Both kinds in the order they are opened by "open both".
    pub const ALL: [FolderKind; 2] = [FolderKind::Images, FolderKind::Record];

    /// Sub-directory name under the base path.  Case matters: the game
    /// creates `images` in lower case and `Record` capitalised.
    pub fn subdir(self) -> &'static str {
        match self {
            Self::Images => "images",
            Self::Record => "Record",
        }
    }

    /// Key used for this folder in the settings file.
    pub fn settings_key(self) -> &'static str {
        match self {
            Self::Images => "images_path",
            Self::Record => "record_path",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Images => "screenshots",
            Self::Record => "recordings",
        }
    }
}

/// Computes the platform-specific base directory of the game's user data.
///
/// # Errors
///
/// - [`ResolveError::MissingVariable`] on Windows when `APPDATA` is unset or empty.
/// - [`ResolveError::MissingHome`] on macOS when the home directory is unknown.
/// - [`ResolveError::UnsupportedPlatform`] on any other platform.
pub fn default_base_path(env: &dyn Environment) -> Result<PathBuf, ResolveError> {
    let platform = env.platform();
    let base = match platform {
        PlatformKind::WindowsLike => {
            let appdata = env
                .var("APPDATA")
                .filter(|value| !value.is_empty())
                .ok_or(ResolveError::MissingVariable("APPDATA"))?;
            join_segments(platform, Path::new(&appdata), &WINDOWS_BASE_SEGMENTS)
        }
        PlatformKind::MacLike => {
            let home = env.home_dir().ok_or(ResolveError::MissingHome)?;
            join_segments(platform, &home, &MACOS_BASE_SEGMENTS)
        }
        PlatformKind::Other => return Err(ResolveError::UnsupportedPlatform(platform)),
    };
    debug!(%platform, base = %base.display(), "resolved default base path");
    Ok(base)
}

/// Default path of one game folder: the base path plus `images` or `Record`.
///
/// # Errors
///
/// Propagates any error from [`default_base_path`].
pub fn default_folder_path(env: &dyn Environment, kind: FolderKind) -> Result<PathBuf, ResolveError> {
    let base = default_base_path(env)?;
    Ok(join_segments(env.platform(), &base, &[kind.subdir()]))
}

/// Appends `segments` to `base` using the separator of `platform`.
///
/// A trailing separator on `base` is not doubled.  On Windows both `\` and
/// `/` count as trailing separators.
pub fn join_segments(platform: PlatformKind, base: &Path, segments: &[&str]) -> PathBuf {
    let separator = platform.separator();
    let ends_with_separator = |s: &str| match platform {
        PlatformKind::WindowsLike => s.ends_with(['\\', '/']),
        PlatformKind::MacLike | PlatformKind::Other => s.ends_with('/'),
    };

    let mut joined = base.to_string_lossy().into_owned();
    for segment in segments {
        if !joined.is_empty() && !ends_with_separator(&joined) {
            joined.push(separator);
        }
        joined.push_str(segment);
    }
    PathBuf::from(joined)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
