//! The live process environment.

use std::ffi::OsString;
use std::path::PathBuf;

use skyfolder_core::{Environment, PlatformKind};

/// [`Environment`] that reads from the running process.
///
/// The platform is detected once at construction and never re-read.
#[derive(Debug, Clone, Copy)]
pub struct SystemEnvironment {
    platform: PlatformKind,
}

impl SystemEnvironment {
    /// Detects the platform and returns the live environment.
    pub fn new() -> Self {
        Self {
            platform: PlatformKind::detect(),
        }
    }
}

impl Default for SystemEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for SystemEnvironment {
    fn platform(&self) -> PlatformKind {
        self.platform
    }

    fn var(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        home_from_vars(self.platform, |key| self.var(key))
    }

    fn current_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }
}

/// Picks the home directory from environment variables.
///
/// On Windows `USERPROFILE` wins over `HOME`, which Git Bash and MSYS point
/// elsewhere; `HOME` is only used there when `USERPROFILE` is unset.
fn home_from_vars(
    platform: PlatformKind,
    var: impl Fn(&str) -> Option<OsString>,
) -> Option<PathBuf> {
    let non_empty = |key: &str| var(key).filter(|v| !v.is_empty());
    let home = match platform {
        PlatformKind::WindowsLike => non_empty("USERPROFILE").or_else(|| non_empty("HOME")),
        PlatformKind::MacLike | PlatformKind::Other => non_empty("HOME"),
    };
    home.map(PathBuf::from)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
