//! Platform detection and the environment capability.
//!
//! # Why an `Environment` trait?
//!
//! The default game folder depends on the operating system, on `%APPDATA%`
//! (Windows) and on the user's home directory (macOS).  Reading those values
//! straight from `std::env` would make the resolver untestable: a test running
//! on Linux could never exercise the Windows branch.
//!
//! Instead, every component that needs them receives an `Environment`
//! implementation at construction time:
//!
//! | Implementation      | Crate              | Use                          |
//! |---------------------|--------------------|------------------------------|
//! | `SystemEnvironment` | `skyfolder`        | The real process environment |
//! | [`FixedEnvironment`]| `skyfolder-core`   | Tests and previews           |

use std::collections::HashMap;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

/// The three platform branches that drive default-path computation and the
/// choice of folder-open mechanism.
///
/// Derived once at process start and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    /// Windows: `%APPDATA%` based paths, Win32 shell-open.
    WindowsLike,
    /// macOS: sandbox container under the home directory, `open`.
    MacLike,
    /// Everything else: no known default, `xdg-open`.
    Other,
}

impl PlatformKind {
    /// Detects the platform of the running process.
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Maps an OS identifier as reported by `std::env::consts::OS`.
    pub fn from_os_name(os: &str) -> Self {
        match os {
            "windows" => Self::WindowsLike,
            "macos" => Self::MacLike,
            _ => Self::Other,
        }
    }

    /// Human-readable platform name shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::WindowsLike => "Windows",
            Self::MacLike => "macOS",
            Self::Other => "other",
        }
    }

    /// Path separator used when composing paths for this platform.
    pub fn separator(self) -> char {
        match self {
            Self::WindowsLike => '\\',
            Self::MacLike | Self::Other => '/',
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Read-only view of the process environment.
///
/// Implementors must be cheap to query; values are read on demand rather
/// than cached so a fixed snapshot and the live process behave the same way.
pub trait Environment: Send + Sync {
    /// The platform branch this environment represents.
    fn platform(&self) -> PlatformKind;

    /// Returns the value of environment variable `key`, if set.
    fn var(&self, key: &str) -> Option<OsString>;

    /// The current user's home directory, if it can be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    /// The process working directory, if it can be determined.
    fn current_dir(&self) -> Option<PathBuf>;
}

/// An [`Environment`] backed by a fixed snapshot of values.
///
/// Does not consult the real process at all, so the Windows branch can be
/// exercised on a macOS build machine and vice versa.
///
/// # Example
///
/// ```
/// use skyfolder_core::{default_base_path, FixedEnvironment, PlatformKind};
///
/// let env = FixedEnvironment::new(PlatformKind::MacLike).with_home("/Users/a");
/// let base = default_base_path(&env).unwrap();
/// assert!(base.ends_with("Documents"));
/// ```
#[derive(Debug, Clone)]
pub struct FixedEnvironment {
    pub platform: PlatformKind,
    pub vars: HashMap<String, OsString>,
    pub home: Option<PathBuf>,
    pub cwd: Option<PathBuf>,
}

impl FixedEnvironment {
    /// Creates an empty snapshot for `platform`: no variables, no home, no cwd.
    pub fn new(platform: PlatformKind) -> Self {
        Self {
            platform,
            vars: HashMap::new(),
            home: None,
            cwd: None,
        }
    }

    /// Adds (or replaces) an environment variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Sets the home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Sets the working directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

impl Environment for FixedEnvironment {
    fn platform(&self) -> PlatformKind {
        self.platform
    }

    fn var(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn current_dir(&self) -> Option<PathBuf> {
        self.cwd.clone()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os_name_maps_windows_and_macos() {
        assert_eq!(PlatformKind::from_os_name("windows"), PlatformKind::WindowsLike);
        assert_eq!(PlatformKind::from_os_name("macos"), PlatformKind::MacLike);
    }

    #[test]
    fn test_from_os_name_maps_everything_else_to_other() {
        for os in ["linux", "freebsd", "android", "ios", ""] {
            assert_eq!(PlatformKind::from_os_name(os), PlatformKind::Other, "os={os}");
        }
    }

    #[test]
    fn test_detect_matches_compile_target() {
        let detected = PlatformKind::detect();

        #[cfg(target_os = "windows")]
        assert_eq!(detected, PlatformKind::WindowsLike);
        #[cfg(target_os = "macos")]
        assert_eq!(detected, PlatformKind::MacLike);
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        assert_eq!(detected, PlatformKind::Other);
    }

    #[test]
    fn test_separator_is_backslash_only_on_windows() {
        assert_eq!(PlatformKind::WindowsLike.separator(), '\\');
        assert_eq!(PlatformKind::MacLike.separator(), '/');
        assert_eq!(PlatformKind::Other.separator(), '/');
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(PlatformKind::MacLike.to_string(), "macOS");
        assert_eq!(PlatformKind::WindowsLike.to_string(), "Windows");
    }

    #[test]
    fn test_fixed_environment_returns_only_configured_values() {
        // Arrange
        let env = FixedEnvironment::new(PlatformKind::Other)
            .with_var("APPDATA", "C:\\data")
            .with_home("/home/a");

        // Act / Assert
        assert_eq!(env.var("APPDATA"), Some(OsString::from("C:\\data")));
        assert_eq!(env.var("HOME"), None);
        assert_eq!(env.home_dir(), Some(PathBuf::from("/home/a")));
        assert_eq!(env.current_dir(), None);
        assert_eq!(env.platform(), PlatformKind::Other);
    }
}
