//! Native "reveal folder" implementations.
//!
//! | Platform    | Mechanism                               | Type            |
//! |-------------|-----------------------------------------|-----------------|
//! | WindowsLike | `ShellExecuteW` with the `open` verb    | `ShellOpener`   |
//! | MacLike     | `open <path>`                           | [`CommandOpener`] |
//! | Other       | `xdg-open <path>`                       | [`CommandOpener`] |
//!
//! The Win32 implementation is only compiled on Windows.  A
//! [`MockFolderOpener`](mock::MockFolderOpener) is always compiled so tests on
//! any platform can use it.

use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::Arc;

use skyfolder_core::PlatformKind;
use tracing::debug;

use crate::application::open_folders::{FolderOpener, LaunchError};

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

/// Helper program used on macOS.
pub const MACOS_OPEN_PROGRAM: &str = "open";

/// Helper program used on every platform without a dedicated opener.
pub const XDG_OPEN_PROGRAM: &str = "xdg-open";

/// Opens folders by spawning a helper program with the path as its only
/// argument.
///
/// The child is not waited for; a failure inside the helper after it started
/// is not observed.
#[derive(Debug, Clone)]
pub struct CommandOpener {
    program: String,
}

impl CommandOpener {
    /// Creates an opener that runs `program <path>`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The helper program name.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl FolderOpener for CommandOpener {
    fn reveal(&self, path: &Path) -> Result<(), LaunchError> {
        let child = Command::new(&self.program)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        debug!(program = %self.program, pid = child.id(), "spawned folder opener");
        Ok(())
    }
}

/// Returns the native opener for `platform`.
///
/// On a non-Windows build `WindowsLike` cannot be detected, so it shares the
/// `xdg-open` fallback.
pub fn native_opener(platform: PlatformKind) -> Arc<dyn FolderOpener> {
    match platform {
        #[cfg(target_os = "windows")]
        PlatformKind::WindowsLike => Arc::new(windows::ShellOpener),
        PlatformKind::MacLike => Arc::new(CommandOpener::new(MACOS_OPEN_PROGRAM)),
        _ => Arc::new(CommandOpener::new(XDG_OPEN_PROGRAM)),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_opener_reports_missing_program_as_spawn_error() {
        // Arrange
        let opener = CommandOpener::new("skyfolder-no-such-opener-program");

        // Act
        let result = opener.reveal(&std::env::temp_dir());

        // Assert
        match result {
            Err(LaunchError::Spawn { program, source }) => {
                assert_eq!(program, "skyfolder-no-such-opener-program");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Spawn error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_command_opener_succeeds_when_program_starts() {
        // `true` ignores its argument and exits 0.
        let opener = CommandOpener::new("true");

        assert!(opener.reveal(&std::env::temp_dir()).is_ok());
    }

    #[test]
    fn test_spawn_error_message_names_program() {
        let err = CommandOpener::new("skyfolder-no-such-opener-program")
            .reveal(&std::env::temp_dir())
            .unwrap_err();

        assert!(err.to_string().contains("skyfolder-no-such-opener-program"));
    }

    #[test]
    fn test_program_accessor_returns_configured_name() {
        assert_eq!(CommandOpener::new(XDG_OPEN_PROGRAM).program(), "xdg-open");
    }
}
