//! Mock folder opener for testing.
//!
//! The real openers pop up file-manager windows on the machine running the
//! tests and give no way to observe what was opened.  `MockFolderOpener`
//! records each path instead so assertions can check exactly which folders
//! were revealed and in what order.
//!
//! Set `should_fail = true` to make every call return a
//! [`LaunchError::Platform`], which exercises the launch-failure path.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::open_folders::{FolderOpener, LaunchError};

/// A folder opener that records calls without performing OS calls.
#[derive(Default)]
pub struct MockFolderOpener {
    /// Paths passed to `reveal`, in call order.
    pub revealed: Mutex<Vec<PathBuf>>,
    /// When `true`, every call fails with `LaunchError::Platform`.
    pub should_fail: bool,
}

impl MockFolderOpener {
    /// Creates a recording opener that succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an opener whose every call fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Snapshot of the paths revealed so far.
    pub fn revealed_paths(&self) -> Vec<PathBuf> {
        self.revealed
            .lock()
            .map(|paths| paths.clone())
            .unwrap_or_default()
    }
}

impl FolderOpener for MockFolderOpener {
    fn reveal(&self, path: &Path) -> Result<(), LaunchError> {
        if self.should_fail {
            return Err(LaunchError::Platform("mock failure".into()));
        }
        if let Ok(mut revealed) = self.revealed.lock() {
            revealed.push(path.to_path_buf());
        }
        Ok(())
    }
}
