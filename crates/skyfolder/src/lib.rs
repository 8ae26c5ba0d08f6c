//! skyfolder library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does sky-folder do?
//!
//! Sky: Children of the Light saves screenshots and screen recordings into
//! folders buried deep inside the user profile.  `sky-folder` finds them and
//! reveals them in the platform file manager:
//!
//! 1. Load the settings file, creating it with the platform defaults on first run.
//! 2. Resolve the requested folder: the stored override if set, otherwise
//!    `<base>/images` or `<base>/Record`.
//! 3. Check that the folder exists.
//! 4. Ask the OS to open it (`ShellExecuteW` on Windows, `open` on macOS,
//!    `xdg-open` elsewhere).

/// Application layer: the folder-opening use case and its ports.
pub mod application;

/// Infrastructure layer: process environment, settings storage, native openers.
pub mod infrastructure;
