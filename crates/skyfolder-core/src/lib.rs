//! # skyfolder-core
//!
//! Shared domain library for Sky Folder Selector: the platform model, the
//! default game-folder resolver, and the persisted settings record.
//!
//! This crate performs no I/O.  Everything that touches the outside world
//! (environment variables, the home directory, the current directory) is read
//! through the [`Environment`] capability so callers decide where the values
//! come from: the real process in the binary, a fixed snapshot in tests.
//!
//! # Architecture overview
//!
//! Sky: Children of the Light stores screenshots in an `images` folder and
//! screen recordings in a `Record` folder under a platform-specific base
//! directory.  This crate knows where that base directory lives on each
//! platform:
//!
//! - **`domain::platform`** – [`PlatformKind`] and the [`Environment`] trait.
//! - **`domain::paths`** – [`default_base_path`] and the [`FolderKind`] enum.
//! - **`domain::settings`** – the [`Settings`] record stored on disk.

pub mod domain;

// Re-export the most-used items at the crate root so callers can write
// `skyfolder_core::Settings` instead of `skyfolder_core::domain::settings::Settings`.
pub use domain::paths::{
    default_base_path, default_folder_path, join_segments, FolderKind, ResolveError,
};
pub use domain::platform::{Environment, FixedEnvironment, PlatformKind};
pub use domain::settings::{default_settings, Settings};
