//! Infrastructure layer.
//!
//! Contains the OS-facing adapters: the live process environment, the JSON
//! settings file, and the native "reveal folder" mechanisms.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `skyfolder_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`environment`** – `SystemEnvironment`, the [`Environment`] backed by
//!   `std::env`.
//!
//! - **`storage`** – `SettingsStore`: loads, self-heals and saves the settings
//!   file, and resolves folders from it.
//!
//! - **`opener`** – [`FolderOpener`] implementations.  The native one is chosen
//!   from the detected platform: Win32 `ShellExecuteW`, `open`, or `xdg-open`.
//!   A `MockFolderOpener` is also provided for tests.
//!
//! [`Environment`]: skyfolder_core::Environment
//! [`FolderOpener`]: crate::application::open_folders::FolderOpener

pub mod environment;
pub mod opener;
pub mod storage;
