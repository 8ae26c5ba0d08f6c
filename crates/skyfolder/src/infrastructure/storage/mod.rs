//! Storage infrastructure: settings file persistence.
//!
//! The `settings` sub-module handles:
//!
//! - Choosing where the settings file lives (`SettingsLocation`).
//! - Reading it, and writing platform defaults on first run.
//! - Writing changes back when the user edits or resets the folders.
//! - Resolving a folder from the stored override or the platform default.

pub mod settings;
