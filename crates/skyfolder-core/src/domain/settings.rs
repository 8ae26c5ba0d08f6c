//! The persisted settings record.
//!
//! On disk the record is a flat JSON object:
//!
//! ```json
//! {
//!   "images_path": "/Users/a/Library/Containers/com.tgc.sky.macos/Data/Documents/images",
//!   "record_path": "/Users/a/Library/Containers/com.tgc.sky.macos/Data/Documents/Record"
//! }
//! ```
//!
//! Both keys are always written.  An empty string means "not set, use the
//! platform default"; a key missing from a hand-edited file reads as empty.
//! Paths are not checked for existence when saved.

use serde::{Deserialize, Serialize};

use super::paths::{default_folder_path, FolderKind, ResolveError};
use super::platform::Environment;

/// User-overridable folder locations.
///
/// Field order is the serialization order, which keeps the file byte-stable
/// across load/save cycles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Screenshot folder override, empty when unset.
    #[serde(default)]
    pub images_path: String,
    /// Recording folder override, empty when unset.
    #[serde(default)]
    pub record_path: String,
}

impl Settings {
    /// Creates settings with both folders set.
    pub fn new(images_path: impl Into<String>, record_path: impl Into<String>) -> Self {
        Self {
            images_path: images_path.into(),
            record_path: record_path.into(),
        }
    }

    /// The stored path for `kind`, or `None` when empty.
    pub fn folder(&self, kind: FolderKind) -> Option<&str> {
        let value = match kind {
            FolderKind::Images => &self.images_path,
            FolderKind::Record => &self.record_path,
        };
        Some(value.as_str()).filter(|path| !path.is_empty())
    }

    /// Replaces the stored path for `kind`.
    pub fn set_folder(&mut self, kind: FolderKind, path: impl Into<String>) {
        let slot = match kind {
            FolderKind::Images => &mut self.images_path,
            FolderKind::Record => &mut self.record_path,
        };
        *slot = path.into();
    }

    /// `true` when neither folder is set.
    pub fn is_empty(&self) -> bool {
        FolderKind::ALL.iter().all(|kind| self.folder(*kind).is_none())
    }
}

/// Builds settings holding the platform-default location of both folders.
///
/// # Errors
///
/// Returns the [`ResolveError`] from the path resolver when no default exists.
pub fn default_settings(env: &dyn Environment) -> Result<Settings, ResolveError> {
    let images = default_folder_path(env, FolderKind::Images)?;
    let record = default_folder_path(env, FolderKind::Record)?;
    Ok(Settings::new(
        images.to_string_lossy(),
        record.to_string_lossy(),
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::platform::{FixedEnvironment, PlatformKind};

    #[test]
    fn test_default_settings_is_empty() {
        let settings = Settings::default();
        assert!(settings.is_empty());
        assert_eq!(settings.folder(FolderKind::Images), None);
    }

    #[test]
    fn test_empty_string_counts_as_unset() {
        // Arrange
        let settings = Settings {
            images_path: String::new(),
            record_path: "/data/Record".to_string(),
        };

        // Act / Assert
        assert_eq!(settings.folder(FolderKind::Images), None);
        assert_eq!(settings.folder(FolderKind::Record), Some("/data/Record"));
        assert!(!settings.is_empty());
    }

    #[test]
    fn test_set_folder_only_touches_requested_kind() {
        let mut settings = Settings::new("/a/images", "/a/Record");

        settings.set_folder(FolderKind::Record, "/b/Record");

        assert_eq!(settings.folder(FolderKind::Images), Some("/a/images"));
        assert_eq!(settings.folder(FolderKind::Record), Some("/b/Record"));
    }

    #[test]
    fn test_serialization_keeps_key_order_and_two_space_indent() {
        let settings = Settings::new("/a/images", "/a/Record");

        let json = serde_json::to_string_pretty(&settings).expect("serialize");

        assert_eq!(
            json,
            "{\n  \"images_path\": \"/a/images\",\n  \"record_path\": \"/a/Record\"\n}"
        );
    }

    #[test]
    fn test_serialization_writes_unset_folder_as_empty_string() {
        // Arrange
        let mut settings = Settings::default();
        settings.set_folder(FolderKind::Images, "/x/shots");

        // Act
        let json = serde_json::to_string_pretty(&settings).expect("serialize");

        // Assert
        assert_eq!(
            json,
            "{\n  \"images_path\": \"/x/shots\",\n  \"record_path\": \"\"\n}"
        );
    }

    #[test]
    fn test_serialization_keeps_non_ascii_literal() {
        let settings = Settings::new("D:\\光遇\\截图", "D:\\光遇\\录屏");

        let json = serde_json::to_string_pretty(&settings).expect("serialize");

        assert!(json.contains("光遇"), "non-ASCII must not be escaped: {json}");
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_deserialize_missing_keys_yields_unset_fields() {
        let settings: Settings = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        let json = r#"{"images_path": "/x/images", "theme": "dark"}"#;

        let settings: Settings = serde_json::from_str(json).expect("deserialize");

        assert_eq!(settings.folder(FolderKind::Images), Some("/x/images"));
        assert_eq!(settings.record_path, "");
    }

    #[test]
    fn test_deserialize_rejects_non_string_path() {
        let result: Result<Settings, _> = serde_json::from_str(r#"{"images_path": 42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_settings_on_mac_fills_both_folders() {
        let env = FixedEnvironment::new(PlatformKind::MacLike).with_home("/Users/a");

        let settings = default_settings(&env).expect("defaults");

        assert_eq!(
            settings.folder(FolderKind::Images),
            Some("/Users/a/Library/Containers/com.tgc.sky.macos/Data/Documents/images")
        );
        assert_eq!(
            settings.folder(FolderKind::Record),
            Some("/Users/a/Library/Containers/com.tgc.sky.macos/Data/Documents/Record")
        );
    }

    #[test]
    fn test_default_settings_on_other_platform_fails() {
        let env = FixedEnvironment::new(PlatformKind::Other);

        assert_eq!(
            default_settings(&env),
            Err(ResolveError::UnsupportedPlatform(PlatformKind::Other))
        );
    }
}
