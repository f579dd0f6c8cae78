//! Configuration management
//!
//! Backed by a settings.json file in the data directory:
//! ```json
//! {
//!   "app": { "catalogFile": "/path/to/catalog.csv", "exportDir": "/tmp", ... }
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    catalog_file: Option<PathBuf>,
    #[serde(default)]
    export_dir: Option<PathBuf>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Abitur configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// External CSV catalog to use instead of the bundled one
    pub catalog_file: Option<PathBuf>,
    /// Default directory for CSV exports
    pub export_dir: Option<PathBuf>,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Config {
    /// Load config from the data directory
    ///
    /// The catalog file can be set via:
    /// 1. Settings file (app.catalogFile)
    /// 2. Environment variable ABITUR_CATALOG (takes precedence)
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let catalog_file = match std::env::var("ABITUR_CATALOG") {
            Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ => raw.app.catalog_file.clone(),
        };

        Ok(Self {
            catalog_file,
            export_dir: raw.app.export_dir.clone(),
            _raw_settings: raw,
        })
    }

    /// Save config to the data directory
    ///
    /// Preserves settings that this view doesn't manage.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.catalog_file = self.catalog_file.clone();
        settings.app.export_dir = self.export_dir.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_defaults_when_no_settings_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.export_dir = Some(PathBuf::from("/tmp/exports"));
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.export_dir, Some(PathBuf::from("/tmp/exports")));
    }

    #[test]
    fn test_save_preserves_unmanaged_fields() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"app": {"theme": "dark"}, "plugins": {"x": 1}}"#,
        )
        .unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.export_dir = Some(PathBuf::from("/tmp"));
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["app"]["theme"], "dark");
        assert_eq!(value["plugins"]["x"], 1);
        assert_eq!(value["app"]["exportDir"], "/tmp");
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{broken").unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert!(config.catalog_file.is_none());
    }
}
