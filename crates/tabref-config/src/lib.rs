use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file at {settings_path}: {source}")]
    SettingsReadError {
        settings_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file at {settings_path}: {source}")]
    SettingsParseError {
        settings_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Persisted feature settings.
///
/// Loading merges the stored file over the defaults: keys present in the
/// file win, missing keys take their default. The whole struct is written
/// back on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether double-clicking a tab header copies its link.
    pub enable_double_click: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_double_click: true,
        }
    }
}

impl Settings {
    pub fn load_from_path<P: AsRef<Path>>(settings_path: P) -> Result<Option<Self>, SettingsError> {
        let settings_path = settings_path.as_ref();
        if !settings_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(settings_path).map_err(|source| {
            SettingsError::SettingsReadError {
                settings_path: settings_path.to_path_buf(),
                source,
            }
        })?;

        let settings: Settings =
            toml::from_str(&content).map_err(|source| SettingsError::SettingsParseError {
                settings_path: settings_path.to_path_buf(),
                source,
            })?;

        Ok(Some(settings))
    }

    pub fn load() -> Result<Option<Self>, SettingsError> {
        let settings_path = Self::config_path();
        Self::load_from_path(&settings_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, settings_path: P) -> anyhow::Result<()> {
        let settings_path = settings_path.as_ref();
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(settings_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::config_path();
        self.save_to_path(&settings_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/tabref");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let settings_path = Settings::config_path();
        let path_str = settings_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/tabref/config.toml"));
    }

    #[test]
    fn test_double_click_defaults_to_enabled() {
        let settings = Settings::default();
        assert!(settings.enable_double_click);
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let original = Settings {
            enable_double_click: false,
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Settings = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_empty_file_falls_back_to_defaults() {
        // A settings file with no recognized keys merges to all defaults.
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_stored_keys_take_precedence_over_defaults() {
        let settings: Settings = toml::from_str("enable_double_click = false\n").unwrap();
        assert!(!settings.enable_double_click);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        // A file written by a newer build stays loadable.
        let settings: Settings =
            toml::from_str("enable_double_click = false\nfuture_option = 3\n").unwrap();
        assert!(!settings.enable_double_click);
    }

    #[test]
    fn test_load_settings_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent = temp_dir.path().join("nonexistent.toml");

        let result = Settings::load_from_path(&non_existent).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let settings_file = temp_dir.path().join("config.toml");
        std::fs::write(&settings_file, "enable_double_click = \"sideways\"").unwrap();

        let result = Settings::load_from_path(&settings_file);

        assert!(matches!(
            result,
            Err(SettingsError::SettingsParseError { .. })
        ));
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = TempDir::new().unwrap();
        let settings_file = temp_dir.path().join("config.toml");
        let test_settings = Settings {
            enable_double_click: false,
        };

        test_settings.save_to_path(&settings_file).unwrap();
        let loaded = Settings::load_from_path(&settings_file).unwrap().unwrap();

        assert_eq!(loaded, test_settings);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let settings_file = temp_dir.path().join("nested").join("config.toml");
        let test_settings = Settings::default();

        test_settings.save_to_path(&settings_file).unwrap();

        assert!(settings_file.exists(), "Settings file should exist");
        let loaded = Settings::load_from_path(&settings_file).unwrap().unwrap();
        assert_eq!(loaded, test_settings);
    }
}
