//! Application settings persistence
//!
//! Handles saving and loading user preferences, including the slider
//! descriptions the demo window is built from.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ui::primitives::SliderDescription;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Sliders shown in the main window
    #[serde(default)]
    pub sliders: SliderSettings,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Use the dark theme
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    /// Index into the demo tint cycle
    #[serde(default)]
    pub tint_index: usize,
}

fn default_true() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            tint_index: 0,
        }
    }
}

/// Demo slider descriptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSettings {
    /// Continuous slider, 0 to 100
    #[serde(default = "default_volume")]
    pub volume: SliderDescription,
    /// Discrete slider, 0 to 1
    #[serde(default = "default_brightness")]
    pub brightness: SliderDescription,
}

fn default_volume() -> SliderDescription {
    SliderDescription {
        value: 40.0,
        minimum_value: 0.0,
        maximum_value: 100.0,
        continuous: true,
        ..SliderDescription::default()
    }
}

fn default_brightness() -> SliderDescription {
    SliderDescription {
        value: 0.5,
        minimum_track_tint_color: Some("#1e90ff".to_string()),
        ..SliderDescription::default()
    }
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            brightness: default_brightness(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "popslider", "PopSlider")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::file_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to_file(&path)
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Could not determine config directory")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.display.tint_index = 2;
        settings.sliders.volume.value = 75.0;
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "display": { "dark_mode": false } }"#).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert!(!loaded.display.dark_mode);
        assert_eq!(loaded.sliders, SliderSettings::default());
        assert!(loaded.sliders.volume.continuous);
        assert!(!loaded.sliders.brightness.continuous);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = Settings::load_from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(error, SettingsError::Io(_)));
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let error = Settings::load_from_file(&path).unwrap_err();
        assert!(matches!(error, SettingsError::Parse(_)));
        assert!(error.to_string().starts_with("Parse error"));
    }
}
