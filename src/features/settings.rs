//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::slide::ImageHeight;

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Carousel behaviour
    #[serde(default)]
    pub carousel: CarouselSettings,
    /// Storage settings
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
}

/// Carousel settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarouselSettings {
    /// Image height for slides that do not set their own
    #[serde(default)]
    pub default_image_height: ImageHeight,
    /// Deck to open on startup (built-in sample deck when unset)
    #[serde(default)]
    pub deck: Option<PathBuf>,
    /// Let the application own the slide index instead of the carousel
    #[serde(default)]
    pub controlled: bool,
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Custom directory for downloaded slide images (None = default)
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "carousel", "Carousel")
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring settings at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Directory downloaded slide images are kept in
    pub fn image_cache_dir(&self) -> PathBuf {
        self.storage.cache_dir.clone().unwrap_or_else(|| {
            project_dirs()
                .map(|dirs| dirs.cache_dir().join("slides"))
                .unwrap_or_else(|| std::env::temp_dir().join("carousel-slides"))
        })
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}
