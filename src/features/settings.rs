//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ui::swipe::SwipeConfig;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Initial window geometry
    #[serde(default)]
    pub window: WindowSettings,
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Card gesture and motion settings
    #[serde(default)]
    pub swipe: SwipeSettings,
    /// Users file to load instead of the built-in deck
    #[serde(default)]
    pub users_path: Option<PathBuf>,
}

/// Window-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

/// Display-related settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
}

/// Card gesture and motion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeSettings {
    /// Releasing left of this offset dismisses the card
    pub dismiss_threshold: f32,
    /// Entry animation starts this far below the resting position
    pub entry_offset: f32,
    pub entry_bounciness: f32,
    pub return_bounciness: f32,
    pub spring_speed: f32,
    /// Entry fade duration in milliseconds
    pub fade_duration_ms: u64,
    /// Tilt at a full window width of displacement
    pub max_rotation_degrees: f32,
    /// Pointer travel below which a press is still a tap
    pub tap_slop: f32,
}

impl SwipeSettings {
    /// Convert to the card configuration, sanitising out-of-range values
    pub fn to_config(&self) -> SwipeConfig {
        let defaults = SwipeConfig::default();
        SwipeConfig {
            dismiss_threshold: finite_or(self.dismiss_threshold, defaults.dismiss_threshold),
            entry_offset: finite_or(self.entry_offset, defaults.entry_offset),
            entry_bounciness: finite_or(self.entry_bounciness, defaults.entry_bounciness)
                .max(0.0),
            return_bounciness: finite_or(self.return_bounciness, defaults.return_bounciness)
                .max(0.0),
            spring_speed: if self.spring_speed.is_finite() && self.spring_speed > 0.0 {
                self.spring_speed
            } else {
                defaults.spring_speed
            },
            fade_duration: Duration::from_millis(self.fade_duration_ms),
            max_rotation_degrees: finite_or(
                self.max_rotation_degrees,
                defaults.max_rotation_degrees,
            ),
            tap_slop: finite_or(self.tap_slop, defaults.tap_slop).max(0.0),
        }
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            display: DisplaySettings::default(),
            swipe: SwipeSettings::default(),
            users_path: None,
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 760.0,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Default for SwipeSettings {
    fn default() -> Self {
        let config = SwipeConfig::default();
        Self {
            dismiss_threshold: config.dismiss_threshold,
            entry_offset: config.entry_offset,
            entry_bounciness: config.entry_bounciness,
            return_bounciness: config.return_bounciness,
            spring_speed: config.spring_speed,
            fade_duration_ms: config.fade_duration.as_millis() as u64,
            max_rotation_degrees: config.max_rotation_degrees,
            tap_slop: config.tap_slop,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "swipecard", "Swipecard")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    ///
    /// The error, if any, is returned alongside the settings in use so the
    /// caller can report it.
    pub fn load() -> (Self, Option<SettingsError>) {
        match Self::file_path() {
            Some(path) => Self::load_or_init(&path),
            None => (
                Self::default(),
                Some(SettingsError::Io(
                    "Could not determine config directory".to_string(),
                )),
            ),
        }
    }

    /// Load settings from `path`, writing defaults there on first run
    pub fn load_or_init(path: &Path) -> (Self, Option<SettingsError>) {
        match Self::load_from_file(path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                (settings, None)
            }
            Err(SettingsError::Io(_)) if !path.exists() => {
                // First run: write the defaults out so they can be edited
                let settings = Self::default();
                let error = settings.save_to_file(path).err();
                if let Some(e) = &error {
                    tracing::warn!("Failed to write default settings: {}", e);
                }
                (settings, error)
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid settings file {}: {}", path.display(), e);
                (Self::default(), Some(e))
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
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
