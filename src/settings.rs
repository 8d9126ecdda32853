//! Game settings and preferences
//!
//! Stored as JSON next to the binary. A missing or malformed file falls
//! back to defaults; saving is best-effort.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Mute all audio
    pub muted: bool,
    /// Fixed RNG seed; `None` draws one from OS entropy at startup
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Settings file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "starlane_settings.json";

    /// Load settings from the default location
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    /// Load settings from a path, defaulting on any failure
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("settings file {} is malformed: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings to the default location
    pub fn save(&self) {
        self.save_to(Path::new(Self::FILE_NAME));
    }

    /// Save settings to a path, logging on failure
    pub fn save_to(&self, path: &Path) {
        let json = match serde_json::to_string_pretty(self) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("could not encode settings: {err}");
                return;
            }
        };
        match fs::write(path, json) {
            Ok(()) => log::info!("settings saved to {}", path.display()),
            Err(err) => log::warn!("could not write {}: {err}", path.display()),
        }
    }
}
