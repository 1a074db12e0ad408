//! Persistent session settings
//!
//! The size picker on the menu screen writes these; the game reads them at
//! launch. Stored as JSON in the config directory.

use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{BallSizeGrade, ModelSize};

/// Path to the settings file
pub const SETTINGS_FILE: &str = "config/init_settings.json";

/// Settings that survive between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitSettings {
    /// Post model size name ("real", "half", "third", "quarter", "quaver")
    pub model_size: String,
    /// Ball size grade name ("size10" through "size3")
    pub ball_grade: String,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            model_size: ModelSize::Real.name().to_string(),
            ball_grade: BallSizeGrade::Size10.name().to_string(),
        }
    }
}

impl InitSettings {
    /// Load settings from file, or return defaults if the file is missing
    pub fn load() -> Self {
        let path = Path::new(SETTINGS_FILE);
        if !path.exists() {
            info!("No init_settings.json found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Failed to parse init_settings.json: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read init_settings.json: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = Path::new(SETTINGS_FILE).parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(SETTINGS_FILE, json)
    }

    /// Resolve the configured model size, falling back to the default
    pub fn model_size(&self) -> ModelSize {
        ModelSize::from_name(&self.model_size).unwrap_or_else(|err| {
            warn!("{}, using {}", err, ModelSize::default().name());
            ModelSize::default()
        })
    }

    /// Resolve the configured ball grade, falling back to the default
    pub fn ball_grade(&self) -> BallSizeGrade {
        BallSizeGrade::from_name(&self.ball_grade).unwrap_or_else(|err| {
            warn!("{}, using {}", err, BallSizeGrade::default().name());
            BallSizeGrade::default()
        })
    }
}
