//! Global gameplay tuning (decoupled from any UI)

use std::path::Path;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Path to the gameplay tuning config
pub const TUNING_FILE: &str = "config/game_tuning.json";

// Serde defaults so a partial config file still loads
fn default_max_balls_on_scene() -> usize {
    MAX_BALLS_ON_SCENE
}
fn default_three_point_distance() -> f32 {
    THREE_POINT_DISTANCE
}
fn default_throw_force_multiplier() -> f32 {
    THROW_FORCE_MULTIPLIER
}
fn default_flight_gravity() -> f32 {
    FLIGHT_GRAVITY
}
fn default_ball_diameter() -> f32 {
    BALL_DIAMETER
}

/// Serializable tuning values stored in config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningFile {
    #[serde(default = "default_max_balls_on_scene")]
    pub max_balls_on_scene: usize,
    #[serde(default = "default_three_point_distance")]
    pub three_point_distance: f32,
    #[serde(default = "default_throw_force_multiplier")]
    pub throw_force_multiplier: f32,
    #[serde(default = "default_flight_gravity")]
    pub flight_gravity: f32,
    #[serde(default = "default_ball_diameter")]
    pub ball_diameter: f32,
}

impl Default for TuningFile {
    fn default() -> Self {
        Self {
            max_balls_on_scene: default_max_balls_on_scene(),
            three_point_distance: default_three_point_distance(),
            throw_force_multiplier: default_throw_force_multiplier(),
            flight_gravity: default_flight_gravity(),
            ball_diameter: default_ball_diameter(),
        }
    }
}

impl TuningFile {
    pub fn apply_to(&self, tuning: &mut GameTuning) {
        tuning.max_balls_on_scene = self.max_balls_on_scene;
        tuning.three_point_distance = self.three_point_distance;
        tuning.throw_force_multiplier = self.throw_force_multiplier;
        tuning.flight_gravity = self.flight_gravity;
        tuning.ball_diameter = self.ball_diameter;
    }
}

/// Runtime tuning values
#[derive(Resource, Debug, Clone)]
pub struct GameTuning {
    pub max_balls_on_scene: usize,
    pub three_point_distance: f32,
    pub throw_force_multiplier: f32,
    pub flight_gravity: f32,
    pub ball_diameter: f32,
}

impl Default for GameTuning {
    fn default() -> Self {
        let defaults = TuningFile::default();
        Self {
            max_balls_on_scene: defaults.max_balls_on_scene,
            three_point_distance: defaults.three_point_distance,
            throw_force_multiplier: defaults.throw_force_multiplier,
            flight_gravity: defaults.flight_gravity,
            ball_diameter: defaults.ball_diameter,
        }
    }
}

pub fn load_tuning_from_file(path: &str) -> Result<TuningFile, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path, e))
}

/// Apply the tuning file if present; a missing file means defaults, a broken
/// one falls back to defaults and reports why.
pub fn apply_global_tuning(tuning: &mut GameTuning) -> Result<(), String> {
    if !Path::new(TUNING_FILE).exists() {
        TuningFile::default().apply_to(tuning);
        return Ok(());
    }
    match load_tuning_from_file(TUNING_FILE) {
        Ok(file) => {
            file.apply_to(tuning);
            Ok(())
        }
        Err(err) => {
            TuningFile::default().apply_to(tuning);
            Err(err)
        }
    }
}
