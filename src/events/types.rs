//! Event type definitions for the logging system

use serde::{Deserialize, Serialize};

use crate::ball::BallId;
use crate::court::HoopRing;

/// Game configuration snapshot, logged once per session for auditability
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConfig {
    pub max_balls_on_scene: usize,
    pub three_point_distance: f32,
    pub throw_force_multiplier: f32,
    pub flight_gravity: f32,
    pub model_size: String,
    pub ball_grade: String,
}

/// All game events that can be observed or logged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    // === Session events ===
    /// Session started (generated once per launch)
    SessionStart {
        session_id: String, // UUID v4
        timestamp: String,  // ISO 8601
    },
    /// Configuration snapshot (logged after session start)
    Config(GameConfig),

    // === Placement events ===
    /// Post placed on a detected plane
    PostPlaced { pos: (f32, f32, f32), scale: f32 },

    // === Ball events ===
    /// Ball released into the scene
    BallThrown {
        ball: BallId,
        pos: (f32, f32, f32),
        power: f32,
    },
    /// Ball removed to keep the live-ball count under the cap.
    /// The render/physics layer detaches the matching body on this event.
    BallEvicted { ball: BallId },
    /// Ball crossed a rim sensor
    HoopPass { ball: BallId, ring: HoopRing },

    // === Scoring events ===
    /// Shot counted; `total` is the running score after the append
    Score {
        ball: BallId,
        points: u32,
        total: u32,
    },
}

impl GameEvent {
    /// Event type code for compact log lines
    pub fn type_code(&self) -> &'static str {
        match self {
            GameEvent::SessionStart { .. } => "SE",
            GameEvent::Config(_) => "CF",
            GameEvent::PostPlaced { .. } => "PP",
            GameEvent::BallThrown { .. } => "BT",
            GameEvent::BallEvicted { .. } => "BE",
            GameEvent::HoopPass { .. } => "HP",
            GameEvent::Score { .. } => "G",
        }
    }
}
