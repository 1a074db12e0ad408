//! Hoopshot - the game core of an AR basketball mini-game
//!
//! Place a post on a detected plane, flick balls at it with pan gestures,
//! and score 1 or 3 points when a ball drops through both rim sensors in
//! order. Rendering, world tracking, and rigid-body simulation live outside
//! this crate; the modules here own the game state between those layers:
//! the bounded ball registry, the two-stage shot outcome machine, the score
//! ledger, and the event bus the presentation layer observes.

// Core modules
pub mod bridge;
pub mod constants;
pub mod events;
pub mod models;
pub mod settings;
pub mod simulation;
pub mod testing;
pub mod tuning;

// Game logic modules
pub mod ball;
pub mod court;
pub mod input;
pub mod scoring;

// Re-export commonly used types for convenience
pub use ball::{
    Ball, BallId, BallRegistry, EvictedBall, ReleaseInfo, SensorContacts, Velocity,
    launch_queued_throws, launch_velocity,
};
pub use bridge::{
    BodyTag, ContactEnded, ContactEvents, InboundQueue, PlacementEvents, PostPlacement,
    ThrowCommand, ThrowEvents,
};
pub use constants::*;
pub use court::{
    FloorBody, HoopRing, HoopSensor, PlacedPost, Post, PostAnchor, place_post,
    placement_area_size, plane_fits_post, spawn_post_with_hoops,
};
pub use events::{
    BusEvent, EventBuffer, EventBus, GameConfig, GameEvent, serialize_event,
    update_event_bus_time,
};
pub use input::{PanVelocity, PowerFactor, power_factor};
pub use models::{BallSizeGrade, ModelError, ModelSize, NodeModel, scaled_extents};
pub use scoring::{
    HoopContact, Points, ScoreEntry, ScoreLedger, ShotOutcome, ShotTracker, classify,
    process_hoop_contacts, shot_points,
};
pub use settings::{InitSettings, SETTINGS_FILE};
pub use simulation::{
    HeadlessAppBuilder, apply_velocity, ball_gravity, detect_sensor_exits, settle_on_floor,
};
pub use testing::{Scenario, ScenarioRunner, Step, parse_scenario};
pub use tuning::{GameTuning, TUNING_FILE, TuningFile, apply_global_tuning, load_tuning_from_file};
