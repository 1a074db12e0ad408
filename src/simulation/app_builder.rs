//! Headless app builder
//!
//! One place to assemble a runnable headless game: resources, inbound
//! queues, and the core system chain. Used by the demo binary, the scenario
//! runner, and app-level tests.

use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::prelude::*;

use crate::ball::{BallRegistry, launch_queued_throws};
use crate::bridge::{ContactEvents, PlacementEvents, ThrowEvents};
use crate::court::{PostAnchor, place_post};
use crate::events::{EventBus, update_event_bus_time};
use crate::scoring::{ScoreLedger, ShotTracker, process_hoop_contacts};
use crate::tuning::{self, GameTuning};

use super::flight::{apply_velocity, ball_gravity, detect_sensor_exits, settle_on_floor};

/// Builder for headless game apps
pub struct HeadlessAppBuilder {
    fps: f32,
    minimal_threads: bool,
    with_flight: bool,
    tuning: Option<GameTuning>,
}

impl HeadlessAppBuilder {
    pub fn new() -> Self {
        Self {
            fps: 60.0,
            minimal_threads: false,
            with_flight: true,
            tuning: None,
        }
    }

    /// Set the target FPS (default: 60)
    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    /// Reduce Bevy's task pools to a single thread.
    /// Needed when many apps run in parallel (test suites).
    pub fn with_minimal_threads(mut self) -> Self {
        self.minimal_threads = true;
        self
    }

    /// Skip the stand-in flight systems; the caller feeds the contact queue
    /// itself, the way the platform physics layer would.
    pub fn without_flight(mut self) -> Self {
        self.with_flight = false;
        self
    }

    /// Use specific tuning values instead of the config file
    pub fn with_tuning(mut self, tuning: GameTuning) -> Self {
        self.tuning = Some(tuning);
        self
    }

    /// Build the app: MinimalPlugins, TransformPlugin, every core resource,
    /// and the game pipeline in the Update schedule.
    pub fn build(self) -> App {
        let mut app = App::new();

        if self.minimal_threads {
            app.add_plugins(
                MinimalPlugins
                    .set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f32(
                        1.0 / self.fps,
                    )))
                    .set(TaskPoolPlugin {
                        task_pool_options: TaskPoolOptions::with_num_threads(1),
                    }),
            );
        } else {
            app.add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
                Duration::from_secs_f32(1.0 / self.fps),
            )));
        }

        // GlobalTransform propagation for the sensor children
        app.add_plugins(bevy::transform::TransformPlugin);

        let tuning = self.tuning.unwrap_or_else(|| {
            let mut tuning = GameTuning::default();
            if let Err(err) = tuning::apply_global_tuning(&mut tuning) {
                warn!("{}", err);
            }
            tuning
        });

        app.insert_resource(BallRegistry::with_capacity(tuning.max_balls_on_scene));
        app.insert_resource(tuning);
        app.init_resource::<PostAnchor>();
        app.init_resource::<ShotTracker>();
        app.init_resource::<ScoreLedger>();
        app.init_resource::<ContactEvents>();
        app.init_resource::<ThrowEvents>();
        app.init_resource::<PlacementEvents>();
        app.insert_resource(EventBus::new());

        app.add_systems(Update, update_event_bus_time);
        if self.with_flight {
            app.add_systems(
                Update,
                (
                    place_post,
                    launch_queued_throws,
                    ball_gravity,
                    apply_velocity,
                    settle_on_floor,
                    detect_sensor_exits,
                    process_hoop_contacts,
                )
                    .chain(),
            );
        } else {
            app.add_systems(
                Update,
                (place_post, launch_queued_throws, process_hoop_contacts).chain(),
            );
        }

        app
    }
}

impl Default for HeadlessAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creates_app_with_core_resources() {
        let app = HeadlessAppBuilder::new().build();
        assert!(app.world().contains_resource::<BallRegistry>());
        assert!(app.world().contains_resource::<ScoreLedger>());
        assert!(app.world().contains_resource::<ShotTracker>());
        assert!(app.world().contains_resource::<PostAnchor>());
        assert!(app.world().contains_resource::<EventBus>());
    }

    #[test]
    fn test_registry_capacity_follows_tuning() {
        let tuning = GameTuning {
            max_balls_on_scene: 3,
            ..Default::default()
        };
        let app = HeadlessAppBuilder::new().with_tuning(tuning).build();
        assert_eq!(app.world().resource::<BallRegistry>().capacity(), 3);
    }

    #[test]
    fn test_minimal_threads_app_updates() {
        let mut app = HeadlessAppBuilder::new().with_minimal_threads().build();
        app.update();
        app.update();
    }
}
