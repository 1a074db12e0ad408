//! Hoopshot - headless demo session
//!
//! Places the post, runs a scripted mix of throws through the real game
//! pipeline (clean drops, an inner-ring skimmer, and a volley of long
//! flicks), then prints the session event log and the final score.

use bevy::prelude::*;
use rand::Rng;

use hoopshot::{
    BallRegistry, EventBuffer, EventBus, GameConfig, GameTuning, HOOP_SENSOR_GAP,
    HeadlessAppBuilder, InitSettings, PanVelocity, PlacementEvents, PostPlacement, PowerFactor,
    RIM_FORWARD_OFFSET, RIM_HEIGHT, ReleaseInfo, ScoreLedger, ShotTracker, ThrowCommand,
    ThrowEvents, apply_global_tuning, placement_area_size, plane_fits_post, power_factor,
};

/// Demo length in simulated frames (60 per second)
const DEMO_FRAMES: u32 = 700;

fn main() {
    let settings = InitSettings::load();
    let scale = settings.model_size().factor();

    let mut tuning = GameTuning::default();
    let tuning_result = apply_global_tuning(&mut tuning);
    tuning.ball_diameter = settings.ball_grade().diameter() * scale;

    let mut app = HeadlessAppBuilder::new().with_tuning(tuning.clone()).build();
    app.add_plugins(bevy::log::LogPlugin::default());

    if let Err(err) = tuning_result {
        warn!("{}", err);
    }
    if let Err(err) = settings.save() {
        warn!("Failed to save initial settings: {}", err);
    }

    let placements = app.world().resource::<PlacementEvents>().clone();
    let throws = app.world().resource::<ThrowEvents>().clone();

    // session log
    let mut buffer = EventBuffer::new();
    buffer.start_session(&chrono::Utc::now().to_rfc3339());
    buffer.log_config(GameConfig {
        max_balls_on_scene: tuning.max_balls_on_scene,
        three_point_distance: tuning.three_point_distance,
        throw_force_multiplier: tuning.throw_force_multiplier,
        flight_gravity: tuning.flight_gravity,
        model_size: settings.model_size.clone(),
        ball_grade: settings.ball_grade.clone(),
    });

    // pretend the tracking layer detected a 3.0 x 2.4 m plane; the post only
    // goes down if its footprint fits in some orientation
    let detected_plane = Vec2::new(3.0, 2.4);
    let required = placement_area_size(settings.model_size());
    if !plane_fits_post(detected_plane, required) {
        warn!(
            "detected plane {} too small for the post footprint {}",
            detected_plane, required
        );
        return;
    }

    // the post stands at the origin; rim geometry scales with the model
    let outer_sensor = Vec3::new(0.0, RIM_HEIGHT, RIM_FORWARD_OFFSET) * scale;
    placements.0.push(PostPlacement {
        position: Vec3::ZERO,
        scale,
    });

    let mut rng = rand::thread_rng();

    for frame in 0..DEMO_FRAMES {
        match frame {
            30 | 60 => push_drop_shot(&throws, outer_sensor, scale),
            90 => push_inner_skimmer(&throws, outer_sensor, scale),
            120..=400 if frame % 20 == 0 => push_flick(&throws, &mut rng, outer_sensor, scale),
            _ => {}
        }

        app.update();

        let drained = app.world_mut().resource_mut::<EventBus>().export_events();
        buffer.import_events(drained);
    }

    println!("{}", buffer.serialize());

    let world = app.world();
    let ledger = world.resource::<ScoreLedger>();
    let registry = world.resource::<BallRegistry>();
    let tracker = world.resource::<ShotTracker>();
    let live: Vec<String> = registry.iter().map(|(id, _)| id.to_string()).collect();
    println!();
    println!(
        "final score: {} from {} made shots ({} tracked)",
        ledger.total(),
        ledger.len(),
        tracker.tracked()
    );
    println!("balls still in play: {}", live.join(", "));
}

/// A ball released just above the rim, falling clean through both sensors
fn push_drop_shot(throws: &ThrowEvents, outer_sensor: Vec3, scale: f32) {
    let position = outer_sensor + Vec3::Y * (0.8 * scale);
    let transform = Transform::from_translation(position).looking_at(position - Vec3::Y, Vec3::Z);
    throws.0.push(ThrowCommand {
        release: ReleaseInfo {
            position,
            transform,
        },
        power: PowerFactor {
            front: 0.05,
            up: 1.0,
        },
    });
}

/// A flat shot that skims through the inner sensor without ever crossing the
/// outer one - the airball case, voided without scoring
fn push_inner_skimmer(throws: &ThrowEvents, outer_sensor: Vec3, scale: f32) {
    let inner_sensor = outer_sensor - Vec3::Y * (HOOP_SENSOR_GAP * scale);
    let position = inner_sensor + Vec3::new(0.8, 0.08, 0.0) * scale;
    let target = inner_sensor + Vec3::new(0.0, 0.08, 0.0) * scale;
    let transform = Transform::from_translation(position).looking_at(target, Vec3::Y);
    throws.0.push(ThrowCommand {
        release: ReleaseInfo {
            position,
            transform,
        },
        power: PowerFactor {
            front: 2.0,
            up: 0.1,
        },
    });
}

/// A long flick from the floor, reported the way the gesture layer would
fn push_flick(throws: &ThrowEvents, rng: &mut impl Rng, outer_sensor: Vec3, scale: f32) {
    let distance = rng.gen_range(2.0..9.0) * scale;
    let angle = rng.gen_range(-0.6..0.6_f32);
    let position = Vec3::new(
        angle.sin() * distance,
        1.7 * scale,
        angle.cos() * distance + outer_sensor.z,
    );
    let aim = outer_sensor + Vec3::Y * (1.2 * scale);
    let transform = Transform::from_translation(position).looking_at(aim, Vec3::Y);

    let pan = PanVelocity {
        x: rng.gen_range(-150.0..150.0),
        y: -rng.gen_range(2600.0..4200.0),
    };
    let Some(power) = power_factor(pan) else {
        return;
    };
    throws.0.push(ThrowCommand {
        release: ReleaseInfo {
            position,
            transform,
        },
        power,
    });
}
