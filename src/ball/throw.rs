//! Ball throw system - turns queued throw commands into live balls

use bevy::prelude::*;

use crate::bridge::ThrowEvents;
use crate::events::{EventBus, GameEvent};
use crate::input::PowerFactor;
use crate::scoring::ShotTracker;
use crate::tuning::GameTuning;

use super::components::{Ball, ReleaseInfo, SensorContacts, Velocity};
use super::registry::BallRegistry;

/// Launch velocity for a throw.
///
/// The camera's forward axis carries the shot: its x/z components are scaled
/// by the forward power (force multiplier x gesture front factor), its y
/// component by the gesture's up factor. Aiming the camera above the rim is
/// what gives the shot its arc.
pub fn launch_velocity(
    release: &ReleaseInfo,
    power: &PowerFactor,
    force_multiplier: f32,
) -> Vec3 {
    let forward = release.transform.forward();
    let front = force_multiplier * power.front;
    Vec3::new(forward.x * front, forward.y * power.up, forward.z * front)
}

/// Drain queued throws: spawn each ball half a diameter in front of the
/// camera, register it, and despawn whatever the registry evicted to stay
/// under the cap.
pub fn launch_queued_throws(
    mut commands: Commands,
    throws: Res<ThrowEvents>,
    tuning: Res<GameTuning>,
    mut registry: ResMut<BallRegistry>,
    mut tracker: ResMut<ShotTracker>,
    mut bus: ResMut<EventBus>,
) {
    for cmd in throws.0.drain() {
        let velocity = launch_velocity(&cmd.release, &cmd.power, tuning.throw_force_multiplier);
        let spawn_pos =
            cmd.release.position + cmd.release.transform.forward() * (tuning.ball_diameter * 0.5);

        let entity = commands
            .spawn((
                Ball,
                Transform::from_translation(spawn_pos),
                Velocity(velocity),
                cmd.release,
                SensorContacts::default(),
            ))
            .id();

        let (id, evicted) = registry.register(entity);
        commands.entity(entity).insert(id);
        tracker.track(id);
        bus.emit(GameEvent::BallThrown {
            ball: id,
            pos: spawn_pos.into(),
            power: tuning.throw_force_multiplier * cmd.power.front,
        });

        if let Some(victim) = evicted {
            tracker.forget(victim.id);
            commands.entity(victim.entity).despawn();
            bus.emit(GameEvent::BallEvicted { ball: victim.id });
            info!(
                "{} evicted to stay under the {}-ball cap",
                victim.id,
                registry.capacity()
            );
        }
    }
}
