//! Stand-in flight model
//!
//! On device the collision stream comes from the platform physics engine.
//! The headless harness flies balls itself and reports the same
//! contact-ended events that engine would, through the same queue, so the
//! scoring pipeline cannot tell the difference.

use bevy::prelude::*;

use crate::ball::{Ball, BallId, SensorContacts, Velocity};
use crate::bridge::{BodyTag, ContactEnded, ContactEvents};
use crate::constants::FLIGHT_MIN_DT;
use crate::court::{HoopRing, HoopSensor};
use crate::tuning::GameTuning;

/// Integrate ball positions
pub fn apply_velocity(
    mut query: Query<(&mut Transform, &Velocity), With<Ball>>,
    time: Res<Time>,
) {
    // minimum dt keeps tight test loops stepping at a sane rate
    let dt = time.delta_secs().max(FLIGHT_MIN_DT);

    for (mut transform, velocity) in &mut query {
        transform.translation += velocity.0 * dt;
    }
}

/// Pull flying balls down
pub fn ball_gravity(
    tuning: Res<GameTuning>,
    mut query: Query<&mut Velocity, With<Ball>>,
    time: Res<Time>,
) {
    let dt = time.delta_secs().max(FLIGHT_MIN_DT);

    for mut velocity in &mut query {
        velocity.0.y -= tuning.flight_gravity * dt;
    }
}

/// Rest falling balls on the floor plane and report the floor contact
pub fn settle_on_floor(
    contacts: Res<ContactEvents>,
    mut query: Query<(&BallId, &mut Transform, &mut Velocity), With<Ball>>,
) {
    for (id, mut transform, mut velocity) in &mut query {
        if transform.translation.y < 0.0 && velocity.0.y < 0.0 {
            transform.translation.y = 0.0;
            velocity.0 = Vec3::ZERO;
            contacts.0.push(ContactEnded {
                a: BodyTag::Ball(*id),
                b: BodyTag::Floor,
            });
        }
    }
}

/// Report contact-ended events as balls leave the rim sensor zones.
/// Each sensor is a squat cylinder; the event fires on the inside-to-outside
/// edge, matching the physics engine's "contact did end" callback.
pub fn detect_sensor_exits(
    contacts: Res<ContactEvents>,
    sensors: Query<(&GlobalTransform, &HoopSensor)>,
    mut balls: Query<(&BallId, &GlobalTransform, &mut SensorContacts), With<Ball>>,
) {
    for (id, ball_transform, mut touching) in &mut balls {
        let pos = ball_transform.translation();

        let mut outer_now = false;
        let mut inner_now = false;
        for (sensor_transform, sensor) in &sensors {
            let delta = pos - sensor_transform.translation();
            let horizontal = Vec2::new(delta.x, delta.z).length();
            if horizontal <= sensor.radius && delta.y.abs() <= sensor.half_height {
                match sensor.ring {
                    HoopRing::Outer => outer_now = true,
                    HoopRing::Inner => inner_now = true,
                }
            }
        }

        if touching.outer && !outer_now {
            contacts.0.push(ContactEnded {
                a: BodyTag::Ball(*id),
                b: BodyTag::OuterHoop,
            });
        }
        if touching.inner && !inner_now {
            contacts.0.push(ContactEnded {
                a: BodyTag::Ball(*id),
                b: BodyTag::InnerHoop,
            });
        }

        touching.outer = outer_now;
        touching.inner = inner_now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::HeadlessAppBuilder;

    fn drop_ball(app: &mut App, position: Vec3, velocity: Vec3) -> Entity {
        app.world_mut()
            .spawn((
                Ball,
                BallId(900),
                Transform::from_translation(position),
                Velocity(velocity),
                SensorContacts::default(),
            ))
            .id()
    }

    #[test]
    fn test_gravity_accelerates_a_dropped_ball_downward() {
        let mut app = HeadlessAppBuilder::new().build();
        let entity = drop_ball(&mut app, Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO);

        for _ in 0..10 {
            app.update();
        }

        let transform = app.world().get::<Transform>(entity).unwrap();
        let velocity = app.world().get::<Velocity>(entity).unwrap();
        assert!(transform.translation.y < 5.0, "ball should fall");
        assert!(velocity.0.y < 0.0, "ball should be moving down");
    }

    #[test]
    fn test_balls_settle_on_the_floor() {
        let mut app = HeadlessAppBuilder::new().build();
        let entity = drop_ball(&mut app, Vec3::new(0.0, 0.5, 0.0), Vec3::ZERO);

        for _ in 0..120 {
            app.update();
        }

        let transform = app.world().get::<Transform>(entity).unwrap();
        let velocity = app.world().get::<Velocity>(entity).unwrap();
        assert!((transform.translation.y - 0.0).abs() < 1e-4);
        assert_eq!(velocity.0, Vec3::ZERO);
    }

    #[test]
    fn test_sensor_exit_reports_a_contact() {
        // flight systems only, so the test owns the contact queue
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(bevy::transform::TransformPlugin);
        app.init_resource::<ContactEvents>();
        app.insert_resource(GameTuning::default());
        app.add_systems(
            Update,
            (ball_gravity, apply_velocity, detect_sensor_exits).chain(),
        );

        // a sensor zone hanging in space
        app.world_mut().spawn((
            HoopSensor {
                ring: HoopRing::Outer,
                radius: 0.3,
                half_height: 0.1,
            },
            Transform::from_translation(Vec3::new(0.0, 2.0, 0.0)),
        ));
        // ball inside the zone, moving straight down fast enough to leave it
        drop_ball(&mut app, Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -2.0, 0.0));

        let handle = app.world().resource::<ContactEvents>().clone();
        let mut exits = Vec::new();
        for _ in 0..30 {
            app.update();
            exits.extend(handle.0.drain());
        }

        assert!(
            exits.iter().any(|c| matches!(
                c,
                ContactEnded {
                    a: BodyTag::Ball(BallId(900)),
                    b: BodyTag::OuterHoop,
                }
            )),
            "expected an outer-hoop exit, got {exits:?}"
        );
    }
}
