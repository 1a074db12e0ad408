//! Post placement and rim sensors

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bridge::PlacementEvents;
use crate::constants::*;
use crate::events::{EventBus, GameEvent};

/// Marker for the placed basketball post
#[derive(Component)]
pub struct Post;

/// Marker for the static floor body placed with the post
#[derive(Component)]
pub struct FloorBody;

/// Which rim sensor a zone represents: `Outer` sits at rim entry, `Inner`
/// below it at the net. A shot counts only when a ball leaves them in that
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoopRing {
    Outer,
    Inner,
}

/// Rim collision zone attached to the post at placement time.
/// Shaped as a squat cylinder: `radius` across, `half_height` tall.
#[derive(Component, Debug, Clone, Copy)]
pub struct HoopSensor {
    pub ring: HoopRing,
    pub radius: f32,
    pub half_height: f32,
}

/// A post standing in the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedPost {
    pub position: Vec3,
    pub scale: f32,
}

/// Where the post stands, once placed. `None` until then, and every scoring
/// path treats that as "no score possible" rather than an error.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PostAnchor {
    pub placed: Option<PlacedPost>,
}

/// Local offset of the outer rim sensor from the post origin at unit scale
fn outer_sensor_offset() -> Vec3 {
    Vec3::new(0.0, RIM_HEIGHT, RIM_FORWARD_OFFSET)
}

/// Spawn the post with its floor body and both rim sensors as children.
/// Sensor geometry scales with the model.
pub fn spawn_post_with_hoops(commands: &mut Commands, position: Vec3, scale: f32) -> Entity {
    let outer_local = outer_sensor_offset() * scale;
    let inner_local = outer_local - Vec3::Y * (HOOP_SENSOR_GAP * scale);
    let radius = RIM_RADIUS * scale;
    let half_height = HOOP_SENSOR_HALF_HEIGHT * scale;

    commands
        .spawn((Post, Transform::from_translation(position)))
        .with_children(|parent| {
            parent.spawn((FloorBody, Transform::from_translation(Vec3::ZERO)));
            parent.spawn((
                HoopSensor {
                    ring: HoopRing::Outer,
                    radius,
                    half_height,
                },
                Transform::from_translation(outer_local),
            ));
            parent.spawn((
                HoopSensor {
                    ring: HoopRing::Inner,
                    radius,
                    half_height,
                },
                Transform::from_translation(inner_local),
            ));
        })
        .id()
}

/// Consume queued placements. Only the first placement takes effect; the
/// post and its rim identities are fixed for the rest of the session.
pub fn place_post(
    mut commands: Commands,
    placements: Res<PlacementEvents>,
    mut anchor: ResMut<PostAnchor>,
    mut bus: ResMut<EventBus>,
) {
    for placement in placements.0.drain() {
        if anchor.placed.is_some() {
            info!("post already placed, ignoring placement at {}", placement.position);
            continue;
        }

        spawn_post_with_hoops(&mut commands, placement.position, placement.scale);
        anchor.placed = Some(PlacedPost {
            position: placement.position,
            scale: placement.scale,
        });
        bus.emit(GameEvent::PostPlaced {
            pos: placement.position.into(),
            scale: placement.scale,
        });
        info!(
            "post placed at {} (scale {})",
            placement.position, placement.scale
        );
    }
}
