//! Ball components

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Marker for ball entities
#[derive(Component)]
pub struct Ball;

/// Unique ball identity: a monotonically increasing sequence number assigned
/// at throw time, never reused. Everything outside the scene graph refers to
/// balls by this id, never by name or node pointer.
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BallId(pub u64);

impl std::fmt::Display for BallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ball#{}", self.0)
    }
}

/// Camera pose and world position captured at the moment of release
#[derive(Component, Debug, Clone, Copy)]
pub struct ReleaseInfo {
    pub position: Vec3,
    pub transform: Transform,
}

/// Linear velocity, integrated by the stand-in flight model
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct Velocity(pub Vec3);

/// Which rim sensors the ball currently overlaps.
/// Contact-ended events fire on the true-to-false edge.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct SensorContacts {
    pub outer: bool,
    pub inner: bool,
}
