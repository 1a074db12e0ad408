//! Inbound boundaries from the external AR, physics, and UI layers
//!
//! The platform side runs its own threads: the physics engine reports ended
//! contacts from its simulation step, gestures arrive from the UI thread, and
//! plane placement from the tracking callbacks. Each boundary is a
//! mutex-guarded FIFO whose handle clones cheaply to those threads; game
//! systems drain them once per tick, preserving arrival order.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use bevy::prelude::*;

use crate::ball::{BallId, ReleaseInfo};
use crate::input::PowerFactor;

/// Category tag carried by every collidable body the physics layer reports.
/// Identity lives in the tag, not in node names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyTag {
    Ball(BallId),
    OuterHoop,
    InnerHoop,
    Post,
    Floor,
    Untagged,
}

/// A "contact ended" report for a body pair. Order of `a`/`b` is arbitrary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEnded {
    pub a: BodyTag,
    pub b: BodyTag,
}

/// A throw request: where the camera was and how hard the flick was
#[derive(Debug, Clone, Copy)]
pub struct ThrowCommand {
    pub release: ReleaseInfo,
    pub power: PowerFactor,
}

/// A post placement request from the plane-tracking layer
#[derive(Debug, Clone, Copy)]
pub struct PostPlacement {
    pub position: Vec3,
    pub scale: f32,
}

/// Mutex-guarded FIFO shared with a producer thread.
/// Cloning yields another handle to the same queue.
#[derive(Debug)]
pub struct InboundQueue<T> {
    inner: Arc<Mutex<VecDeque<T>>>,
}

impl<T> Clone for InboundQueue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for InboundQueue<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
        }
    }
}

impl<T> InboundQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, item: T) {
        self.inner.lock().unwrap().push_back(item);
    }

    /// Take everything queued so far, in arrival order
    pub fn drain(&self) -> Vec<T> {
        self.inner.lock().unwrap().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Contact-ended stream from the physics step
#[derive(Resource, Default, Clone)]
pub struct ContactEvents(pub InboundQueue<ContactEnded>);

/// Throw requests from the gesture layer
#[derive(Resource, Default, Clone)]
pub struct ThrowEvents(pub InboundQueue<ThrowCommand>);

/// Post placements from the plane-tracking layer
#[derive(Resource, Default, Clone)]
pub struct PlacementEvents(pub InboundQueue<PostPlacement>);
