//! Bounded registry of the balls currently in play

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::constants::MAX_BALLS_ON_SCENE;

use super::components::BallId;

/// A ball popped from the registry to make room for a newer one.
/// The caller owns removing the entity from the scene and dropping any
/// outcome-tracking state for the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvictedBall {
    pub id: BallId,
    pub entity: Entity,
}

/// Insertion-ordered registry of every live ball.
///
/// Capacity is enforced by eviction, never by rejection: registering the
/// ball that would exceed the cap pops the oldest entry (by insertion order,
/// not flight time) and hands it back. Insertion happens before eviction, so
/// a ball can never be evicted before it was inserted.
#[derive(Resource, Debug)]
pub struct BallRegistry {
    entries: VecDeque<(BallId, Entity)>,
    next_seq: u64,
    capacity: usize,
}

impl Default for BallRegistry {
    fn default() -> Self {
        Self::with_capacity(MAX_BALLS_ON_SCENE)
    }
}

impl BallRegistry {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            next_seq: 1,
            capacity: capacity.max(1),
        }
    }

    /// Assign the next sequence id to `entity` and store it.
    /// Returns the new id and, when the cap was exceeded, the evicted ball.
    pub fn register(&mut self, entity: Entity) -> (BallId, Option<EvictedBall>) {
        let id = BallId(self.next_seq);
        self.next_seq += 1;
        self.entries.push_back((id, entity));

        let evicted = if self.entries.len() > self.capacity {
            self.entries
                .pop_front()
                .map(|(id, entity)| EvictedBall { id, entity })
        } else {
            None
        };

        (id, evicted)
    }

    pub fn contains(&self, id: BallId) -> bool {
        self.entries.iter().any(|(entry, _)| *entry == id)
    }

    pub fn entity_of(&self, id: BallId) -> Option<Entity> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, entity)| *entity)
    }

    /// Oldest still-registered ball, the next eviction candidate
    pub fn oldest(&self) -> Option<BallId> {
        self.entries.front().map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BallId, Entity)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
