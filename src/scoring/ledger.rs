//! Score ledger - the running total and how it got there

use bevy::prelude::*;

use crate::ball::BallId;

use super::calculator::Points;

/// One made shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry {
    pub ball: BallId,
    pub points: Points,
}

/// Append-only record of every made shot. The running total only ever grows,
/// and only through `append`.
#[derive(Resource, Default, Debug)]
pub struct ScoreLedger {
    entries: Vec<ScoreEntry>,
    total: u32,
}

impl ScoreLedger {
    /// Record a made shot and return the new running total
    pub fn append(&mut self, ball: BallId, points: Points) -> u32 {
        self.entries.push(ScoreEntry { ball, points });
        self.total += points.value();
        self.total
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
