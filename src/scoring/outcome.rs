//! Shot outcome tracking - the two-stage scoring state machine
//!
//! A ball scores iff it leaves the outer rim sensor and then the inner one,
//! in that order. The first inner-ring contact latches the ball `Voided`
//! whether or not it scored, so rattling in and out of the net can never
//! count twice, and a ball that sneaks into the inner sensor sideways never
//! counts at all.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::ball::{Ball, BallId, BallRegistry};
use crate::bridge::ContactEvents;
use crate::court::{HoopRing, PostAnchor};
use crate::events::{EventBus, GameEvent};
use crate::tuning::GameTuning;

use super::calculator::shot_points;
use super::classifier::classify;
use super::ledger::ScoreLedger;

/// Per-ball scoring progress. `Voided` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShotOutcome {
    #[default]
    Fresh,
    ThroughOuter,
    Voided,
}

/// The scoring state machine for every tracked ball.
///
/// Entries are created when a ball is registered and dropped when it is
/// evicted, so the working set never outgrows the registry cap. A contact
/// for an id with no entry means the ball was evicted before its contact
/// drained - an accepted race, ignored.
#[derive(Resource, Default, Debug)]
pub struct ShotTracker {
    states: HashMap<BallId, ShotOutcome>,
}

impl ShotTracker {
    /// Start tracking a freshly thrown ball
    pub fn track(&mut self, id: BallId) {
        self.states.insert(id, ShotOutcome::Fresh);
    }

    /// Drop all state for a ball (eviction)
    pub fn forget(&mut self, id: BallId) {
        self.states.remove(&id);
    }

    pub fn outcome(&self, id: BallId) -> Option<ShotOutcome> {
        self.states.get(&id).copied()
    }

    pub fn tracked(&self) -> usize {
        self.states.len()
    }

    /// Outer-ring contact: arm the ball unless it is already spent.
    /// Returns the state after the transition.
    pub fn outer_contact(&mut self, id: BallId) -> Option<ShotOutcome> {
        let state = self.states.get_mut(&id)?;
        if *state != ShotOutcome::Voided {
            *state = ShotOutcome::ThroughOuter;
        }
        Some(*state)
    }

    /// Inner-ring contact: report whether the ball scores, then latch it
    /// `Voided` unconditionally.
    pub fn inner_contact(&mut self, id: BallId) -> Option<bool> {
        let state = self.states.get_mut(&id)?;
        let scores = *state == ShotOutcome::ThroughOuter;
        *state = ShotOutcome::Voided;
        Some(scores)
    }
}

/// Drain the contact stream, classify each pair, and advance the state
/// machine; made shots are valued at the ball's current position and
/// appended to the ledger.
pub fn process_hoop_contacts(
    contacts: Res<ContactEvents>,
    registry: Res<BallRegistry>,
    tuning: Res<GameTuning>,
    anchor: Res<PostAnchor>,
    mut tracker: ResMut<ShotTracker>,
    mut ledger: ResMut<ScoreLedger>,
    mut bus: ResMut<EventBus>,
    balls: Query<&Transform, With<Ball>>,
) {
    for contact in contacts.0.drain() {
        let Some(hoop) = classify(contact) else {
            continue;
        };

        if tracker.outcome(hoop.ball).is_none() {
            if registry.contains(hoop.ball) {
                // a registered ball we were never told about starts fresh
                tracker.track(hoop.ball);
            } else {
                // evicted before its contact drained: cannot score, not an error
                continue;
            }
        }

        bus.emit(GameEvent::HoopPass {
            ball: hoop.ball,
            ring: hoop.ring,
        });

        match hoop.ring {
            HoopRing::Outer => {
                let _ = tracker.outer_contact(hoop.ball);
            }
            HoopRing::Inner => {
                let scored = tracker.inner_contact(hoop.ball).unwrap_or(false);
                if !scored {
                    continue;
                }
                // a make still needs a placed post and a live ball position
                let Some(post) = anchor.placed else {
                    continue;
                };
                let Some(entity) = registry.entity_of(hoop.ball) else {
                    continue;
                };
                let Ok(transform) = balls.get(entity) else {
                    continue;
                };
                let points = shot_points(
                    transform.translation,
                    post.position,
                    post.scale,
                    tuning.three_point_distance,
                );
                let total = ledger.append(hoop.ball, points);
                bus.emit(GameEvent::Score {
                    ball: hoop.ball,
                    points: points.value(),
                    total,
                });
                info!("{} scores {} ({} total)", hoop.ball, points.value(), total);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swish_scores_once() {
        let mut tracker = ShotTracker::default();
        let id = BallId(1);
        tracker.track(id);

        assert_eq!(tracker.outer_contact(id), Some(ShotOutcome::ThroughOuter));
        assert_eq!(tracker.inner_contact(id), Some(true));
        assert_eq!(tracker.outcome(id), Some(ShotOutcome::Voided));
    }

    #[test]
    fn test_bounce_back_through_the_net_does_not_score_again() {
        let mut tracker = ShotTracker::default();
        let id = BallId(2);
        tracker.track(id);

        let _ = tracker.outer_contact(id);
        assert_eq!(tracker.inner_contact(id), Some(true));
        // ball rattles: inner again, then outer, then inner again
        assert_eq!(tracker.inner_contact(id), Some(false));
        assert_eq!(tracker.outer_contact(id), Some(ShotOutcome::Voided));
        assert_eq!(tracker.inner_contact(id), Some(false));
    }

    #[test]
    fn test_airball_straight_to_inner_never_scores() {
        let mut tracker = ShotTracker::default();
        let id = BallId(3);
        tracker.track(id);

        assert_eq!(tracker.inner_contact(id), Some(false));
        assert_eq!(tracker.outcome(id), Some(ShotOutcome::Voided));
    }

    #[test]
    fn test_repeated_outer_contacts_stay_armed() {
        let mut tracker = ShotTracker::default();
        let id = BallId(4);
        tracker.track(id);

        let _ = tracker.outer_contact(id);
        let _ = tracker.outer_contact(id);
        assert_eq!(tracker.outcome(id), Some(ShotOutcome::ThroughOuter));
        assert_eq!(tracker.inner_contact(id), Some(true));
    }

    #[test]
    fn test_forgotten_ball_is_ignored() {
        let mut tracker = ShotTracker::default();
        let id = BallId(5);
        tracker.track(id);
        tracker.forget(id);

        assert_eq!(tracker.outer_contact(id), None);
        assert_eq!(tracker.inner_contact(id), None);
        assert_eq!(tracker.tracked(), 0);
    }

    #[test]
    fn test_each_ball_is_tracked_independently() {
        let mut tracker = ShotTracker::default();
        let a = BallId(6);
        let b = BallId(7);
        tracker.track(a);
        tracker.track(b);

        let _ = tracker.outer_contact(a);
        // b never went through the outer ring
        assert_eq!(tracker.inner_contact(b), Some(false));
        assert_eq!(tracker.inner_contact(a), Some(true));
    }
}
