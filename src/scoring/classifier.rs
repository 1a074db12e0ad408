//! Collision pair classification

use crate::ball::BallId;
use crate::bridge::{BodyTag, ContactEnded};
use crate::court::HoopRing;

/// A ball crossing one of the rim sensors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoopContact {
    pub ball: BallId,
    pub ring: HoopRing,
}

/// Classify an ended contact into a rim crossing, if it is one.
///
/// Order-independent. Any pair that is not exactly one ball and one rim
/// sensor - balls bumping each other, a ball off the post or floor, anything
/// untagged - is dropped.
pub fn classify(contact: ContactEnded) -> Option<HoopContact> {
    match (contact.a, contact.b) {
        (BodyTag::Ball(ball), BodyTag::OuterHoop) | (BodyTag::OuterHoop, BodyTag::Ball(ball)) => {
            Some(HoopContact {
                ball,
                ring: HoopRing::Outer,
            })
        }
        (BodyTag::Ball(ball), BodyTag::InnerHoop) | (BodyTag::InnerHoop, BodyTag::Ball(ball)) => {
            Some(HoopContact {
                ball,
                ring: HoopRing::Inner,
            })
        }
        _ => None,
    }
}
