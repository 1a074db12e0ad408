//! Pan-gesture interpretation
//!
//! The UI layer reports the velocity of a finished pan gesture; this module
//! turns it into the power factor a throw carries.

use crate::constants::{PAN_FRONT_FACTOR, PAN_VELOCITY_DIVISOR};

/// End-of-pan velocity in screen points per second.
/// Screen y grows downward, so an upward flick has negative y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanVelocity {
    pub x: f32,
    pub y: f32,
}

/// Throw power derived from a pan gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerFactor {
    /// Forward push along the camera axis
    pub front: f32,
    /// Upward lift
    pub up: f32,
}

/// Interpret a finished pan as throw power.
/// Flicks that do not travel up the screen are not throws and yield `None`.
pub fn power_factor(velocity: PanVelocity) -> Option<PowerFactor> {
    let magnitude = (velocity.x * velocity.x + velocity.y * velocity.y).sqrt();
    let slide = magnitude / PAN_VELOCITY_DIVISOR;
    let front = PAN_FRONT_FACTOR * slide;
    let up = -velocity.y / PAN_VELOCITY_DIVISOR;

    (up > 0.0).then_some(PowerFactor { front, up })
}
