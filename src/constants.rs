//! Tunable constants for hoopshot
//!
//! All gameplay values are defined here for easy tweaking.

// =============================================================================
// SCENE CAPACITY
// =============================================================================

/// Maximum number of balls kept in play; the oldest is removed beyond this
pub const MAX_BALLS_ON_SCENE: usize = 10;

// =============================================================================
// SCORING
// =============================================================================

/// Three-point line distance in meters at real-world scale
pub const THREE_POINT_DISTANCE: f32 = 7.24;

// =============================================================================
// THROWING
// =============================================================================

/// Multiplier from gesture front factor to forward launch speed
pub const THROW_FORCE_MULTIPLIER: f32 = 3.0;
/// Screen points/sec of pan velocity that count as one unit of slide
pub const PAN_VELOCITY_DIVISOR: f32 = 200.0;
/// Fraction of the slide magnitude that becomes forward power
pub const PAN_FRONT_FACTOR: f32 = 0.1;

// =============================================================================
// POST AND RIM GEOMETRY (meters at real-world scale)
// =============================================================================

/// Regulation rim height above the floor
pub const RIM_HEIGHT: f32 = 3.05;
/// Rim center offset forward of the post upright
pub const RIM_FORWARD_OFFSET: f32 = 0.45;
/// Rim sensor radius
pub const RIM_RADIUS: f32 = 0.23;
/// Vertical distance between the outer and inner rim sensor centers
pub const HOOP_SENSOR_GAP: f32 = 0.25;
/// Half-height of each rim sensor zone
pub const HOOP_SENSOR_HALF_HEIGHT: f32 = 0.08;

// =============================================================================
// BALL
// =============================================================================

/// Size-10 ball diameter in meters; smaller grades scale down from this
pub const BALL_DIAMETER: f32 = 0.279;

// =============================================================================
// FLIGHT (stand-in for the external physics layer)
// =============================================================================

pub const FLIGHT_GRAVITY: f32 = 9.81;
/// Minimum integration step; keeps tight headless loops moving at a sane rate
pub const FLIGHT_MIN_DT: f32 = 1.0 / 60.0;
