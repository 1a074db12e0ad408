//! Shot value calculation

use bevy::prelude::*;

/// Point value of a made shot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Points {
    One,
    Three,
}

impl Points {
    pub fn value(&self) -> u32 {
        match self {
            Points::One => 1,
            Points::Three => 3,
        }
    }
}

/// Score a made shot by how far from the post it happened.
///
/// The three-point line is a real-world distance, so the threshold shrinks
/// with the model scale. The three-point region is closed at the threshold:
/// exactly on the line counts 3.
pub fn shot_points(
    shot_pos: Vec3,
    post_pos: Vec3,
    model_scale: f32,
    three_point_distance: f32,
) -> Points {
    let distance = shot_pos.distance(post_pos);
    if distance >= three_point_distance * model_scale {
        Points::Three
    } else {
        Points::One
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::THREE_POINT_DISTANCE;

    #[test]
    fn test_close_shot_is_one_point() {
        let points = shot_points(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO, 1.0, THREE_POINT_DISTANCE);
        assert_eq!(points, Points::One);
    }

    #[test]
    fn test_long_shot_is_three_points() {
        let points = shot_points(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, 1.0, THREE_POINT_DISTANCE);
        assert_eq!(points, Points::Three);
    }

    #[test]
    fn test_exactly_on_the_line_counts_three() {
        // a power-of-two threshold keeps the distance exact through sqrt
        let points = shot_points(Vec3::new(8.0, 0.0, 0.0), Vec3::ZERO, 1.0, 8.0);
        assert_eq!(points, Points::Three);
    }

    #[test]
    fn test_just_inside_the_line_counts_one() {
        let points = shot_points(Vec3::new(7.99, 0.0, 0.0), Vec3::ZERO, 1.0, 8.0);
        assert_eq!(points, Points::One);
    }

    #[test]
    fn test_threshold_scales_with_the_model() {
        // at quarter scale the line sits at 1.81 m
        let scale = 0.25;
        let just_outside = Vec3::new(THREE_POINT_DISTANCE * scale + 0.01, 0.0, 0.0);
        let just_inside = Vec3::new(THREE_POINT_DISTANCE * scale - 0.01, 0.0, 0.0);
        assert_eq!(
            shot_points(just_outside, Vec3::ZERO, scale, THREE_POINT_DISTANCE),
            Points::Three
        );
        assert_eq!(
            shot_points(just_inside, Vec3::ZERO, scale, THREE_POINT_DISTANCE),
            Points::One
        );
    }

    #[test]
    fn test_distance_is_euclidean() {
        // 3-4-5 triangle in the xz plane, well inside the arc
        let points = shot_points(Vec3::new(3.0, 0.0, 4.0), Vec3::ZERO, 1.0, THREE_POINT_DISTANCE);
        assert_eq!(points, Points::One);
    }
}
