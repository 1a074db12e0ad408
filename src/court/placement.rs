//! Placement-area sizing for the post
//!
//! The tracking layer reports detected plane extents; before offering a
//! placement surface it asks whether the post would actually fit there.

use bevy::prelude::*;

use crate::models::{ModelSize, NodeModel};

/// Ground footprint the post needs at the given model size
pub fn placement_area_size(size: ModelSize) -> Vec2 {
    let extents = NodeModel::Post.base_extents();
    Vec2::new(extents.x, extents.z) * size.factor()
}

/// Whether a detected plane extent can host the post.
/// Either orientation of the footprint may fit.
pub fn plane_fits_post(candidate: Vec2, required: Vec2) -> bool {
    (candidate.x >= required.x && candidate.y >= required.y)
        || (candidate.x >= required.y && candidate.y >= required.x)
}
