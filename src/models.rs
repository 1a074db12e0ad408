//! Model catalog - the 3D assets the render layer loads on our behalf
//!
//! The core never touches mesh data. It names assets, knows their real-world
//! proportions, and resolves the size grades a session was configured with.

use bevy::prelude::*;

use crate::constants::BALL_DIAMETER;

/// Loadable scene assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeModel {
    Post,
    Ball,
    Floor,
}

impl NodeModel {
    /// Node name inside the scene file
    pub fn node_name(&self) -> &'static str {
        match self {
            NodeModel::Post => "BasketballPost",
            NodeModel::Ball => "Basketball",
            NodeModel::Floor => "floor",
        }
    }

    /// Scene file the node is loaded from
    pub fn scene_path(&self) -> &'static str {
        match self {
            NodeModel::Post | NodeModel::Floor => "models/basketball_post.glb",
            NodeModel::Ball => "models/basketball.glb",
        }
    }

    /// Axis-aligned extents of the unscaled model, in meters
    pub fn base_extents(&self) -> Vec3 {
        match self {
            NodeModel::Post => Vec3::new(1.8, 4.0, 1.2),
            NodeModel::Ball => Vec3::splat(BALL_DIAMETER),
            NodeModel::Floor => Vec3::new(3.0, 0.02, 3.0),
        }
    }
}

/// Extents of a model after uniform scaling
pub fn scaled_extents(model: NodeModel, scale: f32) -> Vec3 {
    model.base_extents() * scale
}

/// Model size relative to the real world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelSize {
    /// 4 meter post
    #[default]
    Real,
    /// 2 meters
    Half,
    /// 1.33 meters
    Third,
    /// 1 meter
    Quarter,
    /// 0.5 meters
    Quaver,
}

impl ModelSize {
    pub fn factor(&self) -> f32 {
        match self {
            ModelSize::Real => 1.0,
            ModelSize::Half => 0.5,
            ModelSize::Third => 0.3333,
            ModelSize::Quarter => 0.25,
            ModelSize::Quaver => 0.125,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModelSize::Real => "real",
            ModelSize::Half => "half",
            ModelSize::Third => "third",
            ModelSize::Quarter => "quarter",
            ModelSize::Quaver => "quaver",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, ModelError> {
        match name {
            "real" => Ok(ModelSize::Real),
            "half" => Ok(ModelSize::Half),
            "third" => Ok(ModelSize::Third),
            "quarter" => Ok(ModelSize::Quarter),
            "quaver" => Ok(ModelSize::Quaver),
            other => Err(ModelError::UnknownSize(other.to_string())),
        }
    }
}

/// Ball size grade, scaling down from the size-10 ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallSizeGrade {
    #[default]
    Size10,
    Size7,
    Size6,
    Size5,
    Size3,
}

impl BallSizeGrade {
    pub fn factor(&self) -> f32 {
        match self {
            BallSizeGrade::Size10 => 1.0,
            BallSizeGrade::Size7 => 0.855,
            BallSizeGrade::Size6 => 0.826,
            BallSizeGrade::Size5 => 0.797,
            BallSizeGrade::Size3 => 0.739,
        }
    }

    /// Real-world diameter of this grade, in meters
    pub fn diameter(&self) -> f32 {
        BALL_DIAMETER * self.factor()
    }

    pub fn name(&self) -> &'static str {
        match self {
            BallSizeGrade::Size10 => "size10",
            BallSizeGrade::Size7 => "size7",
            BallSizeGrade::Size6 => "size6",
            BallSizeGrade::Size5 => "size5",
            BallSizeGrade::Size3 => "size3",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, ModelError> {
        match name {
            "size10" => Ok(BallSizeGrade::Size10),
            "size7" => Ok(BallSizeGrade::Size7),
            "size6" => Ok(BallSizeGrade::Size6),
            "size5" => Ok(BallSizeGrade::Size5),
            "size3" => Ok(BallSizeGrade::Size3),
            other => Err(ModelError::UnknownGrade(other.to_string())),
        }
    }
}

/// Failure to resolve a model or size grade by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownSize(String),
    UnknownGrade(String),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::UnknownSize(name) => write!(f, "unknown model size '{name}'"),
            ModelError::UnknownGrade(name) => write!(f, "unknown ball grade '{name}'"),
        }
    }
}

impl std::error::Error for ModelError {}
