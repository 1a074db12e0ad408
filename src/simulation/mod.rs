//! Simulation module - headless app assembly and the stand-in flight model

mod app_builder;
mod flight;

pub use app_builder::*;
pub use flight::*;
