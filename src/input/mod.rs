//! Input module - gesture interpretation

mod gesture;

pub use gesture::*;
