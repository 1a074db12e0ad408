//! Events module - bus, session buffer, and event types

mod buffer;
mod bus;
mod types;

pub use buffer::*;
pub use bus::*;
pub use types::*;
