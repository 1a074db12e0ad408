//! Testing module - the TOML scenario driver used by integration tests

mod scenario;

pub use scenario::*;
