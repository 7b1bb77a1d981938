//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the action layer and the outside world.
//! They are defined here (in `app`) so that both the actions and the driver
//! adapters can depend on them without creating circular dependencies.

pub mod aircon;

pub use aircon::AirCon;
