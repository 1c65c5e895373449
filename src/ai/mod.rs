//! Non-player units: pursuing police and wandering grannies.

pub mod granny;
pub mod police;

pub use police::nearest_target;
