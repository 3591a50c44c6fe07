pub mod orbit;
pub mod pointer;

pub use orbit::{wire_orbit_handlers, OrbitWiring};
pub use pointer::{wire_tap_handlers, TapWiring};
