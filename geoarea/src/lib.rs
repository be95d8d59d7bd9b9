mod geo;
pub mod math;

pub use geo::*;
