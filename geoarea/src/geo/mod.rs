mod decode;
mod geometry;
mod types;

pub use geometry::*;
pub use types::*;

pub(crate) use decode::{
	coordinates_payload, geometries_payload, geometry_type, multi_polygon_from_value, polygon_from_value,
};
