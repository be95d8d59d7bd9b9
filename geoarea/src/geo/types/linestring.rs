use super::{CompositeGeometryTrait, Coordinates, MultiLineStringGeometry, SphericalArea};
use anyhow::Result;
use std::fmt::Debug;

/// An open sequence of positions.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl LineStringGeometry {
	/// Wraps this single line into a [`MultiLineStringGeometry`].
	#[must_use]
	pub fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(vec![self])
	}
}

impl SphericalArea for LineStringGeometry {
	/// A line encloses nothing, so its area is always `0.0`.
	fn area(&self) -> Result<f64> {
		Ok(0.0)
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);

impl From<geo::LineString<f64>> for LineStringGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		LineStringGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn area_is_zero() {
		let line = LineStringGeometry::from(&[[0, 0], [10, 0], [10, 10]]);
		assert_eq!(line.area().unwrap(), 0.0);
	}

	#[test]
	fn composite_ops() {
		let mut line = LineStringGeometry::new();
		assert!(line.is_empty());
		line.push(Coordinates::new(1.0, 2.0));
		assert_eq!(line.len(), 1);
		assert_eq!(line.into_inner().len(), 1);
	}

	#[test]
	fn into_multi() {
		let line = LineStringGeometry::from(&[[0, 0], [1, 1]]);
		assert_eq!(line.clone().into_multi().as_vec()[0], line);
	}

	#[test]
	fn from_geo_linestring() {
		let ls = geo::LineString::from(vec![geo::Coord { x: 0.0, y: 0.0 }, geo::Coord { x: 1.0, y: 1.0 }]);
		assert_eq!(LineStringGeometry::from(ls).len(), 2);
	}
}
