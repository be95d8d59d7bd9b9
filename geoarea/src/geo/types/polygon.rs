use super::{CompositeGeometryTrait, MultiPolygonGeometry, RingGeometry, SphericalArea};
use anyhow::Result;
use std::fmt::Debug;

/// A polygon: one exterior ring at index 0, followed by any number of
/// interior rings ("holes"). Callers are responsible for holes lying
/// inside the exterior and not overlapping each other; this is never
/// verified here.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// Wraps this single polygon into a [`MultiPolygonGeometry`].
	#[must_use]
	pub fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

impl SphericalArea for PolygonGeometry {
	/// Net area: absolute exterior area minus the absolute area of every
	/// hole, independent of each ring's winding direction.
	fn area(&self) -> Result<f64> {
		crate::math::polygon_area(self)
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		for interior in interiors {
			rings.push(RingGeometry::from(interior));
		}
		PolygonGeometry(rings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn area_positive_for_simple_square() {
		let polygon = PolygonGeometry::from(&[[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]]);
		assert!(polygon.area().unwrap() > 0.0);
	}

	#[test]
	fn area_fails_without_rings() {
		assert!(PolygonGeometry::new().area().is_err());
	}

	#[test]
	fn from_geo_polygon_keeps_exterior_and_holes() {
		let exterior = geo::LineString::from(vec![(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0), (0.0, 0.0)]);
		let hole = geo::LineString::from(vec![(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0), (1.0, 1.0)]);
		let polygon = PolygonGeometry::from(geo::Polygon::new(exterior, vec![hole]));
		assert_eq!(polygon.len(), 2);
		assert_eq!(polygon.first().unwrap().len(), 5);
	}

	#[test]
	fn into_multi() {
		let polygon = PolygonGeometry::from(&[[[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]]);
		assert_eq!(polygon.clone().into_multi().as_vec()[0], polygon);
	}
}
